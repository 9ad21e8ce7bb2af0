use crate::api::response;
use crate::application_ports::Locator;
use application_ports::channel::{ChannelError, CreatedChannelDto};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain_shared::slack::ChannelId;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

const BOT_NOT_IN_CHANNEL: &str =
    "Operation failed: the bot is not a member of this private channel.";

#[derive(Deserialize, Debug)]
pub struct CreateChannelRequest {
    name: Option<String>,
    is_private: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct ArchiveChannelRequest {
    channel_id: Option<String>,
}

#[derive(Serialize)]
struct CreatedChannelResponse {
    ok: bool,
    channel: ChannelResponse,
}

#[derive(Serialize)]
struct ChannelResponse {
    id: String,
    name: String,
    is_private: bool,
}

#[instrument(level = "info", skip(locator))]
pub async fn create_channel_handler<L: Locator>(
    State(locator): State<L>,
    request: Result<Json<CreateChannelRequest>, JsonRejection>,
) -> Response {
    let CreateChannelRequest { name, is_private } = match request {
        Ok(Json(request)) => request,
        Err(rejection) => return response::invalid_body(rejection),
    };
    let is_private = is_private.unwrap_or(false);
    let Some(name) = response::required(name) else {
        return response::error(StatusCode::BAD_REQUEST, response::CHANNEL_NAME_REQUIRED);
    };

    let channel_port = locator.get_channel_port();

    match channel_port.create_channel(name, is_private).await {
        Ok(CreatedChannelDto {
            channel_id,
            name,
            is_private,
        }) => {
            info!(channel_id = %channel_id, "Channel created through API");
            let body = CreatedChannelResponse {
                ok: true,
                channel: ChannelResponse {
                    id: channel_id.0,
                    name,
                    is_private,
                },
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => channel_error(err),
    }
}

#[instrument(level = "info", skip(locator))]
pub async fn archive_channel_handler<L: Locator>(
    State(locator): State<L>,
    request: Result<Json<ArchiveChannelRequest>, JsonRejection>,
) -> Response {
    let ArchiveChannelRequest { channel_id } = match request {
        Ok(Json(request)) => request,
        Err(rejection) => return response::invalid_body(rejection),
    };
    let Some(channel_id) = response::required(channel_id) else {
        return response::error(StatusCode::BAD_REQUEST, response::CHANNEL_ID_REQUIRED);
    };

    let channel_port = locator.get_channel_port();

    match channel_port.archive_channel(ChannelId(channel_id)).await {
        Ok(()) => response::message("Channel archived successfully."),
        Err(err) => channel_error(err),
    }
}

fn channel_error(err: ChannelError) -> Response {
    match err {
        ChannelError::NameRequired => {
            response::error(StatusCode::BAD_REQUEST, response::CHANNEL_NAME_REQUIRED)
        }
        ChannelError::BotNotInChannel => {
            warn!("Rejected channel operation, the bot is not in the channel");
            response::error(StatusCode::FORBIDDEN, BOT_NOT_IN_CHANNEL)
        }
        ChannelError::Rejected(code) => {
            response::error(StatusCode::INTERNAL_SERVER_ERROR, &code)
        }
        ChannelError::TemporaryUnavailable => {
            response::error(StatusCode::INTERNAL_SERVER_ERROR, response::SLACK_UNAVAILABLE)
        }
    }
}
