use crate::api::response;
use crate::application_ports::Locator;
use application_ports::membership::{MembershipError, MembershipSyncDto};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain_shared::slack::{ChannelId, UserId};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

const BOT_NOT_IN_CHANNEL: &str = "Operation failed: the bot is not a member of this private \
    channel. Please add the bot to the channel manually first!";

#[derive(Deserialize, Debug)]
pub struct UpdateMembershipsRequest {
    channel_id: Option<String>,
    target_member_ids: Option<Vec<String>>,
}

#[derive(Serialize)]
struct MembershipsUpdatedResponse {
    ok: bool,
    message: &'static str,
    invited: usize,
    kicked: usize,
    failed_kicks: usize,
}

#[instrument(level = "info", skip(locator, request))]
pub async fn update_memberships_handler<L: Locator>(
    State(locator): State<L>,
    request: Result<Json<UpdateMembershipsRequest>, JsonRejection>,
) -> Response {
    let UpdateMembershipsRequest {
        channel_id,
        target_member_ids,
    } = match request {
        Ok(Json(request)) => request,
        Err(rejection) => return response::invalid_body(rejection),
    };
    let Some(channel_id) = response::required(channel_id) else {
        return response::error(StatusCode::BAD_REQUEST, response::CHANNEL_ID_REQUIRED);
    };
    let target_member_ids = target_member_ids
        .unwrap_or_default()
        .into_iter()
        .map(UserId)
        .collect();

    let membership_port = locator.get_membership_port();

    match membership_port
        .sync_members(ChannelId(channel_id), target_member_ids)
        .await
    {
        Ok(MembershipSyncDto {
            invited,
            kicked,
            failed_kicks,
        }) => {
            let body = MembershipsUpdatedResponse {
                ok: true,
                message: "Membership updated successfully.",
                invited,
                kicked,
                failed_kicks,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(MembershipError::BotNotInChannel) => {
            warn!("Rejected membership sync, the bot is not in the channel");
            response::error(StatusCode::FORBIDDEN, BOT_NOT_IN_CHANNEL)
        }
        Err(MembershipError::Rejected(code)) => {
            response::error(StatusCode::INTERNAL_SERVER_ERROR, &code)
        }
        Err(MembershipError::TemporaryUnavailable) => {
            response::error(StatusCode::INTERNAL_SERVER_ERROR, response::SLACK_UNAVAILABLE)
        }
    }
}
