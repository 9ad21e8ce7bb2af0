use crate::application_ports::Locator;
use application_ports::workspace::{ChannelDto, UserDto, WorkspaceSnapshotDto};
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::instrument;

#[derive(Serialize)]
pub struct SnapshotResponse {
    users: Vec<UserResponse>,
    channels: Vec<ChannelResponse>,
}

#[derive(Serialize)]
struct UserResponse {
    id: String,
    name: String,
}

#[derive(Serialize)]
struct ChannelResponse {
    id: String,
    name: String,
    is_private: bool,
    members: Vec<String>,
}

#[instrument(level = "info", skip_all)]
pub async fn data_handler<L: Locator>(State(locator): State<L>) -> Json<SnapshotResponse> {
    let workspace_port = locator.get_workspace_port();

    let WorkspaceSnapshotDto { users, channels } = workspace_port.get_snapshot().await;

    Json(SnapshotResponse {
        users: users.into_iter().map(user_response).collect(),
        channels: channels.into_iter().map(channel_response).collect(),
    })
}

fn user_response(user: UserDto) -> UserResponse {
    UserResponse {
        id: user.user_id.0,
        name: user.name,
    }
}

fn channel_response(channel: ChannelDto) -> ChannelResponse {
    ChannelResponse {
        id: channel.channel_id.0,
        name: channel.name,
        is_private: channel.is_private,
        members: channel.members.into_iter().map(|user_id| user_id.0).collect(),
    }
}
