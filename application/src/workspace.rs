use application_ports::workspace::{ChannelDto, UserDto, WorkspacePort, WorkspaceSnapshotDto};
use async_trait::async_trait;
use domain::channel::Channel;
use domain::directory::{list_channel_members, list_channels, list_users};
use domain::ports::slack::SlackPort;
use domain::user::User;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct WorkspaceService {
    slack_port: Arc<dyn SlackPort + Send + Sync>,
}

impl WorkspaceService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(slack_port: Arc<dyn SlackPort + Send + Sync>) -> Self {
        Self { slack_port }
    }
}

#[async_trait]
impl WorkspacePort for WorkspaceService {
    #[instrument(level = "info", skip(self))]
    async fn get_snapshot(&self) -> WorkspaceSnapshotDto {
        let users = list_users(&*self.slack_port).await;
        let channel_records = list_channels(&*self.slack_port).await;

        // Slack has no batch members call, so this is one request per channel.
        let mut channels = Vec::with_capacity(channel_records.len());
        for record in channel_records {
            let members = list_channel_members(&*self.slack_port, &record.channel_id).await;
            channels.push(Channel::from_record(record, members));
        }

        info!(
            users = users.len(),
            channels = channels.len(),
            "Workspace snapshot assembled",
        );

        WorkspaceSnapshotDto {
            users: users.into_iter().map(domain_to_user_dto).collect(),
            channels: channels.into_iter().map(domain_to_channel_dto).collect(),
        }
    }
}

fn domain_to_user_dto(user: User) -> UserDto {
    let User { user_id, name } = user;

    UserDto { user_id, name }
}

fn domain_to_channel_dto(channel: Channel) -> ChannelDto {
    let Channel {
        channel_id,
        name,
        is_private,
        members,
    } = channel;

    ChannelDto {
        channel_id,
        name,
        is_private,
        members,
    }
}
