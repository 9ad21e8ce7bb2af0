use async_trait::async_trait;
use domain_shared::slack::{ChannelId, UserId};

#[async_trait]
pub trait WorkspacePort {
    /// Never fails; listings Slack could not deliver come back empty.
    async fn get_snapshot(&self) -> WorkspaceSnapshotDto;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSnapshotDto {
    pub users: Vec<UserDto>,
    pub channels: Vec<ChannelDto>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub user_id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDto {
    pub channel_id: ChannelId,
    pub name: String,
    pub is_private: bool,
    pub members: Vec<UserId>,
}
