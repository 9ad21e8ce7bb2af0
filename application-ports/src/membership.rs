use async_trait::async_trait;
use domain_shared::slack::{ChannelId, UserId};
use thiserror::Error;

#[async_trait]
pub trait MembershipPort {
    async fn sync_members(
        &self,
        channel_id: ChannelId,
        target_member_ids: Vec<UserId>,
    ) -> Result<MembershipSyncDto, MembershipError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipSyncDto {
    pub invited: usize,
    pub kicked: usize,
    /// Kicks that failed for a reason other than the member being gone already.
    pub failed_kicks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("The bot is not a member of the private channel")]
    BotNotInChannel,
    #[error("Slack rejected the request: {0}")]
    Rejected(String),
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
