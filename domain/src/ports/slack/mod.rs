mod channel_record;
mod page;
mod user_record;

use crate::channel::ChannelName;
use async_trait::async_trait;
pub use channel_record::ChannelRecord;
pub use domain_shared::slack::{ChannelId, Cursor, UserId};
pub use page::Page;
use thiserror::Error;
pub use user_record::UserRecord;

pub const NOT_IN_CHANNEL: &str = "not_in_channel";
pub const USER_NOT_IN_CHANNEL: &str = "user_not_in_channel";
pub const SLACK_UNAVAILABLE: &str = "slack_unavailable";

/// Outbound port to the Slack Web API.
///
/// Listing methods return a single page; walking the cursor is left to
/// [`crate::directory`].
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SlackPort {
    async fn find_users_page(&self, cursor: Option<Cursor>)
        -> Result<Page<UserRecord>, SlackError>;

    async fn find_channels_page(
        &self,
        cursor: Option<Cursor>,
    ) -> Result<Page<ChannelRecord>, SlackError>;

    async fn find_channel_members_page(
        &self,
        channel_id: &ChannelId,
        cursor: Option<Cursor>,
    ) -> Result<Page<UserId>, SlackError>;

    async fn find_own_user_id(&self) -> Result<UserId, SlackError>;

    async fn create_channel(
        &self,
        name: &ChannelName,
        is_private: bool,
    ) -> Result<ChannelRecord, SlackError>;

    async fn join_channel(&self, channel_id: &ChannelId) -> Result<(), SlackError>;

    async fn invite_members(
        &self,
        channel_id: &ChannelId,
        user_ids: &[UserId],
    ) -> Result<(), SlackError>;

    async fn kick_member(&self, channel_id: &ChannelId, user_id: &UserId)
        -> Result<(), SlackError>;

    async fn archive_channel(&self, channel_id: &ChannelId) -> Result<(), SlackError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlackError {
    #[error("Slack is unavailable")]
    SlackUnavailable,
    #[error("Slack rejected the request: {0}")]
    Rejected(String),
}

impl SlackError {
    pub fn rejected(code: impl Into<String>) -> Self {
        SlackError::Rejected(code.into())
    }

    /// The error code to surface to the operator.
    pub fn code(&self) -> &str {
        match self {
            SlackError::SlackUnavailable => SLACK_UNAVAILABLE,
            SlackError::Rejected(code) => code,
        }
    }

    /// The bot itself is not a member of the (private) channel.
    pub fn is_not_in_channel(&self) -> bool {
        matches!(self, SlackError::Rejected(code) if code == NOT_IN_CHANNEL)
    }

    /// A kick target is already gone from the channel.
    pub fn is_member_absent(&self) -> bool {
        matches!(
            self,
            SlackError::Rejected(code) if code == NOT_IN_CHANNEL || code == USER_NOT_IN_CHANNEL
        )
    }
}
