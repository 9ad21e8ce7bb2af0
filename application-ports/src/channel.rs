use async_trait::async_trait;
use domain_shared::slack::ChannelId;
use thiserror::Error;

#[async_trait]
pub trait ChannelPort {
    async fn create_channel(
        &self,
        name: String,
        is_private: bool,
    ) -> Result<CreatedChannelDto, ChannelError>;

    async fn archive_channel(&self, channel_id: ChannelId) -> Result<(), ChannelError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedChannelDto {
    pub channel_id: ChannelId,
    pub name: String,
    pub is_private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("Channel name is required")]
    NameRequired,
    #[error("The bot is not a member of the private channel")]
    BotNotInChannel,
    #[error("Slack rejected the request: {0}")]
    Rejected(String),
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
