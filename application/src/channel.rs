use application_ports::channel::{ChannelError, ChannelPort, CreatedChannelDto};
use async_trait::async_trait;
use domain::channel::{ChannelName, ChannelNameError};
use domain::ports::slack::{ChannelRecord, SlackError, SlackPort};
use domain_shared::slack::ChannelId;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct ChannelService {
    slack_port: Arc<dyn SlackPort + Send + Sync>,
}

impl ChannelService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(slack_port: Arc<dyn SlackPort + Send + Sync>) -> Self {
        Self { slack_port }
    }
}

#[async_trait]
impl ChannelPort for ChannelService {
    #[instrument(level = "info", skip(self))]
    async fn create_channel(
        &self,
        name: String,
        is_private: bool,
    ) -> Result<CreatedChannelDto, ChannelError> {
        let name = ChannelName::parse(&name).map_err(map_channel_name_err)?;

        let channel = self
            .slack_port
            .create_channel(&name, is_private)
            .await
            .map_err(map_slack_err)?;

        // Slack adds the creator to private channels, public ones must be joined.
        if !is_private {
            self.slack_port
                .join_channel(&channel.channel_id)
                .await
                .map_err(map_slack_err)?;
        }

        info!(
            channel_id = %channel.channel_id,
            name = %channel.name,
            is_private = channel.is_private,
            "Channel created",
        );

        Ok(domain_to_created_channel_dto(channel))
    }

    #[instrument(level = "info", skip(self))]
    async fn archive_channel(&self, channel_id: ChannelId) -> Result<(), ChannelError> {
        self.slack_port
            .archive_channel(&channel_id)
            .await
            .map_err(map_slack_err)?;

        info!(channel_id = %channel_id, "Channel archived");

        Ok(())
    }
}

fn domain_to_created_channel_dto(channel: ChannelRecord) -> CreatedChannelDto {
    let ChannelRecord {
        channel_id,
        name,
        is_private,
    } = channel;

    CreatedChannelDto {
        channel_id,
        name,
        is_private,
    }
}

#[instrument(level = "trace", skip_all)]
fn map_channel_name_err(err: ChannelNameError) -> ChannelError {
    match err {
        ChannelNameError::Missing => {
            warn!("Channel name is missing");
            ChannelError::NameRequired
        }
    }
}

#[instrument(level = "trace", skip_all)]
fn map_slack_err(err: SlackError) -> ChannelError {
    if err.is_not_in_channel() {
        warn!("The bot is not a member of the channel");
        return ChannelError::BotNotInChannel;
    }

    match err {
        SlackError::SlackUnavailable => {
            error!("SlackError::SlackUnavailable");
            ChannelError::TemporaryUnavailable
        }
        SlackError::Rejected(code) => {
            error!(code = %code, "Slack rejected channel change");
            ChannelError::Rejected(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_slack::{FakeSlack, SlackCall};
    use domain::ports::slack::MockSlackPort;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn public_channel_is_lowercased_and_joined() {
        let slack = Arc::new(FakeSlack::new("UBOT"));
        let service = ChannelService::new(slack.clone());

        let channel = service
            .create_channel("Team Sync".into(), false)
            .await
            .unwrap();

        assert_eq!(channel.name, "team sync");
        assert!(!channel.is_private);
        assert_eq!(
            slack.writes(),
            vec![
                SlackCall::Create("team sync".into(), false),
                SlackCall::Join(channel.channel_id.clone()),
            ],
        );
    }

    #[tokio::test]
    async fn private_channel_is_not_joined() {
        let slack = Arc::new(FakeSlack::new("UBOT"));
        let service = ChannelService::new(slack.clone());

        let channel = service
            .create_channel("Leads".into(), true)
            .await
            .unwrap();

        assert_eq!(channel.name, "leads");
        assert!(channel.is_private);
        assert_eq!(
            slack.writes(),
            vec![SlackCall::Create("leads".into(), true)]
        );
    }

    #[tokio::test]
    async fn blank_name_never_reaches_slack() {
        let mut slack_port = MockSlackPort::new();
        slack_port.expect_create_channel().never();

        let service = ChannelService::new(Arc::new(slack_port));
        let result = service.create_channel("  ".into(), false).await;

        assert_eq!(result, Err(ChannelError::NameRequired));
    }

    #[tokio::test]
    async fn rejected_creation_passes_code_through() {
        let mut slack_port = MockSlackPort::new();
        slack_port
            .expect_create_channel()
            .withf(|name, is_private| name.as_str() == "general" && !*is_private)
            .times(1)
            .returning(|_, _| Err(SlackError::rejected("name_taken")));
        slack_port.expect_join_channel().never();

        let service = ChannelService::new(Arc::new(slack_port));
        let result = service.create_channel("General".into(), false).await;

        assert_eq!(result, Err(ChannelError::Rejected("name_taken".into())));
    }

    #[tokio::test]
    async fn archives_channel() {
        let slack = Arc::new(FakeSlack::new("UBOT").with_channel("C01", &["UBOT"]));
        let service = ChannelService::new(slack.clone());

        service
            .archive_channel(ChannelId("C01".into()))
            .await
            .unwrap();

        assert_eq!(
            slack.writes(),
            vec![SlackCall::Archive(ChannelId("C01".into()))]
        );
    }

    #[tokio::test]
    async fn archiving_without_membership_is_distinguished() {
        let mut slack_port = MockSlackPort::new();
        slack_port
            .expect_archive_channel()
            .with(eq(ChannelId("G01".into())))
            .times(1)
            .returning(|_| Err(SlackError::rejected("not_in_channel")));

        let service = ChannelService::new(Arc::new(slack_port));
        let result = service.archive_channel(ChannelId("G01".into())).await;

        assert_eq!(result, Err(ChannelError::BotNotInChannel));
    }

    #[tokio::test]
    async fn other_archive_failures_are_generic() {
        let mut slack_port = MockSlackPort::new();
        slack_port
            .expect_archive_channel()
            .returning(|_| Err(SlackError::rejected("already_archived")));

        let service = ChannelService::new(Arc::new(slack_port));
        let result = service.archive_channel(ChannelId("C01".into())).await;

        assert_eq!(result, Err(ChannelError::Rejected("already_archived".into())));
    }
}
