use application_ports::membership::{MembershipError, MembershipPort, MembershipSyncDto};
use async_trait::async_trait;
use domain::directory::fetch_channel_members;
use domain::membership::MembershipDiff;
use domain::ports::slack::{SlackError, SlackPort};
use domain_shared::slack::{ChannelId, UserId};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub struct MembershipService {
    slack_port: Arc<dyn SlackPort + Send + Sync>,
}

impl MembershipService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(slack_port: Arc<dyn SlackPort + Send + Sync>) -> Self {
        Self { slack_port }
    }

    #[instrument(level = "debug", skip(self))]
    async fn find_current_members(
        &self,
        channel_id: &ChannelId,
    ) -> Result<Vec<UserId>, MembershipError> {
        match fetch_channel_members(&*self.slack_port, channel_id).await {
            Ok(members) => Ok(members),
            Err(err) if err.is_not_in_channel() => {
                warn!(
                    channel_id = %channel_id,
                    "Cannot sync members, the bot is not in the private channel",
                );
                Err(MembershipError::BotNotInChannel)
            }
            Err(err) => {
                // Read failures degrade like every other listing.
                warn!(
                    channel_id = %channel_id,
                    error = ?err,
                    "Failed to fetch current members, treating the channel as empty",
                );
                Ok(Vec::new())
            }
        }
    }

    /// Kicks are independent of each other; a failed one is logged and
    /// the rest still run.
    #[instrument(level = "debug", skip(self, to_kick, report))]
    async fn kick_members(
        &self,
        channel_id: &ChannelId,
        to_kick: &[UserId],
        report: &mut MembershipSyncDto,
    ) {
        for user_id in to_kick {
            match self.slack_port.kick_member(channel_id, user_id).await {
                Ok(()) => report.kicked += 1,
                Err(err) if err.is_member_absent() => {
                    debug!(
                        channel_id = %channel_id,
                        user_id = %user_id,
                        "Member already left the channel",
                    );
                    report.kicked += 1;
                }
                Err(err) => {
                    error!(
                        channel_id = %channel_id,
                        user_id = %user_id,
                        error = ?err,
                        "Failed to kick member from channel",
                    );
                    report.failed_kicks += 1;
                }
            }
        }
    }
}

#[async_trait]
impl MembershipPort for MembershipService {
    #[instrument(level = "info", skip(self, target_member_ids))]
    async fn sync_members(
        &self,
        channel_id: ChannelId,
        target_member_ids: Vec<UserId>,
    ) -> Result<MembershipSyncDto, MembershipError> {
        let current = self.find_current_members(&channel_id).await?;
        let mut diff = MembershipDiff::between(current, target_member_ids);

        let mut report = MembershipSyncDto::default();

        if !diff.to_invite.is_empty() {
            self.slack_port
                .invite_members(&channel_id, &diff.to_invite)
                .await
                .map_err(map_slack_err)?;
            report.invited = diff.to_invite.len();
        }

        if !diff.to_kick.is_empty() {
            let own_user_id = self
                .slack_port
                .find_own_user_id()
                .await
                .map_err(map_slack_err)?;
            if diff.spare(&own_user_id) {
                info!(
                    channel_id = %channel_id,
                    "Bot is not in the target members, keeping it in the channel anyway",
                );
            }

            self.kick_members(&channel_id, &diff.to_kick, &mut report)
                .await;
        }

        info!(
            channel_id = %channel_id,
            invited = report.invited,
            kicked = report.kicked,
            failed_kicks = report.failed_kicks,
            "Channel members synced",
        );

        Ok(report)
    }
}

#[instrument(level = "trace", skip_all)]
fn map_slack_err(err: SlackError) -> MembershipError {
    if err.is_not_in_channel() {
        return MembershipError::BotNotInChannel;
    }

    match err {
        SlackError::SlackUnavailable => {
            error!("SlackError::SlackUnavailable");
            MembershipError::TemporaryUnavailable
        }
        SlackError::Rejected(code) => {
            error!(code = %code, "Slack rejected membership change");
            MembershipError::Rejected(code)
        }
    }
}
