//! Cursor walking over [`SlackPort`] listings.
//!
//! The `list_*` functions never fail: an unreachable or rejecting Slack
//! yields an empty listing and an error log, so one broken call cannot
//! take down the whole workspace overview.

use crate::ports::slack::{ChannelRecord, Cursor, Page, SlackError, SlackPort};
use crate::user::User;
use domain_shared::slack::{ChannelId, UserId};
use std::future::Future;
use tracing::{debug, error, instrument};

/// Requests pages until Slack stops returning a cursor, concatenating
/// them in cursor order.
pub async fn collect_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, SlackError>
where
    F: FnMut(Option<Cursor>) -> Fut,
    Fut: Future<Output = Result<Page<T>, SlackError>>,
{
    let mut items = Vec::new();
    let mut cursor = None;

    loop {
        let Page { items: page, next_cursor } = fetch_page(cursor).await?;
        items.extend(page);

        match next_cursor {
            Some(next_cursor) => cursor = Some(next_cursor),
            None => break,
        }
    }

    Ok(items)
}

/// Active human users, sorted by display name.
#[instrument(level = "debug", skip_all)]
pub async fn list_users<P>(slack_port: &P) -> Vec<User>
where
    P: SlackPort + Send + Sync + ?Sized,
{
    let records = match collect_pages(|cursor| slack_port.find_users_page(cursor)).await {
        Ok(records) => records,
        Err(err) => {
            error!(error = ?err, "Error fetching users");
            return Vec::new();
        }
    };

    let mut users: Vec<User> = records.into_iter().filter_map(User::from_record).collect();
    users.sort_by(|a, b| a.name.cmp(&b.name));

    users
}

/// Non-archived public and private channels, sorted by name.
#[instrument(level = "debug", skip_all)]
pub async fn list_channels<P>(slack_port: &P) -> Vec<ChannelRecord>
where
    P: SlackPort + Send + Sync + ?Sized,
{
    let mut channels =
        match collect_pages(|cursor| slack_port.find_channels_page(cursor)).await {
            Ok(channels) => channels,
            Err(err) => {
                error!(error = ?err, "Error fetching channels");
                return Vec::new();
            }
        };

    channels.sort_by(|a, b| a.name.cmp(&b.name));

    channels
}

/// Every member of the channel, without any error special-casing.
#[instrument(level = "debug", skip(slack_port))]
pub async fn fetch_channel_members<P>(
    slack_port: &P,
    channel_id: &ChannelId,
) -> Result<Vec<UserId>, SlackError>
where
    P: SlackPort + Send + Sync + ?Sized,
{
    collect_pages(|cursor| slack_port.find_channel_members_page(channel_id, cursor)).await
}

/// Members of the channel, or none when they cannot be resolved.
///
/// A private channel the bot was never added to answers `not_in_channel`;
/// that is expected and only logged at debug level.
#[instrument(level = "debug", skip(slack_port))]
pub async fn list_channel_members<P>(slack_port: &P, channel_id: &ChannelId) -> Vec<UserId>
where
    P: SlackPort + Send + Sync + ?Sized,
{
    match fetch_channel_members(slack_port, channel_id).await {
        Ok(members) => members,
        Err(err) if err.is_not_in_channel() => {
            debug!(
                channel_id = %channel_id,
                "Bot is not in the channel, its members are not visible",
            );
            Vec::new()
        }
        Err(err) => {
            error!(
                channel_id = %channel_id,
                error = ?err,
                "Error fetching members for channel",
            );
            Vec::new()
        }
    }
}
