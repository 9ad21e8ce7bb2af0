use crate::ports::slack::ChannelRecord;
use domain_shared::slack::{ChannelId, UserId};
use std::fmt;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub channel_id: ChannelId,
    pub name: String,
    pub is_private: bool,
    pub members: Vec<UserId>,
}

impl Channel {
    #[instrument(level = "trace", skip(record, members))]
    pub fn from_record(record: ChannelRecord, members: Vec<UserId>) -> Self {
        let ChannelRecord {
            channel_id,
            name,
            is_private,
        } = record;

        Self {
            channel_id,
            name,
            is_private,
            members,
        }
    }
}

/// A channel name as Slack accepts it on creation: lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelName(String);

impl ChannelName {
    #[instrument(level = "trace")]
    pub fn parse(raw: &str) -> Result<Self, ChannelNameError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ChannelNameError::Missing);
        }

        Ok(Self(name.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelNameError {
    #[error("Channel name is required")]
    Missing,
}
