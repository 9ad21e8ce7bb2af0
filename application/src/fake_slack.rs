//! In-memory workspace standing in for Slack in service tests.

use async_trait::async_trait;
use domain::channel::ChannelName;
use domain::ports::slack::{ChannelRecord, Cursor, Page, SlackError, SlackPort, UserRecord};
use domain_shared::slack::{ChannelId, UserId};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;

const MEMBERS_PAGE_SIZE: usize = 2;

pub(crate) fn ids(ids: &[&str]) -> Vec<UserId> {
    ids.iter().map(|id| UserId(id.to_string())).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SlackCall {
    Create(String, bool),
    Join(ChannelId),
    Invite(ChannelId, Vec<UserId>),
    Kick(ChannelId, UserId),
    Archive(ChannelId),
}

#[derive(Default)]
struct Workspace {
    channels: BTreeMap<ChannelId, BTreeSet<UserId>>,
    kick_errors: HashMap<UserId, String>,
    writes: Vec<SlackCall>,
}

pub(crate) struct FakeSlack {
    own_user_id: UserId,
    workspace: Mutex<Workspace>,
}

impl FakeSlack {
    pub(crate) fn new(own_user_id: &str) -> Self {
        Self {
            own_user_id: UserId(own_user_id.into()),
            workspace: Mutex::new(Workspace::default()),
        }
    }

    pub(crate) fn with_channel(self, channel_id: &str, members: &[&str]) -> Self {
        self.workspace
            .lock()
            .unwrap()
            .channels
            .insert(ChannelId(channel_id.into()), ids(members).into_iter().collect());
        self
    }

    pub(crate) fn with_kick_error(self, user_id: &str, code: &str) -> Self {
        self.workspace
            .lock()
            .unwrap()
            .kick_errors
            .insert(UserId(user_id.into()), code.into());
        self
    }

    pub(crate) fn writes(&self) -> Vec<SlackCall> {
        self.workspace.lock().unwrap().writes.clone()
    }

    pub(crate) fn members(&self, channel_id: &str) -> Vec<UserId> {
        self.workspace.lock().unwrap().channels[&ChannelId(channel_id.into())]
            .iter()
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SlackPort for FakeSlack {
    async fn find_users_page(
        &self,
        _cursor: Option<Cursor>,
    ) -> Result<Page<UserRecord>, SlackError> {
        Ok(Page::last(Vec::new()))
    }

    async fn find_channels_page(
        &self,
        _cursor: Option<Cursor>,
    ) -> Result<Page<ChannelRecord>, SlackError> {
        Ok(Page::last(Vec::new()))
    }

    async fn find_channel_members_page(
        &self,
        channel_id: &ChannelId,
        cursor: Option<Cursor>,
    ) -> Result<Page<UserId>, SlackError> {
        let workspace = self.workspace.lock().unwrap();
        let members = workspace
            .channels
            .get(channel_id)
            .ok_or_else(|| SlackError::rejected("channel_not_found"))?;

        let offset = cursor.map_or(0, |Cursor(offset)| offset.parse().unwrap());
        let page: Vec<UserId> = members
            .iter()
            .skip(offset)
            .take(MEMBERS_PAGE_SIZE)
            .cloned()
            .collect();

        let next_offset = offset + page.len();
        if next_offset < members.len() {
            Ok(Page::with_cursor(page, Cursor(next_offset.to_string())))
        } else {
            Ok(Page::last(page))
        }
    }

    async fn find_own_user_id(&self) -> Result<UserId, SlackError> {
        Ok(self.own_user_id.clone())
    }

    async fn create_channel(
        &self,
        name: &ChannelName,
        is_private: bool,
    ) -> Result<ChannelRecord, SlackError> {
        let mut workspace = self.workspace.lock().unwrap();
        workspace
            .writes
            .push(SlackCall::Create(name.to_string(), is_private));

        let channel_id = ChannelId(format!("C{:02}", workspace.channels.len() + 1));
        let members = if is_private {
            BTreeSet::from([self.own_user_id.clone()])
        } else {
            BTreeSet::new()
        };
        workspace.channels.insert(channel_id.clone(), members);

        Ok(ChannelRecord {
            channel_id,
            name: name.to_string(),
            is_private,
        })
    }

    async fn join_channel(&self, channel_id: &ChannelId) -> Result<(), SlackError> {
        let mut workspace = self.workspace.lock().unwrap();
        workspace.writes.push(SlackCall::Join(channel_id.clone()));
        workspace
            .channels
            .get_mut(channel_id)
            .ok_or_else(|| SlackError::rejected("channel_not_found"))?
            .insert(self.own_user_id.clone());
        Ok(())
    }

    async fn invite_members(
        &self,
        channel_id: &ChannelId,
        user_ids: &[UserId],
    ) -> Result<(), SlackError> {
        let mut workspace = self.workspace.lock().unwrap();
        workspace
            .writes
            .push(SlackCall::Invite(channel_id.clone(), user_ids.to_vec()));
        workspace
            .channels
            .get_mut(channel_id)
            .ok_or_else(|| SlackError::rejected("channel_not_found"))?
            .extend(user_ids.iter().cloned());
        Ok(())
    }

    async fn kick_member(
        &self,
        channel_id: &ChannelId,
        user_id: &UserId,
    ) -> Result<(), SlackError> {
        let mut workspace = self.workspace.lock().unwrap();
        workspace
            .writes
            .push(SlackCall::Kick(channel_id.clone(), user_id.clone()));
        if let Some(code) = workspace.kick_errors.get(user_id) {
            return Err(SlackError::rejected(code.clone()));
        }
        workspace
            .channels
            .get_mut(channel_id)
            .ok_or_else(|| SlackError::rejected("channel_not_found"))?
            .remove(user_id);
        Ok(())
    }

    async fn archive_channel(&self, channel_id: &ChannelId) -> Result<(), SlackError> {
        let mut workspace = self.workspace.lock().unwrap();
        workspace.writes.push(SlackCall::Archive(channel_id.clone()));
        workspace
            .channels
            .remove(channel_id)
            .ok_or_else(|| SlackError::rejected("channel_not_found"))?;
        Ok(())
    }
}
