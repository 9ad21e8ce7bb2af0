mod channel;
mod response;
mod user;

use crate::slack::channel::slack_to_domain_channel_record;
use crate::slack::response::{
    ApiStatus, AuthTestResponse, ConversationsCreateResponse, ConversationsListResponse,
    ConversationsMembersResponse, UsersListResponse,
};
use crate::slack::user::slack_to_domain_user_record;
use async_trait::async_trait;
use domain::channel::ChannelName;
use domain::ports::slack::{
    ChannelId, ChannelRecord, Cursor, Page, SlackError, SlackPort, UserId, UserRecord,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use std::time::Duration;
use tracing::{instrument, warn};

pub const SLACK_API_BASE_URL: &str = "https://slack.com/api";

const USERS_PAGE_LIMIT: &str = "200";
const CONVERSATIONS_PAGE_LIMIT: &str = "1000";
const CONVERSATION_TYPES: &str = "public_channel,private_channel";

#[derive(Clone, Debug)]
pub struct SlackAdapterConfig {
    pub bot_token: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

/// [`SlackPort`] over the Slack Web API.
pub struct SlackAdapter {
    http_client: HttpClient,
    bot_token: String,
    base_url: String,
}

impl SlackAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(config: SlackAdapterConfig) -> reqwest::Result<Self> {
        let SlackAdapterConfig {
            bot_token,
            base_url,
            request_timeout,
        } = config;

        let http_client = HttpClient::builder().timeout(request_timeout).build()?;

        Ok(Self {
            http_client,
            bot_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Calls a Web API method with form-encoded parameters and decodes
    /// the body of a successful (`ok: true`) response.
    #[instrument(level = "trace", skip(self, params))]
    async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<R, SlackError> {
        let response = self
            .http_client
            .post(format!("{}/{}", self.base_url, method))
            .bearer_auth(&self.bot_token)
            .form(params)
            .send()
            .await
            .map_err(|err| {
                warn!(method, "Slack request failed: {:?}", err);
                SlackError::SlackUnavailable
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|err| {
            warn!(method, "Failed to read Slack response: {:?}", err);
            SlackError::SlackUnavailable
        })?;

        let api_status = match serde_json::from_str::<ApiStatus>(&body) {
            Ok(api_status) => api_status,
            Err(_) if status == StatusCode::TOO_MANY_REQUESTS => {
                return Err(SlackError::rejected("ratelimited"));
            }
            Err(err) => {
                warn!(method, status = %status, "Failed to parse Slack response: {:?}", err);
                return Err(SlackError::SlackUnavailable);
            }
        };

        if !api_status.ok {
            let code = api_status.error.unwrap_or_else(|| "unknown_error".to_string());
            return Err(SlackError::Rejected(code));
        }

        serde_json::from_str(&body).map_err(|err| {
            warn!(method, "Failed to parse Slack response: {:?}", err);
            SlackError::SlackUnavailable
        })
    }
}

#[async_trait]
impl SlackPort for SlackAdapter {
    #[instrument(level = "debug", err, skip(self))]
    async fn find_users_page(
        &self,
        cursor: Option<Cursor>,
    ) -> Result<Page<UserRecord>, SlackError> {
        let mut params = vec![("limit", USERS_PAGE_LIMIT)];
        if let Some(Cursor(ref cursor)) = cursor {
            params.push(("cursor", cursor.as_str()));
        }

        let UsersListResponse {
            members,
            response_metadata,
        } = self.call("users.list", &params).await?;

        Ok(Page {
            items: members.into_iter().map(slack_to_domain_user_record).collect(),
            next_cursor: Cursor::from_next_cursor(response_metadata.next_cursor),
        })
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn find_channels_page(
        &self,
        cursor: Option<Cursor>,
    ) -> Result<Page<ChannelRecord>, SlackError> {
        let mut params = vec![
            ("types", CONVERSATION_TYPES),
            ("exclude_archived", "true"),
            ("limit", CONVERSATIONS_PAGE_LIMIT),
        ];
        if let Some(Cursor(ref cursor)) = cursor {
            params.push(("cursor", cursor.as_str()));
        }

        let ConversationsListResponse {
            channels,
            response_metadata,
        } = self.call("conversations.list", &params).await?;

        Ok(Page {
            items: channels
                .into_iter()
                .map(slack_to_domain_channel_record)
                .collect(),
            next_cursor: Cursor::from_next_cursor(response_metadata.next_cursor),
        })
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn find_channel_members_page(
        &self,
        channel_id: &ChannelId,
        cursor: Option<Cursor>,
    ) -> Result<Page<UserId>, SlackError> {
        let mut params = vec![
            ("channel", channel_id.0.as_str()),
            ("limit", CONVERSATIONS_PAGE_LIMIT),
        ];
        if let Some(Cursor(ref cursor)) = cursor {
            params.push(("cursor", cursor.as_str()));
        }

        let ConversationsMembersResponse {
            members,
            response_metadata,
        } = self.call("conversations.members", &params).await?;

        Ok(Page {
            items: members.into_iter().map(UserId).collect(),
            next_cursor: Cursor::from_next_cursor(response_metadata.next_cursor),
        })
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn find_own_user_id(&self) -> Result<UserId, SlackError> {
        let AuthTestResponse { user_id } = self.call("auth.test", &[]).await?;

        Ok(UserId(user_id))
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn create_channel(
        &self,
        name: &ChannelName,
        is_private: bool,
    ) -> Result<ChannelRecord, SlackError> {
        let is_private = if is_private { "true" } else { "false" };
        let params = [("name", name.as_str()), ("is_private", is_private)];

        let ConversationsCreateResponse { channel } =
            self.call("conversations.create", &params).await?;

        Ok(slack_to_domain_channel_record(channel))
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn join_channel(&self, channel_id: &ChannelId) -> Result<(), SlackError> {
        self.call::<IgnoredAny>("conversations.join", &[("channel", channel_id.0.as_str())])
            .await?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn invite_members(
        &self,
        channel_id: &ChannelId,
        user_ids: &[UserId],
    ) -> Result<(), SlackError> {
        let users = user_ids
            .iter()
            .map(|user_id| user_id.0.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let params = [("channel", channel_id.0.as_str()), ("users", users.as_str())];

        self.call::<IgnoredAny>("conversations.invite", &params)
            .await?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn kick_member(
        &self,
        channel_id: &ChannelId,
        user_id: &UserId,
    ) -> Result<(), SlackError> {
        let params = [("channel", channel_id.0.as_str()), ("user", user_id.0.as_str())];

        self.call::<IgnoredAny>("conversations.kick", &params)
            .await?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn archive_channel(&self, channel_id: &ChannelId) -> Result<(), SlackError> {
        self.call::<IgnoredAny>("conversations.archive", &[("channel", channel_id.0.as_str())])
            .await?;

        Ok(())
    }
}
