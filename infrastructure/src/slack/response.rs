use serde::Deserialize;

/// The `ok`/`error` pair every Slack Web API response carries.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiStatus {
    pub ok: bool,
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ResponseMetadata {
    pub next_cursor: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SlackUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SlackChannel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Deserialize, Debug)]
pub(crate) struct UsersListResponse {
    pub members: Vec<SlackUser>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ConversationsListResponse {
    pub channels: Vec<SlackChannel>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ConversationsMembersResponse {
    pub members: Vec<String>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ConversationsCreateResponse {
    pub channel: SlackChannel,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AuthTestResponse {
    pub user_id: String,
}
