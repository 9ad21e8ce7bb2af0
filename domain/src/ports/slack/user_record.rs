use domain_shared::slack::UserId;

/// A workspace member exactly as `users.list` reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: UserId,
    pub name: String,
    pub real_name: Option<String>,
    pub is_bot: bool,
    pub deleted: bool,
}
