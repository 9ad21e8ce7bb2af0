use crate::ports::slack::UserRecord;
use domain_shared::slack::UserId;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
}

impl User {
    /// Bots and deleted accounts are not people an operator manages.
    #[instrument(level = "trace", skip(record))]
    pub fn from_record(record: UserRecord) -> Option<User> {
        if record.is_bot || record.deleted {
            return None;
        }

        let name = record
            .real_name
            .filter(|real_name| !real_name.is_empty())
            .unwrap_or(record.name);

        Some(User {
            user_id: record.user_id,
            name,
        })
    }
}
