use crate::slack::response::SlackUser;
use domain::ports::slack::UserRecord;
use domain_shared::slack::UserId;

pub fn slack_to_domain_user_record(user: SlackUser) -> UserRecord {
    let SlackUser {
        id,
        name,
        real_name,
        is_bot,
        deleted,
    } = user;

    UserRecord {
        user_id: UserId(id),
        name,
        real_name,
        is_bot,
        deleted,
    }
}
