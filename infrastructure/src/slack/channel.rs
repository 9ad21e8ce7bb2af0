use crate::slack::response::SlackChannel;
use domain::ports::slack::ChannelRecord;
use domain_shared::slack::ChannelId;

pub fn slack_to_domain_channel_record(channel: SlackChannel) -> ChannelRecord {
    let SlackChannel {
        id,
        name,
        is_private,
    } = channel;

    ChannelRecord {
        channel_id: ChannelId(id),
        name,
        is_private,
    }
}
