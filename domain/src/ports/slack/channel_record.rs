use domain_shared::slack::ChannelId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    pub channel_id: ChannelId,
    pub name: String,
    pub is_private: bool,
}
