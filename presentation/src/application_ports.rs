use application_ports::channel::ChannelPort;
use application_ports::membership::MembershipPort;
use application_ports::workspace::WorkspacePort;
use std::sync::Arc;

pub trait Locator {
    fn get_workspace_port(&self) -> Arc<dyn WorkspacePort + Send + Sync>;
    fn get_membership_port(&self) -> Arc<dyn MembershipPort + Send + Sync>;
    fn get_channel_port(&self) -> Arc<dyn ChannelPort + Send + Sync>;
}
