use application::channel::ChannelService;
use application::membership::MembershipService;
use application::workspace::WorkspaceService;
use application_ports::channel::ChannelPort;
use application_ports::membership::MembershipPort;
use application_ports::workspace::WorkspacePort;
use domain::ports::slack::SlackPort;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    pub(crate) workspace_adapter: Arc<WorkspaceService>,
    pub(crate) membership_adapter: Arc<MembershipService>,
    pub(crate) channel_adapter: Arc<ChannelService>,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(slack_port: Arc<dyn SlackPort + Send + Sync>) -> Self {
        Self {
            workspace_adapter: Arc::new(WorkspaceService::new(slack_port.clone())),
            membership_adapter: Arc::new(MembershipService::new(slack_port.clone())),
            channel_adapter: Arc::new(ChannelService::new(slack_port)),
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_workspace_port(&self) -> Arc<dyn WorkspacePort + Send + Sync> {
        self.workspace_adapter.clone()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_membership_port(&self) -> Arc<dyn MembershipPort + Send + Sync> {
        self.membership_adapter.clone()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_channel_port(&self) -> Arc<dyn ChannelPort + Send + Sync> {
        self.channel_adapter.clone()
    }
}
