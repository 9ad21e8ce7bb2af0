use crate::args::CommonArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use clap::Args;
use infrastructure::slack::SlackAdapter;
use presentation::api::run_api;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Args)]
pub struct ServeArgs {
    /// The port for the HTTP API to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ServeArgs) -> anyhow::Result<()> {
    let ServeArgs { port } = args;

    let slack_adapter = Arc::new(SlackAdapter::new(common_args.slack_adapter_config()?)?);
    let locator = ApplicationPortLocator::new(slack_adapter);

    info!(port, "Starting channel management API");

    let api = tokio::spawn(run_api(locator, port));

    api.await?.map_err(|e| anyhow!(e))?;

    Ok(())
}
