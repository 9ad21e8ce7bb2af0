use crate::args::CommonArgs;
use clap::Args;
use domain::ports::slack::SlackPort;
use infrastructure::slack::SlackAdapter;
use tracing::instrument;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

#[instrument(level = "info", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: WhoamiArgs) -> anyhow::Result<()> {
    let WhoamiArgs {} = args;

    let slack_adapter = SlackAdapter::new(common_args.slack_adapter_config()?)?;
    let user_id = slack_adapter.find_own_user_id().await?;

    println!("{}", user_id);

    Ok(())
}
