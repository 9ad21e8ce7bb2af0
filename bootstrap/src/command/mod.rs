pub mod serve;
pub mod whoami;

use crate::args::CommonArgs;
use crate::command::serve::ServeArgs;
use crate::command::whoami::WhoamiArgs;
use clap::Subcommand;
use tracing::instrument;

#[derive(Subcommand)]
pub enum Command {
    /// Serve the channel management API
    #[command(name = "serve")]
    Serve(#[arg(flatten)] ServeArgs),
    /// Print the Slack user ID the bot token belongs to
    #[command(name = "whoami")]
    Whoami(#[arg(flatten)] WhoamiArgs),
}

impl Command {
    #[instrument(level = "trace", skip(self, common_args))]
    pub async fn run(self, common_args: CommonArgs) -> anyhow::Result<()> {
        match self {
            Command::Serve(args) => serve::run(common_args, args).await,
            Command::Whoami(args) => whoami::run(common_args, args).await,
        }
    }
}
