use anyhow::{bail, Context};
use clap::Args;
use infrastructure::slack::{SlackAdapterConfig, SLACK_API_BASE_URL};
use std::time::Duration;
use url::Url;

#[derive(Args)]
pub struct CommonArgs {
    /// The bot token the Slack workspace issued to the app (xoxb-...)
    #[arg(long, env = "SLACK_BOT_TOKEN", hide_env_values = true)]
    pub slack_bot_token: String,
    /// Base URL of the Slack Web API
    #[arg(long, env = "SLACK_API_BASE_URL", default_value = SLACK_API_BASE_URL)]
    pub slack_api_base_url: String,
    /// Timeout of a single Slack API call, in seconds
    #[arg(long, env = "SLACK_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub slack_request_timeout_secs: u64,
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    pub sentry_environment: Option<String>,
    #[arg(long, env = "SENTRY_SAMPLE_RATE")]
    pub sentry_sample_rate: Option<f32>,
    #[arg(long, env = "SENTRY_TRACES_SAMPLE_RATE")]
    pub sentry_traces_sample_rate: Option<f32>,
}

impl CommonArgs {
    pub fn slack_adapter_config(&self) -> anyhow::Result<SlackAdapterConfig> {
        if self.slack_bot_token.trim().is_empty() {
            bail!("SLACK_BOT_TOKEN is empty");
        }
        let base_url = Url::parse(&self.slack_api_base_url)
            .with_context(|| format!("Invalid Slack API URL {}", self.slack_api_base_url))?;

        Ok(SlackAdapterConfig {
            bot_token: self.slack_bot_token.clone(),
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(self.slack_request_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::Parser;
    use infrastructure::slack::SlackAdapter;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common_args: CommonArgs,
    }

    fn common_args(slack_bot_token: &str, slack_api_base_url: &str) -> CommonArgs {
        CommonArgs {
            slack_bot_token: slack_bot_token.to_string(),
            slack_api_base_url: slack_api_base_url.to_string(),
            slack_request_timeout_secs: 30,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: None,
            sentry_traces_sample_rate: None,
        }
    }

    #[test]
    fn blank_token_fails_startup() {
        for token in ["", "   "] {
            let result = common_args(token, SLACK_API_BASE_URL).slack_adapter_config();

            assert!(result.is_err());
        }
    }

    #[test]
    fn unparsable_base_url_fails_startup() {
        let result = common_args("xoxb-token", "slack.com/api").slack_adapter_config();

        assert!(result.is_err());
    }

    #[test]
    fn trailing_slash_base_url_is_usable() {
        let config = common_args("xoxb-token", "https://slack.com/api/")
            .slack_adapter_config()
            .unwrap();

        assert_eq!(config.base_url.trim_end_matches('/'), SLACK_API_BASE_URL);
        assert_eq!(config.bot_token, "xoxb-token");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(SlackAdapter::new(config).is_ok());
    }

    #[test]
    fn token_flag_is_required() {
        // An exported token would satisfy the argument through its env fallback.
        if std::env::var_os("SLACK_BOT_TOKEN").is_some() {
            return;
        }

        let result = TestCli::try_parse_from(["slack-channel-manager"]);

        assert_eq!(
            result.err().map(|err| err.kind()),
            Some(ErrorKind::MissingRequiredArgument),
        );
    }

    #[test]
    fn token_flag_is_enough_to_start() {
        let cli =
            TestCli::try_parse_from(["slack-channel-manager", "--slack-bot-token", "xoxb-token"])
                .unwrap();

        assert_eq!(cli.common_args.slack_bot_token, "xoxb-token");
        assert!(cli.common_args.slack_adapter_config().is_ok());
    }
}
