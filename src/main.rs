use anyhow::{Error, Result};
use submission_relay::{api::run_api_server, config::Config, utils::init_tracing};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(config.log_format);

    if config.webhook_url().is_none() {
        warn!("DISCORD_WEBHOOK_URL is not set; submissions will be rejected");
    }

    run_api_server(config).await
}
