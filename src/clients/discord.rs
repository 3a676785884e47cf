use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{config::Config, models::discord::WebhookPayload};

/// Posts embeds to a single Discord incoming webhook.
///
/// One attempt per call. The webhook URL embeds its token, so it is kept out
/// of every log line and error message.
#[derive(Clone)]
pub struct DiscordClient {
    http_client: Client,
    webhook_url: String,
}

impl DiscordClient {
    pub fn new(webhook_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            webhook_url: webhook_url.to_string(),
        }
    }

    /// Returns `None` when no webhook URL is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let client = config.webhook_url().map(Self::new);

        if client.is_some() {
            info!("Discord webhook client initialized");
        }

        client
    }

    pub async fn send_webhook(
        &self,
        payload: &WebhookPayload,
        request_id: &Uuid,
    ) -> Result<(), Error> {
        debug!(
            request_id = %request_id,
            field_count = payload.embeds.first().map_or(0, |embed| embed.fields.len()),
            "Sending Discord webhook"
        );

        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!("Discord webhook request failed: {}", e.without_url()))?;

        let status = response.status();

        if status.is_success() {
            info!(request_id = %request_id, status = %status, "Discord webhook delivered");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "Discord webhook returned status {}: {}",
                status,
                error_text
            ))
        }
    }
}
