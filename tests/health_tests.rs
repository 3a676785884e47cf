use anyhow::Result;
use submission_relay::models::profile::SubmissionProfile;

use crate::common::{spawn_app, test_config};

/// Test: Health is OK when a webhook is configured
#[tokio::test]
async fn test_health_with_webhook() -> Result<()> {
    let config = test_config(
        Some("http://127.0.0.1:9/webhook".to_string()),
        SubmissionProfile::Homework,
    );
    let base_url = spawn_app(config).await?;

    let response = reqwest::get(format!("{}/health", base_url)).await?;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["profile"], "homework");
    assert_eq!(body["checks"]["discord_webhook"]["status"], "healthy");

    Ok(())
}

/// Test: Health reports unavailable without a webhook
#[tokio::test]
async fn test_health_without_webhook() -> Result<()> {
    let base_url = spawn_app(test_config(None, SubmissionProfile::Requests)).await?;

    let response = reqwest::get(format!("{}/health", base_url)).await?;
    assert_eq!(response.status().as_u16(), 503);

    let body = response.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["discord_webhook"]["error"], "Webhook not configured");

    Ok(())
}
