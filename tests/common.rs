use anyhow::Result;
use serde_json::Value as JsonValue;
use submission_relay::{
    api::serve,
    config::{Config, LogFormat},
    models::profile::SubmissionProfile,
};
use tokio::net::TcpListener;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::{method, path}};

pub const WEBHOOK_PATH: &str = "/api/webhooks/123/token";

pub fn test_config(webhook_url: Option<String>, profile: SubmissionProfile) -> Config {
    Config {
        discord_webhook_url: webhook_url,
        submission_profile: profile,
        redact_password: false,
        log_format: LogFormat::Pretty,
        server_port: 0,
    }
}

/// Starts the app on an ephemeral port and returns its base URL.
pub async fn spawn_app(config: Config) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = serve(listener, &config).await;
    });

    Ok(format!("http://{}", addr))
}

/// A fake Discord webhook answering every POST with `status`, expecting
/// exactly `expected_calls` of them.
pub async fn mock_webhook(status: u16, expected_calls: u64) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(WEBHOOK_PATH))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(&mock_server)
        .await;

    mock_server
}

pub fn webhook_url(mock_server: &MockServer) -> String {
    format!("{}{}", mock_server.uri(), WEBHOOK_PATH)
}

pub async fn post_submission(base_url: &str, body: String) -> Result<(u16, JsonValue)> {
    let response = reqwest::Client::new()
        .post(format!("{}/api/submit", base_url))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.json::<JsonValue>().await?;

    Ok((status, body))
}

pub fn valid_request() -> JsonValue {
    serde_json::json!({
        "school": "Lincoln High",
        "platform": "Sparx Maths",
        "user": "a@b.com",
        "password": "x",
        "paymentMethod": "Card",
        "paymentPlan": "Lifetime"
    })
}
