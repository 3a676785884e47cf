use anyhow::Result;
use submission_relay::{
    config::{Config, LogFormat},
    models::profile::SubmissionProfile,
};

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Test: Every setting is read from its environment variable
#[test]
fn test_config_reads_environment() -> Result<()> {
    let config = Config::from_vars(vars(&[
        ("DISCORD_WEBHOOK_URL", "https://discord.test/api/webhooks/1/abc"),
        ("SUBMISSION_PROFILE", "homework"),
        ("REDACT_PASSWORD", "true"),
        ("LOG_FORMAT", "json"),
        ("SERVER_PORT", "9090"),
    ]))?;

    assert_eq!(config.submission_profile, SubmissionProfile::Homework);
    assert!(config.redact_password);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.server_port, 9090);
    assert_eq!(
        config.webhook_url(),
        Some("https://discord.test/api/webhooks/1/abc")
    );

    Ok(())
}

/// Test: Unset variables fall back to defaults
#[test]
fn test_config_defaults() -> Result<()> {
    let config = Config::from_vars(Vec::new())?;

    assert_eq!(config.submission_profile, SubmissionProfile::Requests);
    assert!(!config.redact_password);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.server_port, 8080);
    assert_eq!(config.webhook_url(), None);

    Ok(())
}

/// Test: An empty webhook URL counts as unset
#[test]
fn test_config_empty_webhook_is_unset() -> Result<()> {
    let config = Config::from_vars(vars(&[("DISCORD_WEBHOOK_URL", "")]))?;

    assert_eq!(config.webhook_url(), None);

    Ok(())
}

/// Test: An unknown profile name is rejected
#[test]
fn test_config_rejects_unknown_profile() {
    let result = Config::from_vars(vars(&[("SUBMISSION_PROFILE", "premium")]));

    assert!(result.is_err());
}
