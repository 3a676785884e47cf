use std::collections::HashMap;

use chrono::Utc;
use tracing::warn;

use crate::{
    config::Config,
    models::{
        health::{HealthCheckResponse, HealthStatus, ServiceHealth},
        profile::SubmissionProfile,
    },
};

pub struct HealthChecker {
    webhook_configured: bool,
    profile: SubmissionProfile,
}

impl HealthChecker {
    pub fn new(config: &Config) -> Self {
        Self {
            webhook_configured: config.webhook_url().is_some(),
            profile: config.submission_profile,
        }
    }

    pub fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        checks.insert("discord_webhook".to_string(), self.check_webhook());

        let overall_status = self.determine_overall_status(&checks);

        HealthCheckResponse {
            status: overall_status,
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            profile: self.profile,
            checks,
        }
    }

    // Configuration only; the webhook itself is never called from here.
    fn check_webhook(&self) -> ServiceHealth {
        if self.webhook_configured {
            ServiceHealth::healthy()
        } else {
            warn!("Health check: Discord webhook is not configured");
            ServiceHealth::unhealthy("Webhook not configured".to_string())
        }
    }

    fn determine_overall_status(&self, checks: &HashMap<String, ServiceHealth>) -> HealthStatus {
        if checks
            .values()
            .all(|health| health.status == HealthStatus::Healthy)
        {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }
}
