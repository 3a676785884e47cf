use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::{
    clients::discord::DiscordClient,
    config::LogFormat,
    error::SubmissionError,
    models::{
        discord::{AllowedMentions, Embed, EmbedField, WebhookPayload},
        profile::SubmissionProfile,
        submission::SubmissionRequest,
        validation::{ValidatedSubmission, validate_submission},
    },
};

pub const EMBED_COLOR: u32 = 0xff4da6;

const PLACEHOLDER: &str = "—";
const REDACTED: &str = "[redacted]";

/// Platforms whose submissions carry the school field (homework profile).
const SCHOOL_PLATFORMS: [&str; 4] = ["sparx", "maths", "reading", "science"];

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Runs one submission through parse, validation, formatting and delivery.
pub async fn process_submission(
    body: &[u8],
    profile: SubmissionProfile,
    redact_password: bool,
    discord_client: Option<&DiscordClient>,
) -> Result<(), SubmissionError> {
    let request_id = Uuid::new_v4();

    let Some(discord_client) = discord_client else {
        warn!(request_id = %request_id, "Rejecting submission: webhook not configured");
        return Err(SubmissionError::NotConfigured);
    };

    let request = SubmissionRequest::from_slice(body).map_err(|e| {
        debug!(request_id = %request_id, error = %e, "Submission body is not valid JSON");
        SubmissionError::InvalidJson
    })?;

    let submission = validate_submission(&request, profile).map_err(|e| {
        debug!(request_id = %request_id, profile = %profile, reason = %e, "Submission rejected");
        e
    })?;

    info!(
        request_id = %request_id,
        profile = %profile,
        platform = %submission.platform,
        payment_method = submission.payment_method.as_str(),
        "Processing submission"
    );

    let payload = build_payload(&submission, Utc::now(), redact_password);

    if let Err(e) = discord_client.send_webhook(&payload, &request_id).await {
        warn!(request_id = %request_id, error = %e, "Failed to relay submission");
        return Err(SubmissionError::Delivery);
    }

    info!(request_id = %request_id, "Submission relayed successfully");

    Ok(())
}

/// Builds the webhook body for a validated submission. Output depends only on
/// the arguments, so equal inputs serialize to identical bytes.
pub fn build_payload(
    submission: &ValidatedSubmission,
    timestamp: DateTime<Utc>,
    redact_password: bool,
) -> WebhookPayload {
    let profile = submission.profile;
    let password = if redact_password {
        REDACTED.to_string()
    } else {
        submission.password.clone()
    };

    let fields = match profile {
        SubmissionProfile::Requests => requests_fields(submission, password),
        SubmissionProfile::Homework => homework_fields(submission, password),
    };

    let (content, allowed_mentions) = if profile.mentions_everyone() {
        (
            Some("@everyone".to_string()),
            Some(AllowedMentions {
                parse: vec!["everyone".to_string()],
            }),
        )
    } else {
        (None, None)
    };

    WebhookPayload {
        content,
        allowed_mentions,
        username: profile.username().to_string(),
        embeds: vec![Embed {
            title: profile.title().to_string(),
            color: EMBED_COLOR,
            fields,
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }],
    }
}

fn requests_fields(submission: &ValidatedSubmission, password: String) -> Vec<EmbedField> {
    let plan = submission
        .payment_plan
        .map(|plan| plan.label())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    vec![
        EmbedField::inline("School", submission.school.as_str()),
        EmbedField::inline("Platform", submission.platform.as_str()),
        EmbedField::inline("Login Type", or_placeholder(&submission.login_type)),
        EmbedField::inline("Plan", plan),
        EmbedField::inline(
            "Payment Method",
            submission.payment_method.label(SubmissionProfile::Requests),
        ),
        EmbedField::block("Day & Time", or_placeholder(&submission.run_time)),
        EmbedField::block("Username / Email", submission.user.as_str()),
        EmbedField::block("password", password),
    ]
}

fn homework_fields(submission: &ValidatedSubmission, password: String) -> Vec<EmbedField> {
    let mut fields = vec![
        EmbedField::inline("Platform", submission.platform.as_str()),
        EmbedField::inline("Login Type", or_placeholder(&submission.login_type)),
        EmbedField::inline(
            "Payment Method",
            submission.payment_method.label(SubmissionProfile::Homework),
        ),
        EmbedField::block("User / Email", submission.user.as_str()),
        EmbedField::block("Password", password),
    ];

    if !submission.payment_note.is_empty() {
        fields.push(EmbedField::block(
            "Payment Note",
            submission.payment_note.as_str(),
        ));
    }

    let platform = submission.platform.to_lowercase();
    if SCHOOL_PLATFORMS.contains(&platform.as_str()) {
        fields.push(EmbedField::block(
            "School",
            or_placeholder(&submission.school),
        ));
    }

    fields
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}
