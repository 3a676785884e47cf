use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    clients::{discord::DiscordClient, health::HealthChecker},
    config::Config,
    error::SubmissionError,
    models::{health::HealthStatus, profile::SubmissionProfile, response::SubmitResponse},
    utils::process_submission,
};

pub struct AppState {
    profile: SubmissionProfile,
    redact_password: bool,
    discord_client: Option<DiscordClient>,
    health_checker: HealthChecker,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            profile: config.submission_profile,
            redact_password: config.redact_password,
            discord_client: DiscordClient::from_config(config),
            health_checker: HealthChecker::new(config),
        }
    }
}

pub fn router(config: &Config) -> Router {
    let state = Arc::new(AppState::new(config));

    Router::new()
        .route("/api/submit", post(submit))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, config: &Config) -> Result<(), Error> {
    let app = router(config);

    info!(
        address = %listener.local_addr()?,
        profile = %config.submission_profile,
        "Submission server started"
    );

    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn run_api_server(config: Config) -> Result<(), Error> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    serve(listener, &config).await
}

async fn submit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, SubmissionError> {
    process_submission(
        &body,
        state.profile,
        state.redact_password,
        state.discord_client.as_ref(),
    )
    .await?;

    Ok(Json(SubmitResponse::ok()))
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all();

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}
