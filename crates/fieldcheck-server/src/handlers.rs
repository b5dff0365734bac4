// File: src/handlers.rs
// Purpose: Routes for the validation form and the JSON API

use crate::config::Config;
use crate::views;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use fieldcheck_validation::{
    check_email_domain, validate_form, DomainResolver, FormReport, FormSubmission,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<dyn DomainResolver>,
}

impl AppState {
    pub fn new(config: Config, resolver: Arc<dyn DomainResolver>) -> Self {
        Self {
            config: Arc::new(config),
            resolver,
        }
    }
}

/// JSON answer for API clients
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub success: bool,
    pub errors: FormReport,
}

impl From<FormReport> for ValidationResponse {
    fn from(report: FormReport) -> Self {
        Self {
            success: report.is_success(),
            errors: report,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/api/validate", post(api_validate_handler))
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let markup = views::page(&state.config.validation, &FormSubmission::default(), None);
    Html(markup.into_string())
}

async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<FormSubmission>,
) -> Response {
    let report = run_validation(&state, &submission).await;

    // Content negotiation: JSON response
    if accepts_json(&headers) {
        return Json(ValidationResponse::from(report)).into_response();
    }

    let markup = views::page(&state.config.validation, &submission, Some(&report));
    Html(markup.into_string()).into_response()
}

async fn api_validate_handler(
    State(state): State<AppState>,
    Json(submission): Json<FormSubmission>,
) -> Json<ValidationResponse> {
    let report = run_validation(&state, &submission).await;
    Json(ValidationResponse::from(report))
}

/// Authoritative validation: the shared rules, then the optional domain lookup
async fn run_validation(state: &AppState, submission: &FormSubmission) -> FormReport {
    let config = &state.config.validation;
    let mut report = validate_form(submission, config);

    if config.enable_dns_lookup {
        if let Some(error) = check_email_domain(&submission.email, state.resolver.as_ref()).await {
            report.email.push(error);
        }
    }

    info!(
        success = report.is_success(),
        email_errors = report.email.len(),
        eid_errors = report.eid.len(),
        mobile_errors = report.mobile.len(),
        "validated submission"
    );

    report
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}
