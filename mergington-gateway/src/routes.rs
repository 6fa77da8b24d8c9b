//! Axum route handlers for the activities API.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use mergington_core::ActivityDirectory;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{config::GatewayConfig, error::GatewayError};

// ── Shared state ─────────────────────────────────────────────────────────────

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
    pub started_at: DateTime<Utc>,
}

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

/// Body returned by successful signup and removal.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given directory.
pub fn create_router(directory: Arc<ActivityDirectory>, config: &GatewayConfig) -> Router {
    let state = AppState { directory, started_at: Utc::now() };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/activities", get(list_activities))
        .route("/activities/{activity}/signup", post(signup))
        .route("/activities/{activity}/participants/{email}", delete(remove_participant))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origin))
}

fn cors_layer(origin: &str) -> CorsLayer {
    let origin = HeaderValue::from_str(origin).unwrap_or_else(|e| {
        warn!(origin, error = %e, "invalid CORS origin; using default");
        HeaderValue::from_static(crate::config::DEFAULT_CORS_ORIGIN)
    });

    // Credentialed requests forbid wildcards, so methods and headers are mirrored.
    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — send browsers to the front end.
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// `GET /health` — liveness probe.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "activities": state.directory.len(),
            "started_at": state.started_at.to_rfc3339(),
        })),
    )
}

/// `GET /activities` — every activity keyed by name.
pub async fn list_activities(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.directory.list())
}

/// `POST /activities/{activity}/signup?email=...` — enroll a student.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `email` is missing or cannot
/// be decoded (422), or [`GatewayError::Directory`] if the activity does not
/// exist (404) or the student is already signed up (400).
pub async fn signup(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let Query(query) = query?;
    state.directory.enroll(&activity, query.email.as_str())?;
    info!(activity = %activity, email = %query.email, "signed up");
    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {activity}", query.email),
    }))
}

/// `DELETE /activities/{activity}/participants/{email}` — remove a student.
///
/// # Errors
/// Returns [`GatewayError::Directory`] if the activity does not exist or the
/// student is not enrolled in it (both 404).
pub async fn remove_participant(
    State(state): State<AppState>,
    Path((activity, email)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, GatewayError> {
    state.directory.unenroll(&activity, email.as_str())?;
    info!(activity = %activity, email = %email, "removed");
    Ok(Json(MessageResponse {
        message: format!("Removed {email} from {activity}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn test_app() -> Router {
        create_router(Arc::new(ActivityDirectory::seeded()), &GatewayConfig::new())
    }

    #[tokio::test]
    async fn health_response_format_returns_ok_with_status_field() {
        let req = match Request::builder().uri("/health").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match test_app().oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        assert_eq!(body["status"], "ok");
        assert_eq!(body["activities"], 9);
        assert!(body["started_at"].is_string(), "started_at must be an RFC 3339 string");
    }

    #[test]
    fn message_response_serializes_single_field() {
        let resp = MessageResponse { message: "Removed a@b.c from Art Club".to_owned() };
        let json = match serde_json::to_string(&resp) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"message":"Removed a@b.c from Art Club"}"#);
    }
}
