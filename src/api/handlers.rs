//! HTTP request handlers

use super::signature::{verify_signature, SIGNATURE_HEADER};
use super::types::{ErrorResponse, VerifyQuery, WebhookAck, WebhookPayload};
use super::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Channel webhook
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Webhook
// ============================================================

async fn verify_webhook(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Result<String, AppError> {
    let Some(expected) = state.verify_token.as_deref() else {
        tracing::warn!("Webhook verification attempted but no verify token is configured");
        return Err(AppError::Forbidden("verification not configured".to_string()));
    };

    match (query.mode.as_deref(), query.verify_token.as_deref(), query.challenge) {
        (Some("subscribe"), Some(token), Some(challenge))
            if token == expected && !challenge.is_empty() =>
        {
            tracing::info!("Webhook verified");
            Ok(challenge)
        }
        _ => Err(AppError::Forbidden(
            "invalid webhook verification token".to_string(),
        )),
    }
}

async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, AppError> {
    if let Some(secret) = state.app_secret.as_deref() {
        let header = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok());
        verify_signature(secret, header, &body).map_err(|e| {
            tracing::warn!(error = %e, "Rejected webhook notification");
            AppError::Unauthorized(e.to_string())
        })?;
    }

    let payload: WebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid webhook payload: {e}")))?;

    let mut processed = 0;
    for event in payload.into_inbound_events() {
        let user_id = event.user_id.clone();
        state.runtime.handle(event).await.map_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Failed to process event");
            AppError::Internal(e.to_string())
        })?;
        processed += 1;
    }

    Ok(Json(WebhookAck { processed }))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("goldchat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::signature::sign;
    use crate::runtime::testing::TestHarness;
    use crate::session::SessionStore;
    use crate::state_machine::ConvState;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    const SECRET: &str = "app-secret";

    fn app(harness: &TestHarness, app_secret: Option<&str>) -> Router {
        create_router(AppState {
            runtime: harness.runtime.clone(),
            verify_token: Some("verify-me".to_string()),
            app_secret: app_secret.map(ToString::to_string),
        })
    }

    fn text_notification(from: &str, body: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "object": "whatsapp_business_account",
            "entry": [{ "changes": [{ "field": "messages", "value": {
                "metadata": { "phone_number_id": "PHONE_ID" },
                "messages": [{ "from": from, "type": "text", "text": { "body": body } }]
            }}]}]
        }))
        .unwrap()
    }

    fn post(body: Vec<u8>, signature: Option<String>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/webhook")
            .header("content-type", "application/json");
        if let Some(signature) = signature {
            builder = builder.header(SIGNATURE_HEADER, signature);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_verification_echoes_challenge() {
        let harness = TestHarness::with_price(4000.0);
        let response = app(&harness, None)
            .oneshot(
                Request::builder()
                    .uri("/webhook?hub.mode=subscribe&hub.verify_token=verify-me&hub.challenge=1158201444")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "1158201444");
    }

    #[tokio::test]
    async fn test_verification_rejects_wrong_token() {
        let harness = TestHarness::with_price(4000.0);
        let response = app(&harness, None)
            .oneshot(
                Request::builder()
                    .uri("/webhook?hub.mode=subscribe&hub.verify_token=nope&hub.challenge=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_notification_advances_session() {
        let harness = TestHarness::with_price(4000.0);
        let response = app(&harness, None)
            .oneshot(post(text_notification("9198", "menu"), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let ack: WebhookAck = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(ack.processed, 1);

        let session = harness.store.get("9198").await.unwrap();
        assert_eq!(session.state, ConvState::MainMenu);
        let sent = harness.dispatcher.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].channel_id, "PHONE_ID");
    }

    #[tokio::test]
    async fn test_signed_notification_accepted() {
        let harness = TestHarness::with_price(4000.0);
        let body = text_notification("9198", "hi");
        let signature = sign(SECRET, &body);

        let response = app(&harness, Some(SECRET))
            .oneshot(post(body, Some(signature)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let session = harness.store.get("9198").await.unwrap();
        assert_eq!(session.state, ConvState::WelcomeSent);
    }

    #[tokio::test]
    async fn test_bad_signature_rejected_before_processing() {
        let harness = TestHarness::with_price(4000.0);
        let body = text_notification("9198", "hi");

        let response = app(&harness, Some(SECRET))
            .oneshot(post(body, Some(sign("wrong", b"other"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(harness.store.len(), 0);
        assert!(harness.dispatcher.sent().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let harness = TestHarness::with_price(4000.0);
        let response = app(&harness, None)
            .oneshot(post(b"not json".to_vec(), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_internal_error() {
        let harness = TestHarness::with_price(4000.0);
        harness.dispatcher.set_failing(true);

        let response = app(&harness, None)
            .oneshot(post(text_notification("9198", "menu"), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // State was still written
        let session = harness.store.get("9198").await.unwrap();
        assert_eq!(session.state, ConvState::MainMenu);
    }

    #[tokio::test]
    async fn test_version() {
        let harness = TestHarness::with_price(4000.0);
        let response = app(&harness, None)
            .oneshot(
                Request::builder()
                    .uri("/version")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.starts_with("goldchat "));
    }
}
