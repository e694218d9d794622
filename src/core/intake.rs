//! Lead intake endpoint.
//!
//! `POST /api/quote` accepts a [`QuoteDraft`](crate::core::quote::QuoteDraft),
//! re-runs the validation table server-side and, when an
//! `INTAKE_WEBHOOK_URL` is configured, forwards the accepted
//! [`QuoteRequest`](crate::core::quote::QuoteRequest) to it. Without a
//! webhook the lead is only logged; nothing is persisted here.

use crate::core::config::Config;
use crate::core::quote::{QuoteDraft, QuoteRequest};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

/// Failure paths of the intake handler.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook returned status {0}")]
    Webhook(u16),
}

/// Router for the lead intake API.
pub fn intake_router(config: Config) -> Router {
    Router::new()
        .route("/api/quote", post(submit_quote))
        .with_state(config)
}

async fn submit_quote(State(config): State<Config>, Json(draft): Json<QuoteDraft>) -> Response {
    match draft.validate() {
        Ok(request) => {
            tracing::info!(
                company = %request.company,
                tier = request.service_type.as_str(),
                timeline = request.timeline.as_str(),
                "quote request received"
            );
            if let Some(url) = &config.intake_webhook_url {
                if let Err(err) = forward_quote(url, &request).await {
                    tracing::error!(%err, "failed to forward quote request");
                    return StatusCode::BAD_GATEWAY.into_response();
                }
            }
            StatusCode::ACCEPTED.into_response()
        }
        Err(errors) => {
            tracing::debug!(fields = errors.count(), "quote request rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
        }
    }
}

async fn forward_quote(url: &str, request: &QuoteRequest) -> Result<(), IntakeError> {
    let response = reqwest::Client::new()
        .post(url)
        .json(request)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(IntakeError::Webhook(response.status().as_u16()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quote::FieldErrors;

    fn valid_draft() -> QuoteDraft {
        QuoteDraft {
            name: "Jane Doe".to_string(),
            email: "jane@acme.com".to_string(),
            company: "Acme Corporation".to_string(),
            phone: String::new(),
            service_type: "professional".to_string(),
            infrastructure: "cloud".to_string(),
            timeline: "month".to_string(),
            budget: "5k-15k".to_string(),
            requirements: "25 sensors across two regions".to_string(),
            additional_info: String::new(),
        }
    }

    #[tokio::test]
    async fn accepts_valid_draft_without_webhook() {
        let config = Config::default();
        let response = submit_quote(State(config), Json(valid_draft())).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn rejects_invalid_draft_with_field_errors() {
        let config = Config::default();
        let response = submit_quote(State(config), Json(QuoteDraft::default())).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body");
        let errors: FieldErrors = serde_json::from_slice(&body).expect("error payload");
        assert_eq!(errors.count(), 8);
        assert_eq!(errors.get(crate::core::quote::Field::Email).unwrap(), "Email is required");
    }

    #[tokio::test]
    async fn unreachable_webhook_fails_the_request() {
        let config = Config {
            intake_webhook_url: Some("http://127.0.0.1:9/leads".to_string()),
            contact_email: None,
        };
        let response = submit_quote(State(config), Json(valid_draft())).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
