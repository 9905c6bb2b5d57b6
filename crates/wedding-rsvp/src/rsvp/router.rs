use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::{RsvpRequest, RsvpResponse};
use super::mailer::MailTransport;
use super::service::{RsvpService, RsvpServiceError};

/// Router builder exposing the RSVP submission endpoint.
pub fn rsvp_router<M>(service: Arc<RsvpService<M>>) -> Router
where
    M: MailTransport + 'static,
{
    Router::new()
        .route("/api/rsvp", post(rsvp_handler::<M>))
        .with_state(service)
}

pub(crate) async fn rsvp_handler<M>(
    State(service): State<Arc<RsvpService<M>>>,
    axum::Json(request): axum::Json<RsvpRequest>,
) -> Response
where
    M: MailTransport + 'static,
{
    match service.handle(request).await {
        Ok(receipt) => {
            let response = RsvpResponse::from(receipt);
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(RsvpServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(RsvpServiceError::Mail(error)) => {
            let payload = json!({
                "error": "failed to send email",
                "detail": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
