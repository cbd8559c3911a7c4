use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::service::{
    ArchetypeContactRequest, ArchetypeResultsRequest, AssessmentService, AssessmentServiceError,
    CompassContactRequest, CompassResultsRequest,
};
use super::submission::{DELIVERED_MESSAGE, DELIVERY_FAILED_MESSAGE};
use crate::transport::{DeliveryReceipt, WebhookTransport};

/// Router builder exposing scoring, share-link and contact endpoints.
pub fn assessment_router<T>(service: Arc<AssessmentService<T>>) -> Router
where
    T: WebhookTransport + 'static,
{
    Router::new()
        .route("/api/v1/archetype/results", post(archetype_results_handler::<T>))
        .route("/api/v1/archetype/share", get(archetype_share_handler::<T>))
        .route("/api/v1/archetype/contact", post(archetype_contact_handler::<T>))
        .route("/api/v1/compass/results", post(compass_results_handler::<T>))
        .route("/api/v1/compass/contact", post(compass_contact_handler::<T>))
        .with_state(service)
}

pub(crate) async fn archetype_results_handler<T>(
    State(service): State<Arc<AssessmentService<T>>>,
    axum::Json(request): axum::Json<ArchetypeResultsRequest>,
) -> Response
where
    T: WebhookTransport + 'static,
{
    let result = service.archetype_results(request);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn archetype_share_handler<T>(
    State(service): State<Arc<AssessmentService<T>>>,
    RawQuery(query): RawQuery,
) -> Response
where
    T: WebhookTransport + 'static,
{
    match service.open_share_link(query.as_deref().unwrap_or_default()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn archetype_contact_handler<T>(
    State(service): State<Arc<AssessmentService<T>>>,
    axum::Json(request): axum::Json<ArchetypeContactRequest>,
) -> Response
where
    T: WebhookTransport + 'static,
{
    match service.submit_archetype_contact(request).await {
        Ok(receipt) => delivered_response(receipt),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compass_results_handler<T>(
    State(service): State<Arc<AssessmentService<T>>>,
    axum::Json(request): axum::Json<CompassResultsRequest>,
) -> Response
where
    T: WebhookTransport + 'static,
{
    match service.compass_results(request) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compass_contact_handler<T>(
    State(service): State<Arc<AssessmentService<T>>>,
    axum::Json(request): axum::Json<CompassContactRequest>,
) -> Response
where
    T: WebhookTransport + 'static,
{
    match service.submit_compass_contact(request).await {
        Ok(receipt) => delivered_response(receipt),
        Err(error) => error_response(error),
    }
}

fn delivered_response(receipt: DeliveryReceipt) -> Response {
    let payload = json!({
        "status": "delivered",
        "message": DELIVERED_MESSAGE,
        "webhook_status": receipt.status,
    });
    (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
}

fn error_response(error: AssessmentServiceError) -> Response {
    match error {
        AssessmentServiceError::Delivery(error) => {
            let payload = json!({
                "error": DELIVERY_FAILED_MESSAGE,
                "detail": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
