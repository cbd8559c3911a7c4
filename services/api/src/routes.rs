use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use fit_assessment::assessments::archetype::{ArchetypeCatalog, Question};
use fit_assessment::assessments::compass::{CompassCatalog, CompassQuestion};
use fit_assessment::assessments::{assessment_router, AssessmentService};
use fit_assessment::transport::WebhookTransport;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Question catalogs a host needs to render either assessment.
#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) archetype: Vec<Question>,
    pub(crate) compass: Vec<CompassQuestion>,
}

pub(crate) fn with_assessment_routes<T>(service: Arc<AssessmentService<T>>) -> axum::Router
where
    T: WebhookTransport + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/catalog", axum::routing::get(catalog_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        archetype: ArchetypeCatalog::standard().questions().to_vec(),
        compass: CompassCatalog::standard().questions().to_vec(),
    })
}
