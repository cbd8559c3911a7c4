use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fit_assessment::assessments::AssessmentService;
use fit_assessment::config::AppConfig;
use fit_assessment::error::AppError;
use fit_assessment::telemetry;
use fit_assessment::transport::{ReqwestWebhookTransport, WebhookMode};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(mode) = args.webhook_mode.take() {
        config.webhook.mode = WebhookMode::from_attribute(&mode);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let transport = Arc::new(ReqwestWebhookTransport::from_config(&config.webhook)?);
    let assessment_service = Arc::new(AssessmentService::new(transport));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        webhook_mode = config.webhook.mode.as_str(),
        webhook = config.webhook.endpoint(),
        "fit assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
