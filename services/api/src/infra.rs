use async_trait::async_trait;
use fit_assessment::transport::{
    DeliveryError, DeliveryReceipt, WebhookPayload, WebhookTransport,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Transport that accepts every payload without leaving the process.
#[derive(Default, Clone)]
pub(crate) struct DryRunTransport {
    payloads: Arc<Mutex<Vec<WebhookPayload>>>,
}

#[async_trait]
impl WebhookTransport for DryRunTransport {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<DeliveryReceipt, DeliveryError> {
        let body =
            serde_json::to_string(payload).map_err(|err| DeliveryError::Encode(err.to_string()))?;
        info!(
            assessment = payload.assessment_type(),
            bytes = body.len(),
            "dry run: webhook delivery skipped"
        );
        self.payloads
            .lock()
            .expect("dry run mutex poisoned")
            .push(payload.clone());
        Ok(DeliveryReceipt { status: 200, body })
    }
}

impl DryRunTransport {
    pub(crate) fn payloads(&self) -> Vec<WebhookPayload> {
        self.payloads.lock().expect("dry run mutex poisoned").clone()
    }
}

/// Parse `key=value` pairs given on the command line.
pub(crate) fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Parse `attribute=rating` pairs for compass sliders.
pub(crate) fn parse_rating(raw: &str) -> Result<(String, u8), String> {
    let (key, value) = parse_key_value(raw)?;
    let rating = value
        .parse::<u8>()
        .map_err(|_| format!("rating for '{key}' must be a number from 1 to 5"))?;
    Ok((key, rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answers_and_ratings() {
        assert_eq!(
            parse_key_value("timeline=kpis"),
            Ok(("timeline".to_string(), "kpis".to_string()))
        );
        assert_eq!(parse_rating("awake=4"), Ok(("awake".to_string(), 4)));
        assert!(parse_key_value("timeline").is_err());
        assert!(parse_key_value("=kpis").is_err());
        assert!(parse_rating("awake=high").is_err());
    }

    #[tokio::test]
    async fn dry_run_records_payloads() {
        use chrono::Utc;
        use fit_assessment::assessments::compass::{CompassContact, CompassEngine};
        use fit_assessment::transport::CompassSubmission;

        let engine = CompassEngine::default();
        let result = engine.evaluate(&Default::default());
        let payload = WebhookPayload::Compass(CompassSubmission::new(
            Utc::now(),
            CompassContact::default(),
            Default::default(),
            &result,
        ));

        let transport = DryRunTransport::default();
        let receipt = transport.deliver(&payload).await.expect("dry run accepts");

        assert_eq!(receipt.status, 200);
        assert!(receipt.body.contains("compass-teaser"));
        assert_eq!(transport.payloads().len(), 1);
    }
}
