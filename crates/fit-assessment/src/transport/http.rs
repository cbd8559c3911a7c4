use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{error, info, warn};

use super::{DeliveryError, DeliveryReceipt, WebhookPayload, WebhookTransport};
use crate::config::WebhookConfig;

/// JSON POST to a single webhook URL using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestWebhookTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl ReqwestWebhookTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| DeliveryError::Unavailable(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &WebhookConfig) -> Result<Self, DeliveryError> {
        Self::new(config.endpoint(), config.timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WebhookTransport for ReqwestWebhookTransport {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<DeliveryReceipt, DeliveryError> {
        let body =
            serde_json::to_vec(payload).map_err(|err| DeliveryError::Encode(err.to_string()))?;

        info!(
            endpoint = %self.endpoint,
            assessment = payload.assessment_type(),
            bytes = body.len(),
            "posting assessment to webhook"
        );

        let response = match self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!(endpoint = %self.endpoint, error = %err, "webhook request failed");
                return Err(DeliveryError::Network(err.to_string()));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(
                    endpoint = %self.endpoint,
                    error = %err,
                    "could not read webhook response body"
                );
                String::new()
            }
        };

        if status.is_success() {
            info!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "webhook accepted assessment"
            );
            Ok(DeliveryReceipt {
                status: status.as_u16(),
                body,
            })
        } else {
            error!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                response = %body,
                "webhook rejected assessment"
            );
            Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
