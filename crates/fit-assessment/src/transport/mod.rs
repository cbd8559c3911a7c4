//! Outbound delivery of completed assessments to the configured webhook.
//!
//! Delivery is a single attempt. Callers receive the outcome as a value and
//! decide how to surface it; nothing here retries or queues.

mod endpoints;
mod http;
mod payload;

pub use endpoints::{WebhookEndpoints, WebhookMode};
pub use http::ReqwestWebhookTransport;
pub use payload::{
    ArchetypeResultPayload, ArchetypeSubmission, CompassSubmission, WebhookPayload,
};

use async_trait::async_trait;

/// Transport seam so sessions and routes can be exercised without a network.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Acknowledgement from the webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub body: String,
}

/// Reasons a delivery attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("unable to encode webhook payload: {0}")]
    Encode(String),
    #[error("webhook responded with status {status}")]
    Status { status: u16, body: String },
    #[error("webhook request failed: {0}")]
    Network(String),
    #[error("webhook client unavailable: {0}")]
    Unavailable(String),
}
