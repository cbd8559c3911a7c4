use serde::Serialize;

use crate::transport::{DeliveryError, DeliveryReceipt, WebhookPayload};

pub const DELIVERED_MESSAGE: &str = "Thank you! We will be in touch soon.";
pub const DELIVERY_FAILED_MESSAGE: &str =
    "There was an error submitting your information. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Banner shown to the respondent until dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Why a contact submission could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactNotice {
    #[error("results are not available yet")]
    ResultsNotReady,
    #[error("please complete all required fields")]
    IncompleteFields,
    #[error("a submission is already in progress")]
    SubmissionInFlight,
}

/// Handle tying a delivery outcome back to the session that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

/// Payload ready for the transport plus the ticket to settle it with.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub payload: WebhookPayload,
}

/// What the session did with a settled delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionResolution {
    Delivered,
    Failed,
    /// The session was reset while the request was outstanding.
    Discarded,
}

/// At most one outstanding submission per session generation.
#[derive(Debug, Default, Clone)]
pub(crate) struct SubmissionGuard {
    generation: u64,
    in_flight: bool,
}

impl SubmissionGuard {
    pub(crate) fn issue(&mut self) -> Result<SubmissionTicket, ContactNotice> {
        if self.in_flight {
            return Err(ContactNotice::SubmissionInFlight);
        }
        self.in_flight = true;
        Ok(SubmissionTicket {
            generation: self.generation,
        })
    }

    /// Returns false when the ticket predates the latest reset.
    pub(crate) fn settle(&mut self, ticket: SubmissionTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub(crate) fn invalidate(&mut self) {
        self.generation += 1;
        self.in_flight = false;
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

pub(crate) fn log_outcome(
    assessment: &'static str,
    outcome: &Result<DeliveryReceipt, DeliveryError>,
) {
    match outcome {
        Ok(receipt) => {
            tracing::info!(assessment, status = receipt.status, "contact submission delivered")
        }
        Err(err) => tracing::warn!(assessment, error = %err, "contact submission failed"),
    }
}
