use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::domain::{CompassAnswers, CompassContact, CompassContactField, Ordinal, OrdinalError};
use super::scoring::{CompassEngine, CompassResult};
use crate::assessments::reveal::{ScoreReveal, DEFAULT_STEPS};
use crate::assessments::submission::{
    log_outcome, ContactNotice, Notification, PendingSubmission, SubmissionGuard,
    SubmissionResolution, SubmissionTicket, DELIVERED_MESSAGE, DELIVERY_FAILED_MESSAGE,
};
use crate::transport::{CompassSubmission, DeliveryError, DeliveryReceipt, WebhookPayload};

pub const REVEAL_DURATION: Duration = Duration::from_millis(2000);
pub const INCOMPLETE_CONTACT_MESSAGE: &str = "Please complete all required fields.";
pub const SCORE_ELEMENT_ID: &str = "ct_scoreNumber";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("unknown compass attribute '{0}'")]
    UnknownAttribute(String),
    #[error(transparent)]
    Ordinal(#[from] OrdinalError),
}

/// Slider-based compass teaser session.
#[derive(Debug, Clone)]
pub struct CompassSession {
    engine: CompassEngine,
    ratings: CompassAnswers,
    show_results: bool,
    contact_form_open: bool,
    contact: CompassContact,
    notification: Option<Notification>,
    reveal: Option<ScoreReveal<&'static str>>,
    displayed_score: u32,
    submissions: SubmissionGuard,
}

impl CompassSession {
    pub fn new(engine: CompassEngine) -> Self {
        let ratings = middle_ratings(&engine);
        Self {
            engine,
            ratings,
            show_results: false,
            contact_form_open: false,
            contact: CompassContact::default(),
            notification: None,
            reveal: None,
            displayed_score: 0,
            submissions: SubmissionGuard::default(),
        }
    }

    pub fn engine(&self) -> &CompassEngine {
        &self.engine
    }

    pub fn ratings(&self) -> &CompassAnswers {
        &self.ratings
    }

    pub fn contact(&self) -> &CompassContact {
        &self.contact
    }

    pub fn showing_results(&self) -> bool {
        self.show_results
    }

    pub fn contact_form_open(&self) -> bool {
        self.contact_form_open
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn displayed_score(&self) -> u32 {
        self.displayed_score
    }

    pub fn submission_in_flight(&self) -> bool {
        self.submissions.is_in_flight()
    }

    pub fn set_rating(&mut self, attribute_id: &str, value: u8) -> Result<(), RatingError> {
        if self.engine.catalog().question(attribute_id).is_none() {
            return Err(RatingError::UnknownAttribute(attribute_id.to_string()));
        }
        self.ratings.set(attribute_id, Ordinal::new(value)?);
        Ok(())
    }

    pub fn evaluate(&self) -> CompassResult {
        self.engine.evaluate(&self.ratings)
    }

    pub fn show_results(&mut self) -> CompassResult {
        let result = self.evaluate();
        self.show_results = true;
        self.displayed_score = 0;
        self.reveal = Some(ScoreReveal::new(
            vec![(SCORE_ELEMENT_ID, result.average)],
            DEFAULT_STEPS,
            REVEAL_DURATION,
        ));
        info!(average = result.average, band = ?result.band, "compass results shown");
        result
    }

    pub fn reveal_cadence(&self) -> Option<Duration> {
        self.reveal.as_ref().map(ScoreReveal::cadence)
    }

    pub fn tick_reveal(&mut self) -> bool {
        let Some(reveal) = self.reveal.as_mut() else {
            return false;
        };
        match reveal.next() {
            Some(frame) => {
                self.displayed_score = frame.value(&SCORE_ELEMENT_ID).unwrap_or_default();
                if reveal.is_finished() {
                    self.reveal = None;
                }
                true
            }
            None => {
                self.reveal = None;
                false
            }
        }
    }

    pub fn toggle_contact_form(&mut self) {
        self.contact_form_open = !self.contact_form_open;
    }

    pub fn update_contact(&mut self, field: CompassContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CompassContactField::Name => self.contact.name = value,
            CompassContactField::Email => self.contact.email = value,
            CompassContactField::Company => self.contact.company = value,
            CompassContactField::Message => self.contact.message = value,
        }
    }

    pub fn begin_contact_submission(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<PendingSubmission, ContactNotice> {
        if !self.show_results {
            return Err(ContactNotice::ResultsNotReady);
        }
        if !self.contact.is_complete() {
            self.notification = Some(Notification::error(INCOMPLETE_CONTACT_MESSAGE));
            return Err(ContactNotice::IncompleteFields);
        }

        let ticket = self.submissions.issue()?;
        let result = self.evaluate();
        let payload = WebhookPayload::Compass(CompassSubmission::new(
            now,
            self.contact.clone(),
            self.ratings.to_raw(),
            &result,
        ));

        Ok(PendingSubmission { ticket, payload })
    }

    pub fn complete_contact_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: &Result<DeliveryReceipt, DeliveryError>,
    ) -> SubmissionResolution {
        if !self.submissions.settle(ticket) {
            debug!("discarding delivery outcome for a reset session");
            return SubmissionResolution::Discarded;
        }
        log_outcome("compass-teaser", outcome);

        match outcome {
            Ok(_) => {
                self.notification = Some(Notification::success(DELIVERED_MESSAGE));
                self.contact = CompassContact::default();
                self.contact_form_open = false;
                SubmissionResolution::Delivered
            }
            Err(_) => {
                self.notification = Some(Notification::error(DELIVERY_FAILED_MESSAGE));
                SubmissionResolution::Failed
            }
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn reset(&mut self) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.cancel();
        }
        self.reveal = None;
        self.submissions.invalidate();
        self.ratings = middle_ratings(&self.engine);
        self.show_results = false;
        self.contact_form_open = false;
        self.contact = CompassContact::default();
        self.notification = None;
        self.displayed_score = 0;
    }
}

impl Default for CompassSession {
    fn default() -> Self {
        Self::new(CompassEngine::default())
    }
}

fn middle_ratings(engine: &CompassEngine) -> CompassAnswers {
    engine
        .catalog()
        .questions()
        .iter()
        .map(|question| (question.id.clone(), Ordinal::MIDDLE))
        .collect()
}
