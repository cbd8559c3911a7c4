use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::domain::{
    AnswerSet, Archetype, ContactDetails, ContactField, IntakeDetails, IntakeField,
};
use super::scoring::{ArchetypeEngine, ArchetypeResult};
use super::share::{ShareLinkError, SharedResult};
use crate::assessments::reveal::{ScoreReveal, DEFAULT_STEPS};
use crate::assessments::submission::{
    log_outcome, ContactNotice, Notification, PendingSubmission, SubmissionGuard,
    SubmissionResolution, SubmissionTicket, DELIVERED_MESSAGE, DELIVERY_FAILED_MESSAGE,
};
use crate::transport::{
    ArchetypeSubmission, DeliveryError, DeliveryReceipt, WebhookPayload,
};

pub const REVEAL_DURATION: Duration = Duration::from_millis(1500);
pub const INCOMPLETE_INTAKE_MESSAGE: &str = "Please complete all 3 fields to continue.";
pub const INCOMPLETE_CONTACT_MESSAGE: &str = "Please complete all fields.";

/// Screen currently presented to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Question(usize),
    Results,
}

/// In-progress archetype assessment owned by the host.
///
/// Every mutation is an explicit method; the presentation layer re-derives
/// scores from [`ArchetypeSession::evaluate`] on each render.
#[derive(Debug, Clone)]
pub struct ArchetypeSession {
    engine: ArchetypeEngine,
    intake: IntakeDetails,
    additional: String,
    answers: AnswerSet,
    cursor: Option<usize>,
    show_results: bool,
    show_error: bool,
    contact_form_open: bool,
    contact: ContactDetails,
    notification: Option<Notification>,
    reveal: Option<ScoreReveal<Archetype>>,
    displayed: BTreeMap<Archetype, u32>,
    submissions: SubmissionGuard,
}

impl ArchetypeSession {
    pub fn new(engine: ArchetypeEngine) -> Self {
        Self {
            engine,
            intake: IntakeDetails::default(),
            additional: String::new(),
            answers: AnswerSet::new(),
            cursor: None,
            show_results: false,
            show_error: false,
            contact_form_open: false,
            contact: ContactDetails::default(),
            notification: None,
            reveal: None,
            displayed: zeroed_display(),
            submissions: SubmissionGuard::default(),
        }
    }

    /// Session opened directly on the results screen for known answers.
    pub fn restore(engine: ArchetypeEngine, intake: IntakeDetails, answers: AnswerSet) -> Self {
        let mut session = Self::new(engine);
        session.intake = intake;
        session.answers = answers;
        session.cursor = Some(session.engine.catalog().len().saturating_sub(1));
        session.enter_results();
        session
    }

    pub fn from_share_link(
        engine: ArchetypeEngine,
        shared: SharedResult,
    ) -> Result<Self, ShareLinkError> {
        let SharedResult { intake, answers } = shared.require_loadable()?;
        Ok(Self::restore(engine, intake, answers))
    }

    pub fn engine(&self) -> &ArchetypeEngine {
        &self.engine
    }

    pub fn intake(&self) -> &IntakeDetails {
        &self.intake
    }

    pub fn additional(&self) -> &str {
        &self.additional
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn show_error(&self) -> bool {
        self.show_error
    }

    pub fn contact_form_open(&self) -> bool {
        self.contact_form_open
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn submission_in_flight(&self) -> bool {
        self.submissions.is_in_flight()
    }

    pub fn displayed_scores(&self) -> &BTreeMap<Archetype, u32> {
        &self.displayed
    }

    pub fn screen(&self) -> Screen {
        if self.show_results {
            return Screen::Results;
        }
        match self.cursor {
            Some(index) if self.intake.is_complete() => Screen::Question(index),
            _ => Screen::Intro,
        }
    }

    pub fn update_intake(&mut self, field: IntakeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            IntakeField::Name => self.intake.name = value,
            IntakeField::Organization => self.intake.organization = value,
            IntakeField::Role => self.intake.role = value,
            IntakeField::Additional => self.additional = value,
        }
        self.show_error = false;
    }

    /// Record an answer. Unknown questions are ignored.
    pub fn select_answer(&mut self, question_id: &str, value: impl Into<String>) {
        if self.engine.catalog().question(question_id).is_none() {
            debug!(question = question_id, "ignoring answer for unknown question");
            return;
        }
        self.answers.record(question_id, value);
        self.show_error = false;
    }

    /// Leave the intro screen. Returns false and raises the validation notice
    /// when intake is incomplete.
    pub fn start(&mut self) -> bool {
        if self.intake.is_complete() {
            self.cursor = Some(0);
            self.show_error = false;
            true
        } else {
            self.show_error = true;
            false
        }
    }

    pub fn intake_notice(&self) -> Option<&'static str> {
        self.show_error.then_some(INCOMPLETE_INTAKE_MESSAGE)
    }

    /// Whether "Next" is enabled on the current question.
    pub fn can_advance(&self) -> bool {
        match self.screen() {
            Screen::Question(index) => self
                .engine
                .catalog()
                .get(index)
                .map(|question| self.answers.is_answered(&question.id))
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Advance one question, or into results from the last question.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let Screen::Question(index) = self.screen() else {
            return false;
        };

        if index + 1 < self.engine.catalog().len() {
            self.cursor = Some(index + 1);
        } else {
            self.enter_results();
        }
        true
    }

    pub fn back(&mut self) {
        if let Screen::Question(index) = self.screen() {
            self.cursor = index.checked_sub(1);
        }
    }

    /// Fresh evaluation of a snapshot of the current answers.
    pub fn evaluate(&self) -> ArchetypeResult {
        let snapshot = self.answers.clone();
        self.engine.evaluate(&snapshot)
    }

    pub fn results(&self) -> Option<ArchetypeResult> {
        self.show_results.then(|| self.evaluate())
    }

    pub fn reveal_cadence(&self) -> Option<Duration> {
        self.reveal.as_ref().map(ScoreReveal::cadence)
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Advance the score count-up by one frame. Returns false once finished.
    pub fn tick_reveal(&mut self) -> bool {
        let Some(reveal) = self.reveal.as_mut() else {
            return false;
        };
        match reveal.next() {
            Some(frame) => {
                self.displayed = frame.values.into_iter().collect();
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
        if self.contact_form_open {
            self.contact_form_open = false;
        } else {
            self.contact = self.prefilled_contact();
            self.contact_form_open = true;
        }
    }

    pub fn update_contact(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.contact.name = value,
            ContactField::Organization => self.contact.organization = value,
            ContactField::Email => self.contact.email = value,
        }
    }

    /// Validate the contact form and hand back the payload to deliver.
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
        let payload = WebhookPayload::Archetype(ArchetypeSubmission::new(
            now,
            self.intake.clone(),
            self.contact.clone(),
            self.answers.clone(),
            Some(self.additional.clone()),
            &result,
        ));

        info!(archetype_key = %result.archetype_key, "archetype contact submission started");
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
        log_outcome("archetype", outcome);

        match outcome {
            Ok(_) => {
                self.notification = Some(Notification::success(DELIVERED_MESSAGE));
                self.contact_form_open = false;
                self.contact = self.prefilled_contact();
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

    /// Clear all answers and flags; pending reveal frames and deliveries are dropped.
    pub fn reset(&mut self) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.cancel();
        }
        self.reveal = None;
        self.submissions.invalidate();
        self.intake = IntakeDetails::default();
        self.additional.clear();
        self.answers.clear();
        self.cursor = None;
        self.show_results = false;
        self.show_error = false;
        self.contact_form_open = false;
        self.contact = ContactDetails::default();
        self.notification = None;
        self.displayed = zeroed_display();
    }

    fn enter_results(&mut self) {
        self.show_results = true;
        let targets = self.evaluate().percentages.into_iter().collect();
        self.displayed = zeroed_display();
        self.reveal = Some(ScoreReveal::new(targets, DEFAULT_STEPS, REVEAL_DURATION));
    }

    fn prefilled_contact(&self) -> ContactDetails {
        ContactDetails {
            name: self.intake.name.clone(),
            organization: self.intake.organization.clone(),
            email: String::new(),
        }
    }
}

impl Default for ArchetypeSession {
    fn default() -> Self {
        Self::new(ArchetypeEngine::default())
    }
}

fn zeroed_display() -> BTreeMap<Archetype, u32> {
    Archetype::ALL.iter().map(|tag| (*tag, 0)).collect()
}
