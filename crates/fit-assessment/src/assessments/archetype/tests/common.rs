use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessments::archetype::{
    AnswerSet, Archetype, ArchetypeCatalog, ArchetypeEngine, ArchetypeSession, ContactField,
    IntakeDetails, IntakeField, Screen, ScoreVector,
};
use crate::assessments::service::AssessmentService;
use crate::transport::{DeliveryError, DeliveryReceipt, WebhookPayload, WebhookTransport};

pub(super) fn engine() -> ArchetypeEngine {
    ArchetypeEngine::default()
}

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn intake() -> IntakeDetails {
    IntakeDetails {
        name: "Jordan Lee".to_string(),
        organization: "Northwind".to_string(),
        role: "VP Marketing".to_string(),
    }
}

/// Answers that give each listed archetype the requested number of questions,
/// assigned to catalog questions in order.
pub(super) fn answers_for(counts: &[(Archetype, usize)]) -> AnswerSet {
    let catalog = ArchetypeCatalog::standard();
    let mut questions = catalog.questions().iter();
    let mut answers = AnswerSet::new();

    for (tag, count) in counts {
        for question in questions.by_ref().take(*count) {
            let option = question
                .options
                .iter()
                .find(|option| option.archetype == *tag)
                .expect("every question offers every archetype");
            answers.record(question.id.clone(), option.value.clone());
        }
    }

    answers
}

pub(super) fn scores(
    architect: f64,
    visionary: f64,
    accelerator: f64,
    entrepreneur: f64,
) -> ScoreVector {
    ScoreVector::from_scores([
        (Archetype::Architect, architect),
        (Archetype::Visionary, visionary),
        (Archetype::Accelerator, accelerator),
        (Archetype::Entrepreneur, entrepreneur),
    ])
}

/// Session walked through intake and all ten questions into results.
/// Questions not covered by `counts` take their first option.
pub(super) fn completed_session(counts: &[(Archetype, usize)]) -> ArchetypeSession {
    let mut session = ArchetypeSession::new(engine());
    let details = intake();
    session.update_intake(IntakeField::Name, details.name);
    session.update_intake(IntakeField::Organization, details.organization);
    session.update_intake(IntakeField::Role, details.role);
    assert!(session.start(), "intake is complete");

    let answers = answers_for(counts);
    loop {
        let Screen::Question(index) = session.screen() else {
            break;
        };
        let question = session
            .engine()
            .catalog()
            .get(index)
            .expect("question exists")
            .clone();
        let value = answers
            .get(&question.id)
            .map(str::to_string)
            .unwrap_or_else(|| question.options[0].value.clone());
        session.select_answer(&question.id, value);
        assert!(session.next(), "answered question advances");
    }

    session
}

/// Open the contact form (prefilled from intake) and add an email.
pub(super) fn fill_contact(session: &mut ArchetypeSession) {
    if !session.contact_form_open() {
        session.toggle_contact_form();
    }
    session.update_contact(ContactField::Email, "jordan@northwind.test");
}

pub(super) fn receipt() -> DeliveryReceipt {
    DeliveryReceipt {
        status: 200,
        body: "{\"ok\":true}".to_string(),
    }
}

#[derive(Default)]
pub(super) struct RecordingTransport {
    delivered: Mutex<Vec<WebhookPayload>>,
}

impl RecordingTransport {
    pub(super) fn payloads(&self) -> Vec<WebhookPayload> {
        self.delivered.lock().expect("transport mutex").clone()
    }
}

#[async_trait]
impl WebhookTransport for RecordingTransport {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<DeliveryReceipt, DeliveryError> {
        self.delivered
            .lock()
            .expect("transport mutex")
            .push(payload.clone());
        Ok(receipt())
    }
}

pub(super) struct FailingTransport;

#[async_trait]
impl WebhookTransport for FailingTransport {
    async fn deliver(&self, _payload: &WebhookPayload) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::Status {
            status: 500,
            body: "workflow crashed".to_string(),
        })
    }
}

pub(super) fn recording_service() -> (
    Arc<AssessmentService<RecordingTransport>>,
    Arc<RecordingTransport>,
) {
    let transport = Arc::new(RecordingTransport::default());
    let service = Arc::new(AssessmentService::new(transport.clone()));
    (service, transport)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
