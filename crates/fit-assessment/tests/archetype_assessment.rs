//! End-to-end archetype flow through the public session API and HTTP router.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use fit_assessment::assessments::archetype::{
    render, ArchetypeSession, ArchetypeView, ContactField, IntakeField, Screen, SharedResult,
};
use fit_assessment::assessments::{assessment_router, AssessmentService, SubmissionResolution};
use fit_assessment::transport::{
    DeliveryError, DeliveryReceipt, WebhookPayload, WebhookTransport,
};

#[derive(Default)]
struct MemoryWebhook {
    payloads: Mutex<Vec<Value>>,
}

#[async_trait]
impl WebhookTransport for MemoryWebhook {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<DeliveryReceipt, DeliveryError> {
        let body =
            serde_json::to_value(payload).map_err(|err| DeliveryError::Encode(err.to_string()))?;
        self.payloads.lock().expect("webhook mutex").push(body);
        Ok(DeliveryReceipt {
            status: 200,
            body: String::new(),
        })
    }
}

const WALKTHROUGH: [(&str, &str); 10] = [
    ("timeline", "breakthrough"),
    ("decisionMaking", "vision"),
    ("innovation", "breakthrough"),
    ("partnership", "creative"),
    ("budget", "planned"),
    ("creative", "compliance"),
    ("communication", "formal"),
    ("competitive", "positioning"),
    ("agencyIdeas", "breakthrough"),
    ("pastLessons", "slow"),
];

fn walk_through_assessment() -> ArchetypeSession {
    let mut session = ArchetypeSession::default();
    session.update_intake(IntakeField::Name, "Morgan Diaz");
    session.update_intake(IntakeField::Organization, "Helios Energy");
    session.update_intake(IntakeField::Role, "Head of Brand");
    assert!(session.start());

    for (question_id, value) in WALKTHROUGH {
        let ArchetypeView::Question(view) = render(&session) else {
            panic!("expected question view for {question_id}");
        };
        assert_eq!(view.id, question_id);
        assert!(!view.can_advance);
        session.select_answer(question_id, value);
        assert!(session.next());
    }

    session
}

#[test]
fn respondent_reaches_blended_result() {
    let session = walk_through_assessment();

    assert_eq!(session.screen(), Screen::Results);
    let result = session.results().expect("results");
    assert_eq!(result.percentages.values().sum::<u32>(), 100);
    // Visionary leads on 0.5 and architect follows on 0.4.
    assert_eq!(result.archetype_key.to_string(), "architect-visionary");
    assert!(!result.title.is_empty());
}

#[test]
fn last_question_offers_see_results() {
    let mut session = ArchetypeSession::default();
    session.update_intake(IntakeField::Name, "Morgan Diaz");
    session.update_intake(IntakeField::Organization, "Helios Energy");
    session.update_intake(IntakeField::Role, "Head of Brand");
    session.start();
    for (question_id, value) in &WALKTHROUGH[..9] {
        session.select_answer(question_id, *value);
        session.next();
    }

    let ArchetypeView::Question(view) = render(&session) else {
        panic!("expected last question");
    };
    assert_eq!(view.number, 10);
    assert_eq!(view.progress_pct, 100);
    assert_eq!(view.advance_label, "See Results");
}

#[test]
fn share_link_restores_same_result() {
    let session = walk_through_assessment();
    let link = SharedResult::new(session.intake().clone(), session.answers().clone())
        .to_url("https://fit.example.com/assessment")
        .expect("valid base");

    let restored =
        ArchetypeSession::from_share_link(session.engine().clone(), SharedResult::from_url(&link))
            .expect("loadable link");

    assert_eq!(restored.results(), session.results());
}

#[tokio::test]
async fn contact_submission_reaches_webhook() {
    let webhook = MemoryWebhook::default();
    let mut session = walk_through_assessment();
    session.update_intake(IntakeField::Additional, "Rebrand ahead of IPO");
    session.toggle_contact_form();
    session.update_contact(ContactField::Email, "morgan@helios.test");

    let pending = session
        .begin_contact_submission(Utc::now())
        .expect("submission starts");
    let outcome = webhook.deliver(&pending.payload).await;
    let resolution = session.complete_contact_submission(pending.ticket, &outcome);

    assert_eq!(resolution, SubmissionResolution::Delivered);
    let payloads = webhook.payloads.lock().expect("webhook mutex").clone();
    assert_eq!(payloads.len(), 1);
    let body = &payloads[0];
    assert_eq!(body["assessmentType"], "archetype");
    assert_eq!(body["userInfo"]["organization"], "Helios Energy");
    assert_eq!(body["contactInfo"]["email"], "morgan@helios.test");
    assert_eq!(body["additional"], "Rebrand ahead of IPO");
    assert_eq!(body["responses"]["pastLessons"], "slow");
    assert_eq!(body["scores"]["visionary"], 50);
    assert_eq!(body["scores"]["architect"], 40);
    assert_eq!(
        body["result"]["dominantArchetypes"],
        json!(["visionary", "architect"])
    );
}

#[tokio::test]
async fn router_serves_results_and_contact() {
    let webhook = Arc::new(MemoryWebhook::default());
    let router = assessment_router(Arc::new(AssessmentService::new(webhook.clone())));
    let responses: Value = WALKTHROUGH
        .iter()
        .map(|(id, value)| (id.to_string(), Value::from(*value)))
        .collect::<serde_json::Map<_, _>>()
        .into();

    let results = router
        .clone()
        .oneshot(
            Request::post("/api/v1/archetype/results")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "responses": responses }).to_string()))
                .expect("request"),
        )
        .await
        .expect("route executes");
    assert_eq!(results.status(), StatusCode::OK);

    let contact = router
        .oneshot(
            Request::post("/api/v1/archetype/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "intake": {
                            "name": "Morgan Diaz",
                            "organization": "Helios Energy",
                            "role": "Head of Brand",
                        },
                        "contact": {
                            "name": "Morgan Diaz",
                            "organization": "Helios Energy",
                            "email": "morgan@helios.test",
                        },
                        "responses": responses,
                    })
                    .to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(contact.status(), StatusCode::ACCEPTED);
    assert_eq!(webhook.payloads.lock().expect("webhook mutex").len(), 1);
}
