use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use super::archetype::{
    render as render_archetype, AnswerSet, ArchetypeEngine, ArchetypeResult, ArchetypeSession,
    ArchetypeView, ContactDetails, ContactField, IntakeDetails, IntakeField, ShareLinkError,
    SharedResult,
};
use super::compass::{
    CompassContact, CompassContactField, CompassEngine, CompassResult, CompassSession, RatingError,
};
use super::submission::ContactNotice;
use crate::transport::{DeliveryError, DeliveryReceipt, WebhookTransport};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArchetypeResultsRequest {
    #[serde(default)]
    pub responses: AnswerSet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArchetypeContactRequest {
    #[serde(default)]
    pub intake: IntakeDetails,
    pub contact: ContactDetails,
    #[serde(default)]
    pub responses: AnswerSet,
    #[serde(default)]
    pub additional: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompassResultsRequest {
    #[serde(default)]
    pub responses: BTreeMap<String, u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompassContactRequest {
    pub contact: CompassContact,
    #[serde(default)]
    pub responses: BTreeMap<String, u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Contact(#[from] ContactNotice),
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error(transparent)]
    Share(#[from] ShareLinkError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Stateless request handling for both assessments.
///
/// Each call rebuilds a session from the request, drives it through the same
/// transitions an interactive host would, and returns the outcome.
pub struct AssessmentService<T> {
    transport: Arc<T>,
    archetype: ArchetypeEngine,
    compass: CompassEngine,
}

impl<T> AssessmentService<T>
where
    T: WebhookTransport,
{
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            archetype: ArchetypeEngine::default(),
            compass: CompassEngine::default(),
        }
    }

    pub fn with_engines(
        transport: Arc<T>,
        archetype: ArchetypeEngine,
        compass: CompassEngine,
    ) -> Self {
        Self {
            transport,
            archetype,
            compass,
        }
    }

    pub fn archetype_results(&self, request: ArchetypeResultsRequest) -> ArchetypeResult {
        self.archetype.evaluate(&request.responses)
    }

    pub fn open_share_link(&self, query: &str) -> Result<ArchetypeView, AssessmentServiceError> {
        let shared = SharedResult::from_query(query);
        let session = ArchetypeSession::from_share_link(self.archetype.clone(), shared)?;
        Ok(render_archetype(&session))
    }

    pub async fn submit_archetype_contact(
        &self,
        request: ArchetypeContactRequest,
    ) -> Result<DeliveryReceipt, AssessmentServiceError> {
        let mut session =
            ArchetypeSession::restore(self.archetype.clone(), request.intake, request.responses);
        session.update_intake(IntakeField::Additional, request.additional);
        session.update_contact(ContactField::Name, request.contact.name);
        session.update_contact(ContactField::Organization, request.contact.organization);
        session.update_contact(ContactField::Email, request.contact.email);

        let pending = session.begin_contact_submission(Utc::now())?;
        let outcome = self.transport.deliver(&pending.payload).await;
        session.complete_contact_submission(pending.ticket, &outcome);
        Ok(outcome?)
    }

    pub fn compass_results(
        &self,
        request: CompassResultsRequest,
    ) -> Result<CompassResult, AssessmentServiceError> {
        let session = self.compass_session(&request.responses)?;
        Ok(session.evaluate())
    }

    pub async fn submit_compass_contact(
        &self,
        request: CompassContactRequest,
    ) -> Result<DeliveryReceipt, AssessmentServiceError> {
        let mut session = self.compass_session(&request.responses)?;
        session.show_results();
        session.update_contact(CompassContactField::Name, request.contact.name);
        session.update_contact(CompassContactField::Email, request.contact.email);
        session.update_contact(CompassContactField::Company, request.contact.company);
        session.update_contact(CompassContactField::Message, request.contact.message);

        let pending = session.begin_contact_submission(Utc::now())?;
        let outcome = self.transport.deliver(&pending.payload).await;
        session.complete_contact_submission(pending.ticket, &outcome);
        Ok(outcome?)
    }

    fn compass_session(
        &self,
        responses: &BTreeMap<String, u8>,
    ) -> Result<CompassSession, AssessmentServiceError> {
        let mut session = CompassSession::new(self.compass.clone());
        for (attribute_id, value) in responses {
            session.set_rating(attribute_id, *value)?;
        }
        Ok(session)
    }
}
