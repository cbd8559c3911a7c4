use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assessments::archetype::{
    AnswerSet, Archetype, ArchetypeResult, ContactDetails, IntakeDetails,
};
use crate::assessments::compass::{CompassContact, CompassResult};

pub const ARCHETYPE_ASSESSMENT: &str = "archetype";
pub const COMPASS_ASSESSMENT: &str = "compass-teaser";

/// Body posted to the webhook for either assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WebhookPayload {
    Archetype(ArchetypeSubmission),
    Compass(CompassSubmission),
}

impl WebhookPayload {
    pub fn assessment_type(&self) -> &'static str {
        match self {
            WebhookPayload::Archetype(_) => ARCHETYPE_ASSESSMENT,
            WebhookPayload::Compass(_) => COMPASS_ASSESSMENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeResultPayload {
    pub dominant_archetypes: Vec<Archetype>,
    pub archetype_key: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeSubmission {
    pub timestamp: DateTime<Utc>,
    pub assessment_type: &'static str,
    pub user_info: IntakeDetails,
    pub contact_info: ContactDetails,
    pub responses: AnswerSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<String>,
    pub scores: BTreeMap<Archetype, u32>,
    pub result: ArchetypeResultPayload,
}

impl ArchetypeSubmission {
    pub fn new(
        timestamp: DateTime<Utc>,
        user_info: IntakeDetails,
        contact_info: ContactDetails,
        responses: AnswerSet,
        additional: Option<String>,
        result: &ArchetypeResult,
    ) -> Self {
        Self {
            timestamp,
            assessment_type: ARCHETYPE_ASSESSMENT,
            user_info,
            contact_info,
            responses,
            additional: additional.filter(|text| !text.trim().is_empty()),
            scores: result.percentages.clone(),
            result: ArchetypeResultPayload {
                dominant_archetypes: result.dominant_archetypes.clone(),
                archetype_key: result.archetype_key.to_string(),
                title: result.title.to_string(),
                description: result.description.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompassSubmission {
    pub timestamp: DateTime<Utc>,
    pub assessment_type: &'static str,
    pub contact_form_submitted: bool,
    pub contact_info: CompassContact,
    pub score: u32,
    pub responses: BTreeMap<String, u8>,
    pub detailed_scores: BTreeMap<String, u32>,
}

impl CompassSubmission {
    pub fn new(
        timestamp: DateTime<Utc>,
        contact_info: CompassContact,
        responses: BTreeMap<String, u8>,
        result: &CompassResult,
    ) -> Self {
        Self {
            timestamp,
            assessment_type: COMPASS_ASSESSMENT,
            contact_form_submitted: true,
            contact_info,
            score: result.average,
            responses,
            detailed_scores: result
                .attribute_scores
                .iter()
                .map(|entry| (entry.id.clone(), entry.score))
                .collect(),
        }
    }
}
