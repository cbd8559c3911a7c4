use serde::Serialize;

use super::domain::{AttributeScore, CompassContact};
use super::scoring::ScoreBand;
use super::session::{CompassSession, SCORE_ELEMENT_ID};
use crate::assessments::submission::Notification;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum CompassView {
    Sliders(SlidersView),
    Results(CompassResultsView),
}

/// One slider with the label under its current position.
#[derive(Debug, Clone, Serialize)]
pub struct SliderView {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub value: u8,
    pub label: String,
    pub labels: [String; 5],
}

#[derive(Debug, Clone, Serialize)]
pub struct SlidersView {
    pub sliders: Vec<SliderView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompassContactFormView {
    pub contact: CompassContact,
    pub submitting: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompassResultsView {
    pub element_id: &'static str,
    pub displayed_score: u32,
    pub target_score: u32,
    pub band: ScoreBand,
    pub description: String,
    pub attribute_scores: Vec<AttributeScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_form: Option<CompassContactFormView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

pub fn render(session: &CompassSession) -> CompassView {
    if !session.showing_results() {
        let sliders = session
            .engine()
            .catalog()
            .questions()
            .iter()
            .map(|question| {
                let ordinal = session.ratings().get(&question.id);
                SliderView {
                    id: question.id.clone(),
                    name: question.name.clone(),
                    prompt: question.prompt.clone(),
                    value: ordinal.get(),
                    label: question.label(ordinal).to_string(),
                    labels: question.labels.clone(),
                }
            })
            .collect();
        return CompassView::Sliders(SlidersView { sliders });
    }

    let result = session.evaluate();
    CompassView::Results(CompassResultsView {
        element_id: SCORE_ELEMENT_ID,
        displayed_score: session.displayed_score(),
        target_score: result.average,
        band: result.band,
        description: result.description,
        attribute_scores: result.attribute_scores,
        contact_form: session.contact_form_open().then(|| CompassContactFormView {
            contact: session.contact().clone(),
            submitting: session.submission_in_flight(),
        }),
        notification: session.notification().cloned(),
    })
}
