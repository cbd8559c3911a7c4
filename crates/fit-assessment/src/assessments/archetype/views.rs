use serde::Serialize;

use super::domain::{Archetype, ContactDetails, IntakeDetails};
use super::session::{ArchetypeSession, Screen};
use crate::assessments::submission::Notification;

/// Serializable description of what the host should display.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ArchetypeView {
    Intro(IntroView),
    Question(QuestionView),
    Results(ResultsView),
}

#[derive(Debug, Clone, Serialize)]
pub struct IntroView {
    pub intake: IntakeDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub number: usize,
    pub total: usize,
    pub progress_pct: u32,
    pub prompt: String,
    pub description: String,
    pub options: Vec<OptionView>,
    pub can_advance: bool,
    pub advance_label: &'static str,
}

/// Percentage display for one archetype quadrant.
#[derive(Debug, Clone, Serialize)]
pub struct QuadrantView {
    pub archetype: Archetype,
    pub title: &'static str,
    pub element_id: &'static str,
    pub displayed_pct: u32,
    pub target_pct: u32,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactFormView {
    pub contact: ContactDetails,
    pub submitting: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub quadrants: Vec<QuadrantView>,
    pub dominant_archetypes: Vec<Archetype>,
    pub archetype_key: String,
    pub title: &'static str,
    pub description: &'static str,
    pub contact_toggle_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_form: Option<ContactFormView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

/// Project the session onto a view. Pure; scores are recomputed on every call.
pub fn render(session: &ArchetypeSession) -> ArchetypeView {
    match session.screen() {
        Screen::Intro => ArchetypeView::Intro(IntroView {
            intake: session.intake().clone(),
            notice: session.intake_notice(),
        }),
        Screen::Question(index) => render_question(session, index),
        Screen::Results => render_results(session),
    }
}

fn render_question(session: &ArchetypeSession, index: usize) -> ArchetypeView {
    let catalog = session.engine().catalog();
    let total = catalog.len();
    let Some(question) = catalog.get(index) else {
        return ArchetypeView::Intro(IntroView {
            intake: session.intake().clone(),
            notice: None,
        });
    };
    let selected = session.answers().get(&question.id);

    ArchetypeView::Question(QuestionView {
        id: question.id.clone(),
        number: index + 1,
        total,
        progress_pct: (((index + 1) as f64 / total as f64) * 100.0).round() as u32,
        prompt: question.prompt.clone(),
        description: question.description.clone(),
        options: question
            .options
            .iter()
            .map(|option| OptionView {
                value: option.value.clone(),
                label: option.label.clone(),
                selected: selected == Some(option.value.as_str()),
            })
            .collect(),
        can_advance: session.can_advance(),
        advance_label: if index + 1 == total {
            "See Results"
        } else {
            "Next"
        },
    })
}

fn render_results(session: &ArchetypeSession) -> ArchetypeView {
    let result = session.evaluate();
    let displayed = session.displayed_scores();

    let quadrants = Archetype::ALL
        .iter()
        .map(|tag| {
            let target_pct = result.percentages.get(tag).copied().unwrap_or_default();
            QuadrantView {
                archetype: *tag,
                title: tag.label(),
                element_id: tag.score_element_id(),
                displayed_pct: displayed.get(tag).copied().unwrap_or_default(),
                target_pct,
                active: target_pct > 0,
            }
        })
        .collect();

    let contact_form = session.contact_form_open().then(|| ContactFormView {
        contact: session.contact().clone(),
        submitting: session.submission_in_flight(),
    });

    ArchetypeView::Results(ResultsView {
        quadrants,
        archetype_key: result.archetype_key.to_string(),
        dominant_archetypes: result.dominant_archetypes,
        title: result.title,
        description: result.description,
        contact_toggle_label: if session.contact_form_open() {
            "Hide Contact Form"
        } else {
            "Talk To Us"
        },
        contact_form,
        notification: session.notification().cloned(),
    })
}
