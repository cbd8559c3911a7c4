use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Partnership archetype an answer option points toward.
///
/// Declaration order doubles as the tie-break order when scores are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Architect,
    Visionary,
    Accelerator,
    Entrepreneur,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Architect,
        Archetype::Visionary,
        Archetype::Accelerator,
        Archetype::Entrepreneur,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Archetype::Architect => "architect",
            Archetype::Visionary => "visionary",
            Archetype::Accelerator => "accelerator",
            Archetype::Entrepreneur => "entrepreneur",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Archetype::Architect => "ARCHITECT",
            Archetype::Visionary => "VISIONARY",
            Archetype::Accelerator => "ACCELERATOR",
            Archetype::Entrepreneur => "ENTREPRENEUR",
        }
    }

    /// Stable element identifier of the percentage display on the results screen.
    pub const fn score_element_id(self) -> &'static str {
        match self {
            Archetype::Architect => "architect-score",
            Archetype::Visionary => "visionary-score",
            Archetype::Accelerator => "accelerator-score",
            Archetype::Entrepreneur => "entrepreneur-score",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: String,
    pub label: String,
    pub archetype: Archetype,
}

/// Multiple-choice question in the archetype catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub description: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Responses keyed by question id. Values are option values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0
            .get(question_id)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Tally per archetype. Each answered question contributes `0.1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector(BTreeMap<Archetype, f64>);

impl ScoreVector {
    pub fn zeroed() -> Self {
        Self(Archetype::ALL.iter().map(|tag| (*tag, 0.0)).collect())
    }

    /// Build a vector from explicit entries; archetypes not listed stay at zero.
    pub fn from_scores<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Archetype, f64)>,
    {
        let mut scores = Self::zeroed();
        for (tag, score) in entries {
            scores.0.insert(tag, score);
        }
        scores
    }

    pub fn get(&self, tag: Archetype) -> f64 {
        self.0.get(&tag).copied().unwrap_or(0.0)
    }

    pub(crate) fn add(&mut self, tag: Archetype, increment: f64) {
        *self.0.entry(tag).or_insert(0.0) += increment;
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, f64)> + '_ {
        self.0.iter().map(|(tag, score)| (*tag, *score))
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Whole-number percentage per archetype, `round(score * 100)`.
    pub fn percentages(&self) -> BTreeMap<Archetype, u32> {
        self.iter()
            .map(|(tag, score)| (tag, (score * 100.0).round().max(0.0) as u32))
            .collect()
    }
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Respondent details captured on the intro screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeDetails {
    pub name: String,
    pub organization: String,
    pub role: String,
}

impl IntakeDetails {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.organization, &self.role]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Intro screen field addressed by input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeField {
    Name,
    Organization,
    Role,
    Additional,
}

/// Fields of the "talk to us" form on the results screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub organization: String,
    pub email: String,
}

impl ContactDetails {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.organization, &self.email]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Organization,
    Email,
}
