mod descriptions;
mod policy;
mod rules;

pub use descriptions::{
    describe, lookup, resolve_description_key, Description, DescriptionKey, MULTIPLE_KEY,
};
pub use policy::{classify, rank};
pub use rules::{compute_score, ANSWER_INCREMENT};

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::ArchetypeCatalog;
use super::domain::{AnswerSet, Archetype, ScoreVector};

pub(crate) fn description_keys() -> impl Iterator<Item = &'static str> {
    descriptions::keys()
}

/// Stateless evaluator binding the scoring rules to a catalog.
#[derive(Debug, Clone)]
pub struct ArchetypeEngine {
    catalog: ArchetypeCatalog,
}

impl ArchetypeEngine {
    pub fn new(catalog: ArchetypeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ArchetypeCatalog {
        &self.catalog
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> ArchetypeResult {
        let scores = compute_score(answers, &self.catalog);
        ArchetypeResult::from_scores(scores)
    }
}

impl Default for ArchetypeEngine {
    fn default() -> Self {
        Self::new(ArchetypeCatalog::standard())
    }
}

/// Derived classification for a score vector. Never stored, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeResult {
    pub scores: ScoreVector,
    pub percentages: BTreeMap<Archetype, u32>,
    pub dominant_archetypes: Vec<Archetype>,
    pub archetype_key: DescriptionKey,
    pub title: &'static str,
    pub description: &'static str,
}

impl ArchetypeResult {
    pub fn from_scores(scores: ScoreVector) -> Self {
        let dominant_archetypes = classify(&scores);
        let archetype_key = resolve_description_key(&dominant_archetypes);
        let copy = describe(&archetype_key);

        Self {
            percentages: scores.percentages(),
            scores,
            dominant_archetypes,
            archetype_key,
            title: copy.title,
            description: copy.body,
        }
    }
}
