use super::super::catalog::ArchetypeCatalog;
use super::super::domain::{AnswerSet, ScoreVector};

/// Contribution of one answered question to its option's archetype.
pub const ANSWER_INCREMENT: f64 = 0.1;

/// Tally answers against the catalog.
///
/// Unanswered questions and values that match no option contribute nothing.
pub fn compute_score(answers: &AnswerSet, catalog: &ArchetypeCatalog) -> ScoreVector {
    let mut scores = ScoreVector::zeroed();

    for question in catalog.questions() {
        let Some(value) = answers.get(&question.id) else {
            continue;
        };

        match question.option(value) {
            Some(option) => scores.add(option.archetype, ANSWER_INCREMENT),
            None => tracing::debug!(
                question = %question.id,
                value,
                "ignoring answer that matches no option"
            ),
        }
    }

    scores
}
