use serde::Serialize;

use super::catalog::CompassCatalog;
use super::domain::{AttributeScore, CompassAnswers};

/// Map every catalog attribute through the ordinal percentage table.
pub fn compute_attribute_scores(
    answers: &CompassAnswers,
    catalog: &CompassCatalog,
) -> Vec<AttributeScore> {
    catalog
        .questions()
        .iter()
        .map(|question| AttributeScore {
            id: question.id.clone(),
            name: question.name.clone(),
            score: answers.get(&question.id).percentage(),
        })
        .collect()
}

/// Mean of the attribute percentages, halves rounded up.
pub fn compute_average(scores: &[AttributeScore]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let total: u64 = scores.iter().map(|entry| u64::from(entry.score)).sum();
    let count = scores.len() as u64;
    ((total * 2 + count) / (count * 2)) as u32
}

/// Average-score bands, each closed at the low end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Foundational,
    Emerging,
    Baseline,
    Solid,
    Strong,
    Exceptional,
}

impl ScoreBand {
    pub fn from_average(average: u32) -> Self {
        match average {
            0..=44 => ScoreBand::Foundational,
            45..=59 => ScoreBand::Emerging,
            60..=69 => ScoreBand::Baseline,
            70..=74 => ScoreBand::Solid,
            75..=89 => ScoreBand::Strong,
            _ => ScoreBand::Exceptional,
        }
    }

    /// Bands below 70 call out the weakest attributes by name.
    pub const fn names_weakest(self) -> bool {
        matches!(
            self,
            ScoreBand::Foundational | ScoreBand::Emerging | ScoreBand::Baseline
        )
    }
}

/// Names of the three lowest-scoring attributes, catalog order on ties.
pub fn lowest_three(scores: &[AttributeScore]) -> Vec<&str> {
    let mut ranked: Vec<&AttributeScore> = scores.iter().collect();
    ranked.sort_by_key(|entry| entry.score);
    ranked
        .into_iter()
        .take(3)
        .map(|entry| entry.name.as_str())
        .collect()
}

pub fn describe(average: u32, scores: &[AttributeScore]) -> String {
    let weakest = lowest_three(scores);
    let name = |index: usize| weakest.get(index).copied().unwrap_or_default();
    let (first, second, third) = (name(0), name(1), name(2));

    match ScoreBand::from_average(average) {
        ScoreBand::Foundational => format!(
            "Your brand requires comprehensive strategic and execution improvements to develop consciousness and compete effectively. The assessment shows significant challenges in {first}, {second}, and {third}, among other areas. This presents both a challenge and a tremendous opportunity for transformation. We strongly recommend a follow-up conversation to understand your brand's current state, business objectives, and develop a structured plan to build the foundational capabilities needed for conscious brand leadership."
        ),
        ScoreBand::Emerging => format!(
            "Your brand shows awareness and potential, but strategic improvements are needed across multiple attributes to reach full consciousness. The assessment highlights challenges particularly in {first}, {second}, and {third}. Addressing these foundational gaps will be critical to your brand's growth and market impact. Let's schedule a conversation to explore how we can help you develop a comprehensive transformation roadmap and prioritize the initiatives that will deliver the greatest impact."
        ),
        ScoreBand::Baseline => format!(
            "Your brand has established a baseline of consciousness, but there are clear opportunities for enhancement. Your assessment reveals particular gaps in {first}, {second}, and {third}. These areas represent significant opportunities to strengthen your brand's market position and effectiveness. We recommend a follow-up conversation to develop a targeted strategy for improving these critical attributes and accelerating your brand's conscious evolution."
        ),
        ScoreBand::Solid => "Solid baseline! Your brand has established consciousness standards with clear opportunities for enhancement across several attributes. To identify exactly where to focus your efforts for maximum impact, we recommend Antenna Group's comprehensive Brand Consciousness Assessment. This detailed evaluation across owned, earned, paid, and social channels will reveal specific gaps and opportunities, providing you with a data-driven roadmap to accelerate your brand's evolution and competitive positioning.".to_string(),
        ScoreBand::Strong => "Strong performance! Your brand shows high consciousness with solid execution across most attributes. You're well-positioned to lead in your market. To further optimize your brand strategy and identify specific opportunities for enhancement, consider Antenna Group's comprehensive Brand Consciousness Assessment. For a modest investment, you'll receive deep analysis across multiple channels including owned, earned, paid, and social media, plus detailed benchmarking and recommendations to elevate your brand to exceptional status.".to_string(),
        ScoreBand::Exceptional => "Exceptional! Your brand demonstrates exemplary consciousness across all attributes with authentic, data-driven, creative execution at the highest level. To gain even deeper insights and validate these strong results, we encourage you to explore Antenna Group's comprehensive Brand Consciousness Assessment. This detailed analysis evaluates your brand across owned, earned, paid, and social channels, providing external validation and actionable intelligence to maintain your competitive edge.".to_string(),
    }
}

/// Stateless evaluator for slider answers.
#[derive(Debug, Clone, Default)]
pub struct CompassEngine {
    catalog: CompassCatalog,
}

impl CompassEngine {
    pub fn new(catalog: CompassCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CompassCatalog {
        &self.catalog
    }

    pub fn evaluate(&self, answers: &CompassAnswers) -> CompassResult {
        let attribute_scores = compute_attribute_scores(answers, &self.catalog);
        let average = compute_average(&attribute_scores);
        let description = describe(average, &attribute_scores);

        CompassResult {
            average,
            band: ScoreBand::from_average(average),
            attribute_scores,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompassResult {
    pub average: u32,
    pub band: ScoreBand,
    pub attribute_scores: Vec<AttributeScore>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::compass::domain::Ordinal;

    fn ordinal(value: u8) -> Ordinal {
        Ordinal::new(value).expect("valid ordinal")
    }

    #[test]
    fn untouched_sliders_average_sixty() {
        let engine = CompassEngine::default();
        let result = engine.evaluate(&CompassAnswers::new());

        assert_eq!(result.attribute_scores.len(), 8);
        assert!(result.attribute_scores.iter().all(|entry| entry.score == 60));
        assert_eq!(result.average, 60);
        assert_eq!(result.band, ScoreBand::Baseline);
        assert!(result
            .description
            .contains("particular gaps in Awake, Aware, and Reflective"));
    }

    #[test]
    fn band_edges_are_closed_at_the_low_end() {
        assert_eq!(ScoreBand::from_average(44), ScoreBand::Foundational);
        assert_eq!(ScoreBand::from_average(45), ScoreBand::Emerging);
        assert_eq!(ScoreBand::from_average(59), ScoreBand::Emerging);
        assert_eq!(ScoreBand::from_average(60), ScoreBand::Baseline);
        assert_eq!(ScoreBand::from_average(70), ScoreBand::Solid);
        assert_eq!(ScoreBand::from_average(75), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_average(89), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_average(90), ScoreBand::Exceptional);
        assert_eq!(ScoreBand::from_average(100), ScoreBand::Exceptional);
    }

    #[test]
    fn average_rounds_half_up() {
        let scores: Vec<AttributeScore> = [15, 40]
            .iter()
            .enumerate()
            .map(|(index, score)| AttributeScore {
                id: format!("a{index}"),
                name: format!("A{index}"),
                score: *score,
            })
            .collect();
        // 55 / 2 = 27.5
        assert_eq!(compute_average(&scores), 28);
        assert_eq!(compute_average(&[]), 0);
    }

    #[test]
    fn weakest_attributes_follow_score_then_catalog_order() {
        let answers: CompassAnswers = [
            ("awake", ordinal(5)),
            ("aware", ordinal(2)),
            ("reflective", ordinal(1)),
            ("attentive", ordinal(2)),
            ("cogent", ordinal(2)),
        ]
        .into_iter()
        .collect();
        let scores = compute_attribute_scores(&answers, &CompassCatalog::standard());

        assert_eq!(lowest_three(&scores), vec!["Reflective", "Aware", "Attentive"]);
    }

    #[test]
    fn high_bands_do_not_name_attributes() {
        let answers: CompassAnswers = CompassCatalog::standard()
            .questions()
            .iter()
            .map(|question| (question.id.clone(), ordinal(5)))
            .collect();
        let result = CompassEngine::default().evaluate(&answers);

        assert_eq!(result.average, 100);
        assert_eq!(result.band, ScoreBand::Exceptional);
        assert!(!result.band.names_weakest());
        assert!(result.description.starts_with("Exceptional!"));
        assert!(!result.description.contains("Awake"));
    }

    #[test]
    fn low_scores_land_in_foundational_band() {
        let answers: CompassAnswers = CompassCatalog::standard()
            .questions()
            .iter()
            .map(|question| (question.id.clone(), ordinal(2)))
            .collect();
        let result = CompassEngine::default().evaluate(&answers);

        assert_eq!(result.average, 40);
        assert_eq!(result.band, ScoreBand::Foundational);
        assert!(result.description.contains("Awake, Aware, and Reflective, among other areas"));
    }
}
