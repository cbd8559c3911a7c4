use std::collections::HashSet;

use super::domain::{AnswerOption, Archetype, Question};

/// Validation errors raised while assembling a question catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no questions")]
    Empty,
    #[error("question id '{0}' appears more than once")]
    DuplicateQuestion(String),
    #[error("question '{0}' has no answer options")]
    NoOptions(String),
    #[error("question '{question}' repeats option value '{value}'")]
    DuplicateOption { question: String, value: String },
}

/// Ordered, validated list of archetype questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeCatalog {
    questions: Vec<Question>,
}

impl ArchetypeCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.id.clone()));
            }
            let mut values = HashSet::new();
            for option in &question.options {
                if !values.insert(option.value.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        question: question.id.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    /// The ten-question FIT partnership catalog.
    pub fn standard() -> Self {
        Self {
            questions: STANDARD_QUESTIONS
                .iter()
                .map(|(id, prompt, description, options)| Question {
                    id: (*id).to_string(),
                    prompt: (*prompt).to_string(),
                    description: (*description).to_string(),
                    options: options
                        .iter()
                        .map(|(value, label, archetype)| AnswerOption {
                            value: (*value).to_string(),
                            label: (*label).to_string(),
                            archetype: *archetype,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for ArchetypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

type OptionSeed = (&'static str, &'static str, Archetype);
type QuestionSeed = (&'static str, &'static str, &'static str, [OptionSeed; 4]);

use Archetype::{Accelerator, Architect, Entrepreneur, Visionary};

const STANDARD_QUESTIONS: [QuestionSeed; 10] = [
    (
        "timeline",
        "Timeline & Success Definition",
        "When do you consider a project successful?",
        [
            ("strategic", "When our strategic objectives are met", Architect),
            (
                "breakthrough",
                "When we achieve authentic breakthrough/ when our industry recognizes our value",
                Visionary,
            ),
            ("kpis", "When we hit measurable KPIs", Accelerator),
            (
                "quickWins",
                "Quick wins while we scale/ when our revenue increases",
                Entrepreneur,
            ),
        ],
    ),
    (
        "decisionMaking",
        "Decision-Making Authority",
        "How are decisions typically made?",
        [
            ("formal", "Board/committee approval/ formal process", Architect),
            (
                "vision",
                "I decide based on creative vision/ quality of ideas",
                Visionary,
            ),
            ("data", "Data justifies each decision", Accelerator),
            ("quick", "My call/ quick team consensus", Entrepreneur),
        ],
    ),
    (
        "innovation",
        "Innovation & Risk Approach",
        "How do you approach new ideas and risk?",
        [
            (
                "proven",
                "Proven strategies with careful testing/ risk mitigation",
                Architect,
            ),
            (
                "breakthrough",
                "Love breakthrough creative/ willing to be first",
                Visionary,
            ),
            (
                "test",
                "Test small, scale proven winners/ measured experimentation",
                Accelerator,
            ),
            ("fast", "Move fast, fail cheap", Entrepreneur),
        ],
    ),
    (
        "partnership",
        "Proactive Partnership Expectations",
        "What do you expect from agency partners?",
        [
            (
                "strategic",
                "Ongoing strategic recommendations/ regular strategic insights",
                Architect,
            ),
            (
                "creative",
                "Constant creative inspiration/ proactive breakthrough opportunities",
                Visionary,
            ),
            (
                "optimization",
                "Proactive performance optimization ideas/ efficiency improvements",
                Accelerator,
            ),
            (
                "growth",
                "Growth tactics/whatever helps us move faster",
                Entrepreneur,
            ),
        ],
    ),
    (
        "budget",
        "Budget Philosophy & Flexibility",
        "How do you approach budget allocation?",
        [
            (
                "planned",
                "Annual strategic allocation/ planned budget categories only",
                Architect,
            ),
            (
                "bigIdeas",
                "Invest in big ideas/ we're flexible for the right opportunities",
                Visionary,
            ),
            (
                "performance",
                "Performance-justified spend/ we allocate based on results",
                Accelerator,
            ),
            (
                "scale",
                "Test budgets that scale/double down on what works",
                Entrepreneur,
            ),
        ],
    ),
    (
        "creative",
        "Creative Boundaries & Brand Guidelines",
        "How important are brand guidelines?",
        [
            ("compliance", "Brand compliance/consistency is critical", Architect),
            (
                "push",
                "Push creative boundaries/ be authentic to our brand and culture",
                Visionary,
            ),
            (
                "conversion",
                "Creative focused on conversion/ performance-driven creativity",
                Accelerator,
            ),
            ("works", "Whatever works/ respond to the market", Entrepreneur),
        ],
    ),
    (
        "communication",
        "Communication & Reporting Style",
        "How do you prefer to communicate with partners?",
        [
            (
                "formal",
                "Formal reports and reviews/ documented progress",
                Architect,
            ),
            (
                "creative",
                "Creative journey sharing/ collaborative check-ins",
                Visionary,
            ),
            (
                "dashboards",
                "Performance dashboards/ optimization reports",
                Accelerator,
            ),
            ("quick", "Quick updates/ real-time communication", Entrepreneur),
        ],
    ),
    (
        "competitive",
        "Competitive Urgency & Market Pressure",
        "What drives your competitive strategy?",
        [
            (
                "positioning",
                "Strategic market positioning/ competitive differentiation",
                Architect,
            ),
            (
                "cultural",
                "Cultural relevance/ authentic brand evolution",
                Visionary,
            ),
            (
                "metrics",
                "Measurable market share gains/ clear competitive metrics",
                Accelerator,
            ),
            ("window", "Market window closing/ competitor threat", Entrepreneur),
        ],
    ),
    (
        "agencyIdeas",
        "Agency Ideas & Initiative",
        "What kind of ideas do you value from agencies?",
        [
            (
                "strategic",
                "Strategic counsel with proven approaches/ thoughtful recommendations",
                Architect,
            ),
            (
                "breakthrough",
                "Challenge us creatively/ bring breakthrough ideas",
                Visionary,
            ),
            (
                "optimization",
                "Optimization ideas and efficiency improvements/ data-backed recommendations",
                Accelerator,
            ),
            (
                "results",
                "Whatever drives results/ growth-focused ideas",
                Entrepreneur,
            ),
        ],
    ),
    (
        "pastLessons",
        "Past Agency Relationship Lessons",
        "What have been pain points with past agencies?",
        [
            ("process", "Process failures/ lack of strategic insight", Architect),
            (
                "mediocrity",
                "Creative mediocrity/ failure to understand you",
                Visionary,
            ),
            (
                "performance",
                "Performance gaps/ missing transparency",
                Accelerator,
            ),
            ("slow", "Slowness and rigidity", Entrepreneur),
        ],
    ),
];
