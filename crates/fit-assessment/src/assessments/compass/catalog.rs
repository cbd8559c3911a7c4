use super::domain::CompassQuestion;

/// Ordered brand-consciousness attributes rated on the compass sliders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompassCatalog {
    questions: Vec<CompassQuestion>,
}

impl CompassCatalog {
    pub fn new(questions: Vec<CompassQuestion>) -> Self {
        Self { questions }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_ATTRIBUTES
                .iter()
                .map(|(id, name, prompt, labels)| CompassQuestion {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                    prompt: (*prompt).to_string(),
                    labels: labels.map(str::to_string),
                })
                .collect(),
        )
    }

    pub fn questions(&self) -> &[CompassQuestion] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&CompassQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for CompassCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

type AttributeSeed = (&'static str, &'static str, &'static str, [&'static str; 5]);

const STANDARD_ATTRIBUTES: [AttributeSeed; 8] = [
    (
        "awake",
        "Awake",
        "How effectively does your brand influence industry conversations?",
        [
            "No influence",
            "Rarely cited",
            "Some presence",
            "Regular voice",
            "Industry leader",
        ],
    ),
    (
        "aware",
        "Aware",
        "How deeply does your brand understand and build trust with audiences?",
        [
            "Disconnected",
            "Basic awareness",
            "Adequate trust",
            "Strong connection",
            "Deeply trusted",
        ],
    ),
    (
        "reflective",
        "Reflective",
        "How authentic is your brand promise when compared to reality?",
        [
            "Inauthentic",
            "Gaps exist",
            "Mostly aligned",
            "Strong alignment",
            "Fully authentic",
        ],
    ),
    (
        "attentive",
        "Attentive",
        "How exceptional is the quality of your content and brand experience?",
        [
            "Poor quality",
            "Inconsistent",
            "Adequate",
            "High quality",
            "Flawless",
        ],
    ),
    (
        "cogent",
        "Cogent",
        "How targeted is your brand for your audiences and channels?",
        [
            "No segmentation",
            "Limited targeting",
            "Some targeting",
            "Effective targeting",
            "Ongoing optimization",
        ],
    ),
    (
        "sentient",
        "Sentient",
        "How effectively does your brand's creative inspire action among your target audience?",
        [
            "No creative",
            "It's ineffective",
            "Could be better",
            "It's adequate",
            "Award winning",
        ],
    ),
    (
        "visionary",
        "Visionary",
        "How clear is your future vision, and how visible is your momentum?",
        [
            "No vision",
            "Vague direction",
            "Some clarity",
            "Clear vision",
            "It's inspiring audiences",
        ],
    ),
    (
        "intentional",
        "Intentional",
        "What is the perception of the credibility of your leadership team?",
        ["Weak", "Uncertain", "Adequate", "Strong", "Exceptional"],
    ),
];
