use std::fmt;

use serde::{Serialize, Serializer};

use super::super::domain::Archetype;

/// Title and body copy shown for a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Description {
    pub title: &'static str,
    pub body: &'static str,
}

/// Lookup key into the description table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionKey {
    Single(Archetype),
    /// Two archetypes, stored in lexicographic order of their tags.
    Blend(Archetype, Archetype),
    Multiple,
}

impl DescriptionKey {
    pub fn blend(first: Archetype, second: Archetype) -> Self {
        if first.as_str() <= second.as_str() {
            Self::Blend(first, second)
        } else {
            Self::Blend(second, first)
        }
    }

    pub fn description(&self) -> Option<&'static Description> {
        lookup(&self.to_string())
    }
}

impl fmt::Display for DescriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionKey::Single(tag) => f.write_str(tag.as_str()),
            DescriptionKey::Blend(first, second) => write!(f, "{first}-{second}"),
            DescriptionKey::Multiple => f.write_str(MULTIPLE_KEY),
        }
    }
}

impl Serialize for DescriptionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const MULTIPLE_KEY: &str = "multiple";

/// Map a dominant-archetype list to its description key.
///
/// Blends missing from the table resolve to [`DescriptionKey::Multiple`].
pub fn resolve_description_key(dominants: &[Archetype]) -> DescriptionKey {
    debug_assert!(
        !dominants.is_empty(),
        "classification always yields at least one archetype"
    );

    match dominants {
        [single] => DescriptionKey::Single(*single),
        [first, second] => {
            let key = DescriptionKey::blend(*first, *second);
            if key.description().is_some() {
                key
            } else {
                DescriptionKey::Multiple
            }
        }
        _ => DescriptionKey::Multiple,
    }
}

/// Resolve a key to copy, falling back to the mixed-expectations entry.
pub fn describe(key: &DescriptionKey) -> &'static Description {
    key.description().unwrap_or(&MULTIPLE)
}

pub fn lookup(key: &str) -> Option<&'static Description> {
    DESCRIPTIONS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, description)| description)
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    DESCRIPTIONS.iter().map(|(key, _)| *key)
}

const MULTIPLE: Description = Description {
    title: "MIXED EXPECTATIONS",
    body: "Your results reveal evenly distributed priorities across three or more distinct archetypes, each representing fundamentally different partnership expectations. The Architect values systematic planning and formal processes, while the Visionary seeks bold creative risks. The Accelerator demands data-driven performance and rapid optimization, whereas the Entrepreneur prioritizes flexible, adaptive execution. These perspectives can sometimes pull in contradictory directions. We recommend a deeper conversation to explore how these different expectations might be prioritized, sequenced, or balanced based on your specific business context and current challenges. Let's discuss which approach should lead at different stages of our partnership.",
};

static DESCRIPTIONS: [(&str, Description); 11] = [
    (
        "architect",
        Description {
            title: "ARCHITECT",
            body: "You are a strategic leader who values systematic approaches and long-term brand building. You prefer formal processes, detailed planning, and stakeholder alignment. Success means achieving your strategic objectives through proven methodologies. You see value in consultative partnerships that integrate seamlessly with your corporate structures and deliver measurable brand impact over time.",
        },
    ),
    (
        "visionary",
        Description {
            title: "VISIONARY",
            body: "You are a creative innovator who prioritizes authentic brand expression, craft, and cultural impact. You thrive on collaborative partnerships that push creative boundaries and challenge conventional thinking. Success means breakthrough ideas that differentiate your brand. You value agencies that bring bold inspiration, understand your mission, and aren't afraid to take creative risks to cut through the noise.",
        },
    ),
    (
        "accelerator",
        Description {
            title: "ACCELERATOR",
            body: "You are a performance-focused manager who demands measurable results and operational efficiency. You prefer data-driven partnerships with transparent reporting and continuous optimization. Success means hitting specific KPIs within 90 days. You value agencies that deliver proven tactics, provide real-time performance insights, and consistently improve ROI through systematic testing and refinement.",
        },
    ),
    (
        "entrepreneur",
        Description {
            title: "ENTREPRENEUR",
            body: "You are a fast-moving business builder who needs flexible, responsive partnerships that adapt to changing priorities. You prefer action-oriented collaboration with quick wins and iterative learning. Success means rapid business growth and market opportunity capture. You value agencies that move at your pace, maximize limited resources, and bring growth-focused ideas.",
        },
    ),
    (
        "accelerator-architect",
        Description {
            title: "ARCHITECT & ACCELERATOR",
            body: "You are a strategic optimizer who values systematic approaches backed by measurable outcomes. You prefer formal processes and detailed planning that deliver demonstrable results and continuous improvement. Success means achieving your strategic objectives through data-driven methodologies and proven tactics. You see value in consultative partnerships that provide both long-term brand building and real-time performance insights, integrating seamlessly with your corporate structures while consistently improving ROI.",
        },
    ),
    (
        "accelerator-entrepreneur",
        Description {
            title: "ACCELERATOR & ENTREPRENEUR",
            body: "You are a growth-focused optimizer who demands measurable results with maximum speed and flexibility. You prefer data-driven approaches that adapt quickly to changing priorities and deliver rapid wins. Success means hitting specific KPIs while capturing market opportunities through iterative learning. You value partnerships that bring both proven performance tactics and nimble execution, providing real-time insights while moving at your pace to consistently improve ROI and drive business growth.",
        },
    ),
    (
        "accelerator-visionary",
        Description {
            title: "VISIONARY & ACCELERATOR",
            body: "You are a performance-driven creative who demands breakthrough ideas that deliver measurable results. You thrive on bold innovation grounded in data and continuous optimization. Success means creative differentiation that hits specific KPIs and drives tangible business outcomes. You value partnerships that bring both creative inspiration and performance rigor, challenging conventions while providing transparent reporting and systematically improving ROI through testing and refinement.",
        },
    ),
    (
        "architect-entrepreneur",
        Description {
            title: "ARCHITECT & ENTREPRENEUR",
            body: "You are a strategic builder who balances systematic planning with adaptive execution. You value formal processes that can flex to capture emerging opportunities without sacrificing long-term objectives. Success means achieving your strategic goals while maintaining the agility to pivot when market conditions change. You seek consultative partnerships that bring both proven methodologies and growth-focused ideas, delivering measurable brand impact while moving at the pace your business demands.",
        },
    ),
    (
        "architect-visionary",
        Description {
            title: "ARCHITECT & VISIONARY",
            body: "You are a strategic creative who combines systematic thinking with bold vision. You value long-term brand building through innovative approaches that challenge conventions while maintaining structural integrity. Success means achieving breakthrough ideas that are grounded in proven methodologies and stakeholder alignment. You seek consultative partnerships that bring both strategic rigor and creative inspiration, integrating seamlessly with your corporate structures while pushing boundaries to deliver differentiated brand impact over time.",
        },
    ),
    (
        "entrepreneur-visionary",
        Description {
            title: "VISIONARY & ENTREPRENEUR",
            body: "You are an agile innovator who combines creative vision with rapid execution. You thrive on breakthrough ideas that can be quickly tested, learned from, and scaled. Success means authentic brand differentiation achieved through fast-moving, iterative collaboration. You value partnerships that bring bold creative inspiration and growth-focused agility, understanding your mission while moving at your pace to capture market opportunities and maximize impact with available resources.",
        },
    ),
    (MULTIPLE_KEY, MULTIPLE),
];
