use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Slider position, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Ordinal(u8);

impl Ordinal {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Starting position of every slider.
    pub const MIDDLE: Ordinal = Ordinal(3);

    pub fn new(value: u8) -> Result<Self, OrdinalError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OrdinalError(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Percentage from the fixed ordinal table.
    pub const fn percentage(self) -> u32 {
        match self.0 {
            1 => 15,
            2 => 40,
            3 => 60,
            4 => 80,
            _ => 100,
        }
    }
}

impl Default for Ordinal {
    fn default() -> Self {
        Self::MIDDLE
    }
}

impl TryFrom<u8> for Ordinal {
    type Error = OrdinalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ordinal> for u8 {
    fn from(value: Ordinal) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slider value {0} is outside 1..=5")]
pub struct OrdinalError(pub u8);

/// Slider question for one brand attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompassQuestion {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub labels: [String; 5],
}

impl CompassQuestion {
    pub fn label(&self, ordinal: Ordinal) -> &str {
        &self.labels[usize::from(ordinal.get() - 1)]
    }
}

/// Slider positions keyed by attribute id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompassAnswers(BTreeMap<String, Ordinal>);

impl CompassAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, attribute_id: impl Into<String>, ordinal: Ordinal) {
        self.0.insert(attribute_id.into(), ordinal);
    }

    /// Position for an attribute; sliders that were never touched sit in the middle.
    pub fn get(&self, attribute_id: &str) -> Ordinal {
        self.0.get(attribute_id).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Ordinal)> {
        self.0.iter().map(|(id, ordinal)| (id.as_str(), *ordinal))
    }

    pub fn to_raw(&self) -> BTreeMap<String, u8> {
        self.0
            .iter()
            .map(|(id, ordinal)| (id.clone(), ordinal.get()))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Ordinal)> for CompassAnswers {
    fn from_iter<I: IntoIterator<Item = (K, Ordinal)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, ordinal)| (id.into(), ordinal)).collect())
    }
}

/// Percentage score for one attribute, carried in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeScore {
    pub id: String,
    pub name: String,
    pub score: u32,
}

/// Contact form fields for the compass results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassContact {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub message: String,
}

impl CompassContact {
    /// Message is optional.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.company]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompassContactField {
    Name,
    Email,
    Company,
    Message,
}
