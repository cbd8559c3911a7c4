//! Ten-question partnership archetype assessment.

pub mod catalog;
pub mod domain;
pub mod scoring;
pub mod session;
pub mod share;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{ArchetypeCatalog, CatalogError};
pub use domain::{
    AnswerOption, AnswerSet, Archetype, ContactDetails, ContactField, IntakeDetails, IntakeField,
    Question, ScoreVector,
};
pub use scoring::{
    classify, compute_score, resolve_description_key, ArchetypeEngine, ArchetypeResult,
    Description, DescriptionKey,
};
pub use session::{ArchetypeSession, Screen};
pub use share::{ShareLinkError, SharedResult};
pub use views::{render, ArchetypeView};
