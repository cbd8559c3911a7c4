//! Eight-attribute brand compass teaser driven by 1-5 sliders.

pub mod catalog;
pub mod domain;
pub mod scoring;
pub mod session;
pub mod views;

pub use catalog::CompassCatalog;
pub use domain::{
    AttributeScore, CompassAnswers, CompassContact, CompassContactField, CompassQuestion, Ordinal,
    OrdinalError,
};
pub use scoring::{CompassEngine, CompassResult, ScoreBand};
pub use session::{CompassSession, RatingError};
pub use views::{render, CompassView};
