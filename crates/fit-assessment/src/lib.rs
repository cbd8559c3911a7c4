//! Partnership-fit self-assessments: scoring, session state, share links and
//! webhook delivery of contact submissions.

pub mod assessments;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod transport;

pub use assessments::assessment_router;
pub use error::AppError;
