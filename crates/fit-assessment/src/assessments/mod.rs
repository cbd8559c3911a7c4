//! Self-assessment flows: the partnership archetype questionnaire and the
//! brand compass teaser, with shared reveal and contact submission plumbing.

pub mod archetype;
pub mod compass;
pub mod reveal;
pub mod router;
pub mod service;
pub mod submission;

pub use reveal::{RevealFrame, ScoreReveal};
pub use router::assessment_router;
pub use service::{
    ArchetypeContactRequest, ArchetypeResultsRequest, AssessmentService, AssessmentServiceError,
    CompassContactRequest, CompassResultsRequest,
};
pub use submission::{
    ContactNotice, Notification, NotificationKind, PendingSubmission, SubmissionResolution,
    SubmissionTicket,
};
