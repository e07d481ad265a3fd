//! Mood tracking and risk assessment.
//!
//! Submissions pass through the [`SubmissionGuard`], are classified by the
//! stateless [`MoodAssessmentEngine`], and land in an append-only per-user
//! history. High-risk results are surfaced to a [`RiskAlertPublisher`] so
//! emergency follow-up can react; the engine itself never dispatches anything.

pub mod assessment;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod trends;
pub mod validation;

#[cfg(test)]
mod tests;

pub use assessment::{Lexicon, MoodAssessmentEngine};
pub use domain::{
    EmotionConsistency, MoodAnalysisResult, MoodEntry, MoodEntryId, MoodSubmission, RiskLevel,
    SelectedEmotion, Sentiment, UserId, ValidatedSubmission,
};
pub use repository::{
    AlertError, MoodHistoryRepository, RepositoryError, RiskAlert, RiskAlertPublisher,
};
pub use router::mood_router;
pub use service::{MoodAssessmentService, MoodServiceError, HIGH_RISK_ALERT_TEMPLATE};
pub use trends::MoodTrendSummary;
pub use validation::{FieldError, SubmissionGuard, ValidationError};
