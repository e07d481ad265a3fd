use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use super::assessment::MoodAssessmentEngine;
use super::domain::{
    MoodAnalysisResult, MoodEntry, MoodEntryId, MoodSubmission, RiskLevel, UserId,
};
use super::repository::{
    AlertError, MoodHistoryRepository, RepositoryError, RiskAlert, RiskAlertPublisher,
};
use super::trends::MoodTrendSummary;
use super::validation::{SubmissionGuard, ValidationError};
use crate::config::AssessmentConfig;

pub const HIGH_RISK_ALERT_TEMPLATE: &str = "mood_high_risk";

/// Service composing the submission guard, assessment engine, history, and alerts.
pub struct MoodAssessmentService<R, A> {
    guard: Arc<SubmissionGuard>,
    engine: Arc<MoodAssessmentEngine>,
    repository: Arc<R>,
    alerts: Arc<A>,
    history_limit: usize,
}

static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_entry_id() -> MoodEntryId {
    let id = ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    MoodEntryId(format!("mood-{id:06}"))
}

impl<R, A> MoodAssessmentService<R, A>
where
    R: MoodHistoryRepository + 'static,
    A: RiskAlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>, config: AssessmentConfig) -> Self {
        Self::with_engine(MoodAssessmentEngine::default(), repository, alerts, config)
    }

    pub fn with_engine(
        engine: MoodAssessmentEngine,
        repository: Arc<R>,
        alerts: Arc<A>,
        config: AssessmentConfig,
    ) -> Self {
        Self {
            guard: Arc::new(SubmissionGuard::from_config(&config)),
            engine: Arc::new(engine),
            repository,
            alerts,
            history_limit: config.history_limit,
        }
    }

    /// Analyze a submission without storing it.
    pub fn analyze(
        &self,
        submission: MoodSubmission,
    ) -> Result<MoodAnalysisResult, MoodServiceError> {
        let validated = self.guard.validate(submission)?;
        Ok(self.engine.analyze(&validated))
    }

    /// Analyze a submission and append it to the user's history.
    pub fn assess(
        &self,
        user_id: UserId,
        submission: MoodSubmission,
    ) -> Result<MoodEntry, MoodServiceError> {
        let validated = self.guard.validate(submission)?;
        let analysis_result = self.engine.analyze(&validated);

        let entry = MoodEntry {
            id: next_entry_id(),
            user_id,
            submission: validated.into_submission(),
            analysis_result,
            recorded_at: Utc::now(),
        };

        let stored = self.repository.append(entry)?;
        info!(
            entry_id = %stored.id.0,
            risk = %stored.analysis_result.risk_level,
            sentiment = %stored.analysis_result.overall_sentiment,
            "mood assessment recorded"
        );

        if stored.analysis_result.risk_level == RiskLevel::High {
            if let Err(err) = self.raise_alert(&stored) {
                error!(entry_id = %stored.id.0, error = %err, "failed to publish high risk alert");
            }
        }

        Ok(stored)
    }

    /// Most recent entries first; `limit` is capped at the configured history limit.
    pub fn history(
        &self,
        user_id: &UserId,
        limit: Option<usize>,
    ) -> Result<Vec<MoodEntry>, MoodServiceError> {
        let limit = limit.map_or(self.history_limit, |limit| limit.min(self.history_limit));
        Ok(self.repository.history(user_id, limit)?)
    }

    pub fn trends(&self, user_id: &UserId) -> Result<MoodTrendSummary, MoodServiceError> {
        let entries = self.repository.history(user_id, usize::MAX)?;
        Ok(MoodTrendSummary::from_entries(&entries))
    }

    fn raise_alert(&self, entry: &MoodEntry) -> Result<(), AlertError> {
        let mut details = BTreeMap::new();
        details.insert(
            "risk_level".to_string(),
            entry.analysis_result.risk_level.label().to_string(),
        );
        details.insert(
            "recorded_at".to_string(),
            entry.recorded_at.to_rfc3339(),
        );
        if let Some(emotion) = &entry.submission.selected_emotion {
            details.insert("selected_emotion".to_string(), emotion.id.clone());
        }

        warn!(entry_id = %entry.id.0, "high risk mood submission, dispatching alert");
        self.alerts.publish(RiskAlert {
            template: HIGH_RISK_ALERT_TEMPLATE.to_string(),
            user_id: entry.user_id.clone(),
            entry_id: entry.id.clone(),
            details,
        })
    }
}

/// Error raised by the mood assessment service.
#[derive(Debug, thiserror::Error)]
pub enum MoodServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
