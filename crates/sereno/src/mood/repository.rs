use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{MoodEntry, MoodEntryId, UserId};

/// Append-only storage for per-user mood history.
pub trait MoodHistoryRepository: Send + Sync {
    fn append(&self, entry: MoodEntry) -> Result<MoodEntry, RepositoryError>;
    /// Most recent entries first, at most `limit` of them.
    fn history(&self, user: &UserId, limit: usize) -> Result<Vec<MoodEntry>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("mood entry already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook observed by emergency follow-up workflows.
pub trait RiskAlertPublisher: Send + Sync {
    fn publish(&self, alert: RiskAlert) -> Result<(), AlertError>;
}

/// Alert payload raised for high-risk submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAlert {
    pub template: String,
    pub user_id: UserId,
    pub entry_id: MoodEntryId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}
