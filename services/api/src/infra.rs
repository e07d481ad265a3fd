use metrics_exporter_prometheus::PrometheusHandle;
use sereno::mood::{
    AlertError, MoodEntry, MoodHistoryRepository, RepositoryError, RiskAlert, RiskAlertPublisher,
    UserId,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryMoodHistory {
    entries: Arc<Mutex<HashMap<UserId, Vec<MoodEntry>>>>,
}

impl MoodHistoryRepository for InMemoryMoodHistory {
    fn append(&self, entry: MoodEntry) -> Result<MoodEntry, RepositoryError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Unavailable("history mutex poisoned".to_string()))?;
        let entries = guard.entry(entry.user_id.clone()).or_default();
        if entries.iter().any(|known| known.id == entry.id) {
            return Err(RepositoryError::Conflict);
        }
        entries.push(entry.clone());
        Ok(entry)
    }

    fn history(&self, user: &UserId, limit: usize) -> Result<Vec<MoodEntry>, RepositoryError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Unavailable("history mutex poisoned".to_string()))?;
        Ok(guard
            .get(user)
            .map(|entries| entries.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

/// Publisher that records alerts and logs them until a paging adapter exists.
#[derive(Default, Clone)]
pub(crate) struct LoggingAlertPublisher {
    events: Arc<Mutex<Vec<RiskAlert>>>,
}

impl RiskAlertPublisher for LoggingAlertPublisher {
    fn publish(&self, alert: RiskAlert) -> Result<(), AlertError> {
        warn!(
            template = %alert.template,
            user_id = %alert.user_id.0,
            entry_id = %alert.entry_id.0,
            "risk alert raised"
        );
        let mut guard = self
            .events
            .lock()
            .map_err(|_| AlertError::Transport("alert mutex poisoned".to_string()))?;
        guard.push(alert);
        Ok(())
    }
}

impl LoggingAlertPublisher {
    #[cfg(test)]
    pub(crate) fn events(&self) -> Vec<RiskAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}
