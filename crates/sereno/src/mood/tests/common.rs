use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::AssessmentConfig;
use crate::mood::domain::{MoodEntry, MoodSubmission, SelectedEmotion, UserId};
use crate::mood::repository::{
    AlertError, MoodHistoryRepository, RepositoryError, RiskAlert, RiskAlertPublisher,
};
use crate::mood::validation::SubmissionGuard;
use crate::mood::{mood_router, MoodAssessmentEngine, MoodAssessmentService, ValidatedSubmission};

pub(super) fn submission(
    id: &str,
    label: &str,
    intensity: i64,
    text: Option<&str>,
) -> MoodSubmission {
    MoodSubmission {
        selected_emotion: Some(SelectedEmotion::new(id, label, intensity)),
        text_description: text.map(str::to_string),
        voice_recording_url: None,
    }
}

pub(super) fn happy_submission() -> MoodSubmission {
    submission(
        "very-happy",
        "Muy feliz",
        5,
        Some("Hoy me siento fantástico, lleno de energía y muy optimista"),
    )
}

pub(super) fn crisis_submission() -> MoodSubmission {
    submission(
        "very-sad",
        "Muy triste",
        1,
        Some("No puedo más, me siento desesperado y sin salida"),
    )
}

pub(super) fn neutral_submission() -> MoodSubmission {
    submission("neutral", "Neutral", 3, Some("Hoy es un día normal"))
}

pub(super) fn validated(submission: MoodSubmission) -> ValidatedSubmission {
    SubmissionGuard::default()
        .validate(submission)
        .expect("fixture submission is valid")
}

pub(super) fn engine() -> MoodAssessmentEngine {
    MoodAssessmentEngine::default()
}

pub(super) fn user() -> UserId {
    UserId("user-42".to_string())
}

#[derive(Default, Clone)]
pub(super) struct MemoryHistory {
    entries: Arc<Mutex<HashMap<UserId, Vec<MoodEntry>>>>,
}

impl MemoryHistory {
    pub(super) fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("history mutex poisoned")
            .values()
            .map(Vec::len)
            .sum()
    }
}

impl MoodHistoryRepository for MemoryHistory {
    fn append(&self, entry: MoodEntry) -> Result<MoodEntry, RepositoryError> {
        let mut guard = self.entries.lock().expect("history mutex poisoned");
        let entries = guard.entry(entry.user_id.clone()).or_default();
        if entries.iter().any(|known| known.id == entry.id) {
            return Err(RepositoryError::Conflict);
        }
        entries.push(entry.clone());
        Ok(entry)
    }

    fn history(&self, user: &UserId, limit: usize) -> Result<Vec<MoodEntry>, RepositoryError> {
        let guard = self.entries.lock().expect("history mutex poisoned");
        Ok(guard
            .get(user)
            .map(|entries| entries.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<RiskAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<RiskAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl RiskAlertPublisher for MemoryAlerts {
    fn publish(&self, alert: RiskAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct OfflineAlerts;

impl RiskAlertPublisher for OfflineAlerts {
    fn publish(&self, _alert: RiskAlert) -> Result<(), AlertError> {
        Err(AlertError::Transport("pager offline".to_string()))
    }
}

pub(super) struct UnavailableHistory;

impl MoodHistoryRepository for UnavailableHistory {
    fn append(&self, _entry: MoodEntry) -> Result<MoodEntry, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn history(&self, _user: &UserId, _limit: usize) -> Result<Vec<MoodEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    MoodAssessmentService<MemoryHistory, MemoryAlerts>,
    MemoryHistory,
    MemoryAlerts,
) {
    let history = MemoryHistory::default();
    let alerts = MemoryAlerts::default();
    let service = MoodAssessmentService::new(
        Arc::new(history.clone()),
        Arc::new(alerts.clone()),
        AssessmentConfig::default(),
    );
    (service, history, alerts)
}

pub(super) fn router_with_service(
    service: MoodAssessmentService<MemoryHistory, MemoryAlerts>,
) -> axum::Router {
    mood_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
