use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{MoodSubmission, UserId};
use super::repository::{MoodHistoryRepository, RepositoryError, RiskAlertPublisher};
use super::service::{MoodAssessmentService, MoodServiceError};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Router builder exposing the mood assessment endpoints.
pub fn mood_router<R, A>(service: Arc<MoodAssessmentService<R, A>>) -> Router
where
    R: MoodHistoryRepository + 'static,
    A: RiskAlertPublisher + 'static,
{
    Router::new()
        .route("/mood/assessment", post(assessment_handler::<R, A>))
        .route("/mood/analyze", post(analyze_handler::<R, A>))
        .route("/mood/history", get(history_handler::<R, A>))
        .route("/mood/trends", get(trends_handler::<R, A>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryQuery {
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn assessment_handler<R, A>(
    State(service): State<Arc<MoodAssessmentService<R, A>>>,
    headers: HeaderMap,
    payload: Result<Json<MoodSubmission>, JsonRejection>,
) -> Response
where
    R: MoodHistoryRepository + 'static,
    A: RiskAlertPublisher + 'static,
{
    let user_id = match user_from_headers(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.assess(user_id, submission) {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn analyze_handler<R, A>(
    State(service): State<Arc<MoodAssessmentService<R, A>>>,
    payload: Result<Json<MoodSubmission>, JsonRejection>,
) -> Response
where
    R: MoodHistoryRepository + 'static,
    A: RiskAlertPublisher + 'static,
{
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.analyze(submission) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn history_handler<R, A>(
    State(service): State<Arc<MoodAssessmentService<R, A>>>,
    headers: HeaderMap,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    R: MoodHistoryRepository + 'static,
    A: RiskAlertPublisher + 'static,
{
    let user_id = match user_from_headers(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };

    match service.history(&user_id, query.limit) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn trends_handler<R, A>(
    State(service): State<Arc<MoodAssessmentService<R, A>>>,
    headers: HeaderMap,
) -> Response
where
    R: MoodHistoryRepository + 'static,
    A: RiskAlertPublisher + 'static,
{
    let user_id = match user_from_headers(&headers) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };

    match service.trends(&user_id) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => service_error_response(err),
    }
}

fn user_from_headers(headers: &HeaderMap) -> Result<UserId, Response> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| UserId(value.to_string()))
        .ok_or_else(|| {
            let payload = json!({
                "error": format!("missing {USER_ID_HEADER} header"),
            });
            (StatusCode::UNAUTHORIZED, Json(payload)).into_response()
        })
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn service_error_response(err: MoodServiceError) -> Response {
    match err {
        MoodServiceError::Validation(error) => {
            let payload = json!({
                "error": error.to_string(),
                "details": error.details,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        MoodServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({
                "error": "mood entry already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
