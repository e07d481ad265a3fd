use std::fmt;

use serde::Serialize;

use super::domain::{MoodSubmission, ValidatedSubmission};
use crate::config::AssessmentConfig;

pub const MIN_INTENSITY: i64 = 1;
pub const MAX_INTENSITY: i64 = 5;

/// Single rejected field with a caller-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failure listing every offending field of a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid mood submission: {}", summarize(.details))]
pub struct ValidationError {
    pub details: Vec<FieldError>,
}

fn summarize(details: &[FieldError]) -> String {
    details
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.details.iter().any(|detail| detail.field == field)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Guard that turns raw submissions into `ValidatedSubmission` values.
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    max_description_chars: usize,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::from_config(&AssessmentConfig::default())
    }
}

impl SubmissionGuard {
    pub fn from_config(config: &AssessmentConfig) -> Self {
        Self {
            max_description_chars: config.max_description_chars,
        }
    }

    pub fn validate(
        &self,
        submission: MoodSubmission,
    ) -> Result<ValidatedSubmission, ValidationError> {
        let mut details = Vec::new();
        let mut intensity = None;

        let MoodSubmission {
            selected_emotion,
            text_description,
            voice_recording_url,
        } = submission;

        match &selected_emotion {
            None => details.push(FieldError {
                field: "selectedEmotion",
                message: "is required".to_string(),
            }),
            Some(emotion) => {
                if emotion.id.trim().is_empty() {
                    details.push(FieldError {
                        field: "selectedEmotion.id",
                        message: "is required".to_string(),
                    });
                }
                if emotion.label.trim().is_empty() {
                    details.push(FieldError {
                        field: "selectedEmotion.label",
                        message: "is required".to_string(),
                    });
                }
                match read_intensity(emotion.intensity.as_ref()) {
                    Ok(value) => intensity = Some(value),
                    Err(message) => details.push(FieldError {
                        field: "selectedEmotion.intensity",
                        message,
                    }),
                }
            }
        }

        if let Some(text) = &text_description {
            let length = text.chars().count();
            if length > self.max_description_chars {
                details.push(FieldError {
                    field: "textDescription",
                    message: format!(
                        "must be at most {} characters (found {length})",
                        self.max_description_chars
                    ),
                });
            }
        }

        let (emotion, intensity) = match (selected_emotion, intensity) {
            (Some(emotion), Some(intensity)) if details.is_empty() => (emotion, intensity),
            _ => return Err(ValidationError { details }),
        };

        let text = text_description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(ValidatedSubmission {
            emotion,
            intensity,
            text,
            voice_recording_url,
        })
    }
}

fn read_intensity(value: Option<&serde_json::Value>) -> Result<u8, String> {
    let value = match value {
        None | Some(serde_json::Value::Null) => return Err("is required".to_string()),
        Some(value) => value,
    };

    let intensity = value
        .as_i64()
        .ok_or_else(|| format!("must be an integer (found {value})"))?;

    if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
        return Err(format!(
            "must be between {MIN_INTENSITY} and {MAX_INTENSITY} (found {intensity})"
        ));
    }

    u8::try_from(intensity)
        .map_err(|_| format!("must be between {MIN_INTENSITY} and {MAX_INTENSITY}"))
}
