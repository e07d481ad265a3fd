use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the user owning a mood history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier assigned to a stored mood entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoodEntryId(pub String);

/// Emotion picked by the user in the mood selector.
///
/// `extra` keeps UI metadata (emoji, color) round-tripping without the engine
/// ever looking at it. Missing or mistyped fields deserialize so the guard can
/// report them per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedEmotion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SelectedEmotion {
    pub fn new(id: impl Into<String>, label: impl Into<String>, intensity: i64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            intensity: Some(serde_json::Value::from(intensity)),
            extra: BTreeMap::new(),
        }
    }

    /// Intensity as an integer, `None` when absent or not an integer.
    pub fn intensity(&self) -> Option<i64> {
        self.intensity.as_ref().and_then(serde_json::Value::as_i64)
    }
}

/// Mood submission as received from clients.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSubmission {
    #[serde(default)]
    pub selected_emotion: Option<SelectedEmotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_recording_url: Option<String>,
}

/// Submission that passed the guard; intensity is known to be within 1..=5.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub(crate) emotion: SelectedEmotion,
    pub(crate) intensity: u8,
    pub(crate) text: Option<String>,
    pub(crate) voice_recording_url: Option<String>,
}

impl ValidatedSubmission {
    pub fn emotion(&self) -> &SelectedEmotion {
        &self.emotion
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn voice_recording_url(&self) -> Option<&str> {
        self.voice_recording_url.as_deref()
    }

    pub(crate) fn into_submission(self) -> MoodSubmission {
        MoodSubmission {
            selected_emotion: Some(self.emotion),
            text_description: self.text,
            voice_recording_url: self.voice_recording_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Sentiment implied by the selected intensity alone.
    pub fn from_intensity(intensity: u8) -> Self {
        match intensity {
            0..=2 => Sentiment::Negative,
            3 => Sentiment::Neutral,
            _ => Sentiment::Positive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Agreement between the free-text tone and the selected intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionConsistency {
    Consistent,
    Inconsistent,
    Unclear,
}

impl EmotionConsistency {
    pub fn label(&self) -> &'static str {
        match self {
            EmotionConsistency::Consistent => "consistent",
            EmotionConsistency::Inconsistent => "inconsistent",
            EmotionConsistency::Unclear => "unclear",
        }
    }
}

impl fmt::Display for EmotionConsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse triage signal consumed by alerting and follow-up scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured output of a single assessment. Never mutated once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysisResult {
    pub overall_sentiment: Sentiment,
    pub emotion_consistency: EmotionConsistency,
    pub key_emotions: Vec<String>,
    pub confidence_score: f32,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub follow_up_suggestions: Vec<String>,
}

/// Append-only history record pairing a submission with its analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: MoodEntryId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub submission: MoodSubmission,
    pub analysis_result: MoodAnalysisResult,
    pub recorded_at: DateTime<Utc>,
}

impl MoodEntry {
    pub fn intensity(&self) -> Option<i64> {
        self.submission
            .selected_emotion
            .as_ref()
            .and_then(SelectedEmotion::intensity)
    }
}
