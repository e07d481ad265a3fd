use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{MoodEntry, RiskLevel, Sentiment};

const TOP_EMOTION_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionFrequency {
    pub emotion: String,
    pub count: usize,
}

/// Aggregate view over a user's mood history for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodTrendSummary {
    pub total_entries: usize,
    pub average_intensity: Option<f32>,
    pub sentiment_distribution: SentimentDistribution,
    pub risk_distribution: RiskDistribution,
    pub top_emotions: Vec<EmotionFrequency>,
    pub latest_risk_level: Option<RiskLevel>,
}

impl MoodTrendSummary {
    /// Expects `entries` newest first, as returned by repository history reads.
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        let mut sentiment_distribution = SentimentDistribution::default();
        let mut risk_distribution = RiskDistribution::default();
        let mut emotion_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut intensity_total: i64 = 0;
        let mut intensity_samples: usize = 0;

        for entry in entries {
            let analysis = &entry.analysis_result;

            match analysis.overall_sentiment {
                Sentiment::Positive => sentiment_distribution.positive += 1,
                Sentiment::Neutral => sentiment_distribution.neutral += 1,
                Sentiment::Negative => sentiment_distribution.negative += 1,
            }

            match analysis.risk_level {
                RiskLevel::Low => risk_distribution.low += 1,
                RiskLevel::Medium => risk_distribution.medium += 1,
                RiskLevel::High => risk_distribution.high += 1,
            }

            for emotion in &analysis.key_emotions {
                *emotion_counts.entry(emotion.as_str()).or_default() += 1;
            }

            if let Some(intensity) = entry.intensity() {
                intensity_total += intensity;
                intensity_samples += 1;
            }
        }

        let average_intensity = if intensity_samples == 0 {
            None
        } else {
            Some(intensity_total as f32 / intensity_samples as f32)
        };

        // BTreeMap iteration is alphabetical, so the stable sort breaks ties by name.
        let mut top_emotions: Vec<EmotionFrequency> = emotion_counts
            .into_iter()
            .map(|(emotion, count)| EmotionFrequency {
                emotion: emotion.to_string(),
                count,
            })
            .collect();
        top_emotions.sort_by(|a, b| b.count.cmp(&a.count));
        top_emotions.truncate(TOP_EMOTION_LIMIT);

        let latest_risk_level = entries
            .first()
            .map(|entry| entry.analysis_result.risk_level);

        Self {
            total_entries: entries.len(),
            average_intensity,
            sentiment_distribution,
            risk_distribution,
            top_emotions,
            latest_risk_level,
        }
    }
}
