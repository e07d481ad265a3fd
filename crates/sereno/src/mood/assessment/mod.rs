mod guidance;
mod lexicon;
mod rules;

pub use lexicon::Lexicon;

#[cfg(test)]
pub(crate) use guidance::{
    HIGH_RISK_RECOMMENDATIONS, INCONSISTENT_FOLLOW_UPS, POSITIVE_RECOMMENDATIONS,
};

use super::domain::{MoodAnalysisResult, ValidatedSubmission};

/// Stateless classifier turning a validated submission into an analysis.
///
/// The engine performs no I/O; identical input always yields an identical
/// result.
#[derive(Debug, Clone, Default)]
pub struct MoodAssessmentEngine {
    lexicon: Lexicon,
}

impl MoodAssessmentEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn analyze(&self, submission: &ValidatedSubmission) -> MoodAnalysisResult {
        let signals = rules::read_signals(submission, &self.lexicon);
        let recommendations = guidance::recommendations(&signals);
        let follow_up_suggestions = guidance::follow_ups(&signals);

        MoodAnalysisResult {
            overall_sentiment: signals.overall_sentiment,
            emotion_consistency: signals.consistency,
            key_emotions: signals.key_emotions,
            confidence_score: signals.confidence_score,
            risk_level: signals.risk_level,
            recommendations,
            follow_up_suggestions,
        }
    }
}
