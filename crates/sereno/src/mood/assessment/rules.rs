use super::super::domain::{EmotionConsistency, RiskLevel, Sentiment, ValidatedSubmission};
use super::lexicon::{contains_any, count_matches, Lexicon};

const BASE_CONFIDENCE_TENTHS: i32 = 5;
const TEXT_BONUS_TENTHS: i32 = 2;
const CONSISTENT_BONUS_TENTHS: i32 = 2;
const INCONSISTENT_PENALTY_TENTHS: i32 = 1;
const EXTREME_INTENSITY_BONUS_TENTHS: i32 = 1;

/// Intermediate reading of a submission shared by the guidance rules.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AssessmentSignals {
    pub intensity: u8,
    pub overall_sentiment: Sentiment,
    pub consistency: EmotionConsistency,
    pub key_emotions: Vec<String>,
    pub confidence_score: f32,
    pub risk_level: RiskLevel,
}

pub(crate) fn read_signals(
    submission: &ValidatedSubmission,
    lexicon: &Lexicon,
) -> AssessmentSignals {
    let intensity = submission.intensity();
    let normalized = submission.text().map(str::to_lowercase);
    let text = normalized.as_deref();

    let text_sentiment = text.map(|text| text_sentiment(text, lexicon));
    let expected = Sentiment::from_intensity(intensity);
    let overall_sentiment = fuse_sentiment(expected, text_sentiment);
    let consistency = consistency(expected, text_sentiment);
    let key_emotions = key_emotions(&submission.emotion().label, text, lexicon);
    let confidence_score = confidence(intensity, text.is_some(), consistency);
    let risk_level = risk_level(intensity, text, text_sentiment, lexicon);

    AssessmentSignals {
        intensity,
        overall_sentiment,
        consistency,
        key_emotions,
        confidence_score,
        risk_level,
    }
}

fn text_sentiment(text: &str, lexicon: &Lexicon) -> Sentiment {
    let positive = count_matches(text, lexicon.positive);
    let negative = count_matches(text, lexicon.negative);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

fn key_emotions(label: &str, text: Option<&str>, lexicon: &Lexicon) -> Vec<String> {
    let mut emotions = vec![label.to_string()];

    if let Some(text) = text {
        for (category, triggers) in lexicon.emotion_categories {
            if contains_any(text, triggers) && !emotions.iter().any(|known| known == category) {
                emotions.push((*category).to_string());
            }
        }
    }

    emotions
}

fn fuse_sentiment(expected: Sentiment, text: Option<Sentiment>) -> Sentiment {
    match (expected, text) {
        (expected, None) => expected,
        (expected, Some(text)) if expected == text => expected,
        (Sentiment::Negative, Some(_)) | (_, Some(Sentiment::Negative)) => Sentiment::Negative,
        (Sentiment::Positive, Some(_)) | (_, Some(Sentiment::Positive)) => Sentiment::Positive,
        (Sentiment::Neutral, Some(Sentiment::Neutral)) => Sentiment::Neutral,
    }
}

fn consistency(expected: Sentiment, text: Option<Sentiment>) -> EmotionConsistency {
    match text {
        None => EmotionConsistency::Unclear,
        Some(text) if text == expected => EmotionConsistency::Consistent,
        Some(_) if expected == Sentiment::Neutral => EmotionConsistency::Consistent,
        Some(_) => EmotionConsistency::Inconsistent,
    }
}

// An extreme selection only counts as unambiguous when the text does not
// contradict it.
fn confidence(intensity: u8, has_text: bool, consistency: EmotionConsistency) -> f32 {
    let mut tenths = BASE_CONFIDENCE_TENTHS;

    if has_text {
        tenths += TEXT_BONUS_TENTHS;
    }

    match consistency {
        EmotionConsistency::Consistent => tenths += CONSISTENT_BONUS_TENTHS,
        EmotionConsistency::Inconsistent => tenths -= INCONSISTENT_PENALTY_TENTHS,
        EmotionConsistency::Unclear => {}
    }

    if matches!(intensity, 1 | 5) && consistency != EmotionConsistency::Inconsistent {
        tenths += EXTREME_INTENSITY_BONUS_TENTHS;
    }

    tenths.clamp(0, 10) as f32 / 10.0
}

fn risk_level(
    intensity: u8,
    text: Option<&str>,
    text_sentiment: Option<Sentiment>,
    lexicon: &Lexicon,
) -> RiskLevel {
    if let Some(text) = text {
        if contains_any(text, lexicon.high_risk) {
            return RiskLevel::High;
        }
        if contains_any(text, lexicon.medium_risk) {
            return RiskLevel::Medium;
        }
    }

    let negative_text = text_sentiment.map_or(true, |sentiment| sentiment == Sentiment::Negative);
    if intensity == 1 && negative_text {
        return RiskLevel::Medium;
    }

    if intensity <= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
