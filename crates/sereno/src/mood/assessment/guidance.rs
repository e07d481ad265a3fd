use super::super::domain::{EmotionConsistency, RiskLevel, Sentiment};
use super::rules::AssessmentSignals;

pub(crate) const HIGH_RISK_RECOMMENDATIONS: &[&str] = &[
    "Te recomendamos contactar de inmediato con un profesional de salud mental o con una línea de atención en crisis.",
    "Si sientes que estás en peligro, usa el botón de pánico o llama al número de emergencias.",
    "Habla ahora con una persona de confianza y cuéntale cómo te sientes.",
];

pub(crate) const MEDIUM_RISK_RECOMMENDATIONS: &[&str] = &[
    "Prueba un ejercicio de respiración guiada para calmar la mente.",
    "Comparte cómo te sientes con un familiar o amigo de confianza.",
    "Dedica un momento a una actividad relajante, como escuchar música o dar un paseo.",
];

pub(crate) const NEGATIVE_RECOMMENDATIONS: &[&str] = &[
    "Realiza alguna actividad que disfrutes, aunque sea por unos minutos.",
    "Un poco de ejercicio suave, como caminar o estirarte, puede mejorar tu ánimo.",
    "Practica unos minutos de atención plena (mindfulness) para conectar con el presente.",
];

pub(crate) const POSITIVE_RECOMMENDATIONS: &[&str] = &[
    "¡Sigue así! Mantén los hábitos que te hacen sentir bien.",
    "Comparte tu buen momento con la comunidad; tu experiencia puede inspirar a otros.",
];

pub(crate) const NEUTRAL_INTENSITY_RECOMMENDATIONS: &[&str] = &[
    "Explora actividades que puedan levantar tu ánimo.",
    "Mantén una rutina saludable de sueño, alimentación y actividad.",
];

pub(crate) const HIGH_RISK_FOLLOW_UPS: &[&str] = &[
    "Realiza un seguimiento diario de tu estado de ánimo.",
    "Contacta con un profesional en las próximas 24-48 horas.",
];

pub(crate) const MEDIUM_RISK_FOLLOW_UPS: &[&str] = &[
    "Vuelve a registrar tu estado de ánimo en 2-3 días.",
    "Presta atención a cualquier cambio en tu estado de ánimo.",
];

pub(crate) const LOW_RISK_FOLLOW_UPS: &[&str] =
    &["Registra tu estado de ánimo al menos una vez por semana."];

pub(crate) const INCONSISTENT_FOLLOW_UPS: &[&str] = &[
    "Tómate un momento para explorar estos sentimientos mixtos.",
    "Considera una evaluación más profunda con un profesional si esta sensación continúa.",
];

pub(crate) const POSITIVE_FOLLOW_UPS: &[&str] =
    &["Continúa con las actividades que están contribuyendo a tu bienestar."];

/// Risk tier first, then sentiment tier, then the neutral-intensity addendum.
pub(crate) fn recommendations(signals: &AssessmentSignals) -> Vec<String> {
    let risk_tier: &[&str] = match signals.risk_level {
        RiskLevel::High => HIGH_RISK_RECOMMENDATIONS,
        RiskLevel::Medium => MEDIUM_RISK_RECOMMENDATIONS,
        RiskLevel::Low => &[],
    };

    let sentiment_tier: &[&str] = match signals.overall_sentiment {
        Sentiment::Negative => NEGATIVE_RECOMMENDATIONS,
        Sentiment::Positive => POSITIVE_RECOMMENDATIONS,
        Sentiment::Neutral => &[],
    };

    let intensity_tier: &[&str] = if signals.intensity == 3 {
        NEUTRAL_INTENSITY_RECOMMENDATIONS
    } else {
        &[]
    };

    collect(&[risk_tier, sentiment_tier, intensity_tier])
}

pub(crate) fn follow_ups(signals: &AssessmentSignals) -> Vec<String> {
    let cadence: &[&str] = match signals.risk_level {
        RiskLevel::High => HIGH_RISK_FOLLOW_UPS,
        RiskLevel::Medium => MEDIUM_RISK_FOLLOW_UPS,
        RiskLevel::Low => LOW_RISK_FOLLOW_UPS,
    };

    let mixed: &[&str] = if signals.consistency == EmotionConsistency::Inconsistent {
        INCONSISTENT_FOLLOW_UPS
    } else {
        &[]
    };

    let sustain: &[&str] = if signals.overall_sentiment == Sentiment::Positive {
        POSITIVE_FOLLOW_UPS
    } else {
        &[]
    };

    collect(&[cadence, mixed, sustain])
}

fn collect(tiers: &[&[&str]]) -> Vec<String> {
    tiers
        .iter()
        .flat_map(|tier| tier.iter())
        .map(|message| (*message).to_string())
        .collect()
}
