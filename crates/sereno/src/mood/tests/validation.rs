use super::common::*;
use crate::config::AssessmentConfig;
use crate::mood::domain::MoodSubmission;
use crate::mood::validation::SubmissionGuard;

#[test]
fn rejects_missing_selected_emotion() {
    let submission = MoodSubmission {
        text_description: Some("hola".to_string()),
        ..MoodSubmission::default()
    };

    let error = SubmissionGuard::default()
        .validate(submission)
        .expect_err("missing emotion is rejected");

    assert!(error.has_field("selectedEmotion"));
    assert_eq!(error.details.len(), 1);
}

#[test]
fn rejects_out_of_range_intensity() {
    for intensity in [0, 6, -3] {
        let error = SubmissionGuard::default()
            .validate(submission("x", "Raro", intensity, None))
            .expect_err("intensity is rejected");
        assert!(error.has_field("selectedEmotion.intensity"));
    }
}

#[test]
fn reports_missing_and_mistyped_emotion_fields() {
    let cases = [
        (serde_json::json!({ "id": "odd", "label": "Raro" }), "is required"),
        (serde_json::json!({ "id": "odd", "label": "Raro", "intensity": null }), "is required"),
        (serde_json::json!({ "id": "odd", "label": "Raro", "intensity": "5" }), "must be an integer"),
        (serde_json::json!({ "id": "odd", "label": "Raro", "intensity": 4.5 }), "must be an integer"),
    ];

    for (emotion, expected) in cases {
        let submission: MoodSubmission =
            serde_json::from_value(serde_json::json!({ "selectedEmotion": emotion }))
                .expect("tolerant payload parses");
        let error = SubmissionGuard::default()
            .validate(submission)
            .expect_err("emotion is rejected");

        assert_eq!(error.details.len(), 1);
        assert_eq!(error.details[0].field, "selectedEmotion.intensity");
        assert!(error.details[0].message.starts_with(expected));
    }
}

#[test]
fn emotion_without_id_or_label_reports_both() {
    let submission: MoodSubmission = serde_json::from_value(serde_json::json!({
        "selectedEmotion": { "intensity": 3 }
    }))
    .expect("tolerant payload parses");

    let error = SubmissionGuard::default()
        .validate(submission)
        .expect_err("emotion is rejected");

    let fields: Vec<&str> = error.details.iter().map(|detail| detail.field).collect();
    assert_eq!(fields, vec!["selectedEmotion.id", "selectedEmotion.label"]);
}

#[test]
fn collects_every_field_problem() {
    let long_text = "a".repeat(1001);
    let error = SubmissionGuard::default()
        .validate(submission(" ", "", 9, Some(long_text.as_str())))
        .expect_err("submission is rejected");

    let fields: Vec<&str> = error.details.iter().map(|detail| detail.field).collect();
    assert_eq!(
        fields,
        vec![
            "selectedEmotion.id",
            "selectedEmotion.label",
            "selectedEmotion.intensity",
            "textDescription",
        ]
    );
    assert!(error.to_string().contains("textDescription"));
}

#[test]
fn description_limit_counts_characters_not_bytes() {
    let guard = SubmissionGuard::from_config(&AssessmentConfig {
        max_description_chars: 5,
        ..AssessmentConfig::default()
    });

    assert!(guard
        .validate(submission("calm", "Tranquilo", 4, Some("ñañañ")))
        .is_ok());
    assert!(guard
        .validate(submission("calm", "Tranquilo", 4, Some("ñañaña")))
        .is_err());
}

#[test]
fn trims_description_and_keeps_voice_reference() {
    let mut raw = submission("calm", "Tranquilo", 4, Some("  en paz  "));
    raw.voice_recording_url = Some("blob:voice/123".to_string());

    let validated = SubmissionGuard::default()
        .validate(raw)
        .expect("valid submission");

    assert_eq!(validated.text(), Some("en paz"));
    assert_eq!(validated.intensity(), 4);
    assert_eq!(validated.voice_recording_url(), Some("blob:voice/123"));
}

#[test]
fn ui_metadata_round_trips_through_extension_map() {
    let payload = serde_json::json!({
        "selectedEmotion": {
            "id": "happy",
            "label": "Contento",
            "intensity": 4,
            "emoji": "🙂",
            "color": "#FFD166"
        }
    });

    let submission: MoodSubmission = serde_json::from_value(payload).expect("payload parses");
    let emotion = submission.selected_emotion.expect("emotion present");

    assert_eq!(emotion.intensity(), Some(4));
    assert_eq!(emotion.extra.get("emoji"), Some(&serde_json::json!("🙂")));
    assert_eq!(emotion.extra.len(), 2);
}
