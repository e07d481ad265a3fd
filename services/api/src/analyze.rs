use clap::Args;
use sereno::config::AppConfig;
use sereno::error::AppError;
use sereno::mood::{
    MoodAnalysisResult, MoodAssessmentEngine, MoodSubmission, SelectedEmotion, SubmissionGuard,
};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Identifier of the selected emotion (e.g. very-happy)
    #[arg(long)]
    pub(crate) emotion_id: String,
    /// Display label of the selected emotion (e.g. "Muy feliz")
    #[arg(long)]
    pub(crate) label: String,
    /// Intensity of the selected emotion, 1 (very low) to 5 (very high)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) intensity: i64,
    /// Optional free-text description of how the day went
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Print the raw JSON result instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let guard = SubmissionGuard::from_config(&config.assessment);
    let engine = MoodAssessmentEngine::default();

    let as_json = args.json;
    let validated = guard.validate(submission_from_args(args))?;
    let result = engine.analyze(&validated);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_analysis(&result);
    }

    Ok(())
}

fn submission_from_args(args: AnalyzeArgs) -> MoodSubmission {
    MoodSubmission {
        selected_emotion: Some(SelectedEmotion::new(
            args.emotion_id,
            args.label,
            args.intensity,
        )),
        text_description: args.text,
        voice_recording_url: None,
    }
}

fn render_analysis(result: &MoodAnalysisResult) {
    println!("Mood assessment");
    println!(
        "- Sentiment: {} | consistency: {} | confidence {:.0}%",
        result.overall_sentiment,
        result.emotion_consistency,
        result.confidence_score * 100.0
    );
    println!("- Risk level: {}", result.risk_level);
    println!("- Key emotions: {}", result.key_emotions.join(", "));

    if !result.recommendations.is_empty() {
        println!("\nRecommendations");
        for message in &result.recommendations {
            println!("  - {message}");
        }
    }

    println!("\nFollow-up");
    for message in &result.follow_up_suggestions {
        println!("  - {message}");
    }
}
