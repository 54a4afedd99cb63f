use std::path::PathBuf;
use std::process;

use clap::Parser;

use callgrade_core::audio::domain::audio_clip::AudioClip;
use callgrade_core::audio::infrastructure::symphonia_decoder::SymphoniaDecoder;
use callgrade_core::pipeline::analyze_call_use_case::AnalyzeCallUseCase;
use callgrade_core::report::domain::call_report::CallReport;
use callgrade_core::shared::constants::{
    DEFAULT_KEYWORDS, DEFAULT_REMOTE_ENDPOINT, WHISPER_MODEL_NAME, WHISPER_MODEL_URL,
};
use callgrade_core::shared::model_resolver;
use callgrade_core::transcription::domain::transcription_provider::TranscriptionProvider;
use callgrade_core::transcription::infrastructure::http_provider::HttpTranscriptionProvider;
use callgrade_core::transcription::infrastructure::whisper_provider::WhisperProvider;

/// Transcribes a customer-service call and scores agent performance.
#[derive(Parser)]
#[command(name = "callgrade")]
struct Cli {
    /// Input call recording (MP3, WAV, FLAC, Ogg or M4A).
    input: PathBuf,

    /// Keywords the agent is expected to say (comma-separated).
    #[arg(long, value_delimiter = ',')]
    keywords: Option<Vec<String>>,

    /// Transcription provider: local or remote.
    #[arg(long, default_value = "local")]
    provider: String,

    /// Model override: a ggml file path for local, a model name for remote.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Base URL of the remote transcription API.
    #[arg(long, default_value = DEFAULT_REMOTE_ENDPOINT)]
    endpoint: String,

    /// API key for the remote provider.
    #[arg(long, env = "CALLGRADE_API_KEY")]
    api_key: Option<String>,

    /// Print the report as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let keywords = parse_keywords(cli.keywords.clone());
    let provider = build_provider(&cli)?;
    let clip = AudioClip::from_path(&cli.input)?;

    let use_case = AnalyzeCallUseCase::new(Box::new(SymphoniaDecoder::new()), provider, keywords);
    let report = use_case.run(&clip)?;

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.provider != "local" && cli.provider != "remote" {
        return Err(format!(
            "Provider must be 'local' or 'remote', got '{}'",
            cli.provider
        )
        .into());
    }
    if cli.provider == "remote" && cli.api_key.is_none() {
        return Err(
            "API key is required for the remote provider (use --api-key or CALLGRADE_API_KEY)"
                .into(),
        );
    }
    Ok(())
}

fn parse_keywords(keywords: Option<Vec<String>>) -> Vec<String> {
    match keywords {
        Some(list) => list
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect(),
        None => DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
    }
}

fn build_provider(cli: &Cli) -> Result<Box<dyn TranscriptionProvider>, Box<dyn std::error::Error>> {
    if cli.provider == "remote" {
        let model = cli
            .model
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());
        let api_key = cli.api_key.clone().unwrap_or_default();
        return Ok(Box::new(HttpTranscriptionProvider::new(
            cli.endpoint.clone(),
            api_key,
            model,
        )));
    }

    log::info!("Resolving model: {WHISPER_MODEL_NAME}");
    let model_path = model_resolver::resolve(
        WHISPER_MODEL_NAME,
        WHISPER_MODEL_URL,
        cli.model.as_deref(),
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    Ok(Box::new(WhisperProvider::new(&model_path)?))
}

fn render_json(report: &CallReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "transcript": report.transcript().text(),
        "sentiment_score": report.sentiment().score(),
        "sentiment_category": report.sentiment().category().to_string(),
        "keyword_matched": report.keyword_score().matched(),
        "keyword_total": report.keyword_score().total(),
        "keyword_score_pct": report.keyword_score().percentage(),
        "composite_score": report.composite_score(),
    }))
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech model... {pct}%");
    } else {
        eprint!("\rDownloading speech model... {downloaded} bytes");
    }
}
