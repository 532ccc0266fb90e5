use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use signal_score::config::DEFAULT_CONFIG_PATH;
use signal_score::{
    audience_summary, batch_score_audience, format_float, format_percent, predict_with_weights,
    AudienceProfile, ContentFeatures, IcpOverrides, PostEngagement, PredictionRequest,
    ScoringConfig, SentimentSignal,
};

#[derive(Parser)]
#[command(name = "signal-score", about = "Post engagement and audience ICP scoring")]
struct Cli {
    /// Scoring config TOML (defaults to $SCORING_CONFIG_PATH or config/scoring.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict engagement performance for a post.
    Predict(PredictArgs),
    /// Score and rank audience members against the ICP.
    Audience(AudienceArgs),
    /// Write the default configuration.
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct PredictArgs {
    /// JSON request `{post, sentiment?, features?, weights?}`; replaces the flags.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value_t = 0)]
    likes: u64,
    #[arg(long, default_value_t = 0)]
    comments: u64,
    #[arg(long, default_value_t = 0)]
    shares: u64,
    /// Sentiment compound score in [-1, 1].
    #[arg(long, allow_hyphen_values = true)]
    sentiment: Option<f64>,
    #[arg(long)]
    words: Option<u64>,
    #[arg(long, default_value_t = 0)]
    hashtags: u64,
    #[arg(long, default_value_t = 0)]
    emojis: u64,
    #[arg(long, default_value_t = 0)]
    urls: u64,
    #[arg(long)]
    cta: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct AudienceArgs {
    /// JSON array of profiles; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// JSON object replacing ICP tables for this run.
    #[arg(long)]
    icp: Option<PathBuf>,
    #[arg(long, default_value_t = 10)]
    top: usize,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    path: PathBuf,
}

fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Predict(args) => run_predict(cli.config, args),
        Command::Audience(args) => run_audience(cli.config, args),
        Command::Config(args) => run_config(args),
    }
}

fn run_predict(config_path: Option<PathBuf>, args: PredictArgs) -> Result<(), String> {
    let (config, _) = ScoringConfig::load(config_path).map_err(|err| err.to_string())?;

    let request = match &args.input {
        Some(path) => parse_json::<PredictionRequest>(&read_file(path)?, path)?,
        None => request_from_flags(&args),
    };
    let weights = match &request.weights {
        Some(overrides) => config.engagement.merged(overrides),
        None => config.engagement.clone(),
    };

    let result = predict_with_weights(
        &request.post,
        request.sentiment.as_ref(),
        request.features.as_ref(),
        &weights,
    );

    if args.json {
        return print_json(&result);
    }

    println!(
        "Engagement score: {} ({})",
        format_float(result.engagement_score, 2),
        result.prediction_label.label()
    );
    println!("Percentile: {}", result.percentile.label());
    println!(
        "Confidence: {} ({})",
        result.confidence_level.label(),
        format_percent(result.confidence_score)
    );
    println!(
        "Base score: {} | quality bonus: {}",
        format_float(result.base_score, 2),
        format_float(result.quality_bonus, 2)
    );
    println!("\nRecommendations:");
    for recommendation in &result.recommendations {
        println!("- {}", recommendation);
    }
    Ok(())
}

fn request_from_flags(args: &PredictArgs) -> PredictionRequest {
    PredictionRequest {
        post: PostEngagement::new(args.likes, args.comments, args.shares),
        sentiment: args.sentiment.map(SentimentSignal::new),
        features: args.words.map(|word_count| ContentFeatures {
            word_count,
            hashtag_count: args.hashtags,
            emoji_count: args.emojis,
            url_count: args.urls,
            has_call_to_action: args.cta,
        }),
        weights: None,
    }
}

fn run_audience(config_path: Option<PathBuf>, args: AudienceArgs) -> Result<(), String> {
    let (config, _) = ScoringConfig::load(config_path).map_err(|err| err.to_string())?;

    let icp = match &args.icp {
        Some(path) => {
            let overrides = parse_json::<IcpOverrides>(&read_file(path)?, path)?;
            config.icp.with_overrides(&overrides)
        }
        None => config.icp,
    };

    let profiles: Vec<AudienceProfile> = match &args.input {
        Some(path) => parse_json(&read_file(path)?, path)?,
        None => {
            let stdin = read_stdin()?;
            serde_json::from_str(&stdin)
                .map_err(|err| format!("invalid profiles on stdin: {}", err))?
        }
    };
    if profiles.is_empty() {
        tracing::warn!("no audience profiles supplied");
    }

    let scored = batch_score_audience(&profiles, &icp);
    let summary = audience_summary(&scored);

    if args.json {
        #[derive(Serialize)]
        struct Report<'a> {
            summary: &'a Option<signal_score::AudienceSummary>,
            audience: &'a [signal_score::ScoredProfile],
        }
        return print_json(&Report {
            summary: &summary,
            audience: &scored,
        });
    }

    println!("Top leads:");
    for (rank, entry) in scored.iter().take(args.top).enumerate() {
        let relevance = &entry.relevance;
        let company = entry.profile.company_name.as_deref().unwrap_or("-");
        println!(
            "{:>3}. {:>3}/100 {:<11} {:<4} {} @ {}",
            rank + 1,
            relevance.relevance_score,
            relevance.relevance_label.label(),
            relevance.lead_priority.label(),
            display_or_dash(&entry.profile.job_title),
            company
        );
    }

    if let Some(summary) = summary {
        println!(
            "\nAudience: {} members | average {} | quality {}",
            summary.total_audience,
            format_float(summary.average_relevance_score, 2),
            summary.audience_quality.label()
        );
        println!(
            "Relevance: high {} | medium {} | low {}",
            summary.high_relevance_count,
            summary.medium_relevance_count,
            summary.low_relevance_count
        );
        println!(
            "Leads: hot {} | warm {} | cold {} (top {}, lowest {})",
            summary.hot_leads,
            summary.warm_leads,
            summary.cold_leads,
            summary.top_score,
            summary.lowest_score
        );
    }
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), String> {
    ScoringConfig::default()
        .write(&args.path)
        .map_err(|err| err.to_string())?;
    println!("Wrote default config to {}", args.path.display());
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|err| format!("failed reading {}: {}", path.display(), err))
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    if buffer.trim().is_empty() {
        return Err("missing audience input: pass --input or pipe JSON on stdin".to_string());
    }
    Ok(buffer)
}

fn parse_json<T: serde::de::DeserializeOwned>(contents: &str, path: &Path) -> Result<T, String> {
    serde_json::from_str(contents)
        .map_err(|err| format!("invalid JSON in {}: {}", path.display(), err))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
