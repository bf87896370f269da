use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use sarmad_attribution::{AttributionRequest, Attributor, BisectConfig, LogSink};
use sarmad_corpus::Corpus;
use sarmad_fingerprint::{FingerprintExtractor, Lexicon, DEFAULT_TOP_K};

#[derive(Parser)]
#[command(name = "sarmad")]
#[command(about = "Viral content source attribution over post corpora", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the semantic fingerprint of a corpus
    Fingerprint(FingerprintArgs),

    /// Attribute the originating post of a viral event
    Attribute(AttributeArgs),

    /// Hourly post volume histogram
    Volume(VolumeArgs),
}

#[derive(Args)]
struct FingerprintArgs {
    /// Corpus file (JSON array of posts)
    corpus: PathBuf,

    /// Number of keywords to keep
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Only analyze posts created at or after this RFC 3339 time
    #[arg(long)]
    since: Option<String>,

    /// Stop-word/denylist pack (TOML); defaults to the built-in Arabic pack
    #[arg(long)]
    lexicon: Option<PathBuf>,
}

#[derive(Args)]
struct AttributeArgs {
    /// Corpus file (JSON array of posts)
    corpus: PathBuf,

    /// Reported post id to trace structurally before bisecting
    #[arg(long)]
    report: Option<String>,

    /// Keyword to search for (repeatable); extracted from the corpus when
    /// none are given
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Pacing delay between bisection steps, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Stop-word/denylist pack (TOML); defaults to the built-in Arabic pack
    #[arg(long)]
    lexicon: Option<PathBuf>,
}

#[derive(Args)]
struct VolumeArgs {
    /// Corpus file (JSON array of posts)
    corpus: PathBuf,
}

#[derive(Serialize)]
struct VolumeBucket {
    hour: u32,
    count: u64,
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    let corpus =
        Corpus::load(path).with_context(|| format!("loading corpus from {}", path.display()))?;
    log::info!("loaded corpus: {} posts", corpus.len());
    Ok(corpus)
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => {
            Lexicon::load(path).with_context(|| format!("loading lexicon from {}", path.display()))
        }
        None => Ok(Lexicon::arabic()),
    }
}

fn run_fingerprint(args: FingerprintArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let lexicon = load_lexicon(args.lexicon.as_deref())?;
    let since = args
        .since
        .as_deref()
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|t| t.with_timezone(&Utc))
                .with_context(|| format!("invalid --since value {raw:?}"))
        })
        .transpose()?;

    let extractor = FingerprintExtractor::new(lexicon).with_top_k(args.top_k);
    let fingerprint = extractor.extract(&corpus, since);
    log::info!(
        "analyzed {} posts, {} tokens",
        fingerprint.posts_analyzed,
        fingerprint.total_tokens
    );

    println!("{}", serde_json::to_string_pretty(&fingerprint)?);
    Ok(())
}

async fn run_attribute(args: AttributeArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let lexicon = load_lexicon(args.lexicon.as_deref())?;

    let config = BisectConfig {
        step_delay: std::time::Duration::from_millis(args.delay_ms),
        ..BisectConfig::default()
    };
    let attributor = Attributor::new(config, FingerprintExtractor::new(lexicon));
    let request = AttributionRequest {
        reported_post_id: args.report,
        keywords: (!args.keywords.is_empty()).then_some(args.keywords),
    };

    let mut sink = LogSink;
    let result = attributor.attribute(&corpus, &request, Some(&mut sink)).await;

    match (&result.found, &result.source) {
        (true, Some(source)) => log::info!(
            "source attributed: {} at {} after {} iterations",
            source.id,
            source.created_at,
            result.iterations
        ),
        _ => log::warn!("no source found after {} iterations", result.iterations),
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_volume(args: VolumeArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let buckets: Vec<VolumeBucket> = corpus
        .hourly_volume()
        .iter()
        .enumerate()
        .map(|(hour, &count)| VolumeBucket {
            hour: hour as u32,
            count,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&buckets)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Fingerprint(args) => run_fingerprint(args)?,
        Commands::Attribute(args) => run_attribute(args).await?,
        Commands::Volume(args) => run_volume(args)?,
    }

    Ok(())
}
