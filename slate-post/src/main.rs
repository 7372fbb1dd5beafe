//! slate-post - Schedule a post across platform accounts

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use libslated::error::ConfigError;
use libslated::media::MediaRef;
use libslated::registry::AccountRegistry;
use libslated::service::SlatedService;
use libslated::{Config, ContentIntent, PostType, Result, SlatedError};

#[derive(Parser, Debug)]
#[command(name = "slate-post")]
#[command(about = "Schedule a post across platform accounts", long_about = None)]
struct Cli {
    /// Caption and hashtags
    caption: Option<String>,

    /// Content file to attach (video or image)
    #[arg(short, long)]
    media: PathBuf,

    /// Target account identifier (repeatable)
    #[arg(short, long = "account")]
    accounts: Vec<String>,

    /// Post type (repeatable): reel, story, feed_post, youtube_video, carousel, tweet
    #[arg(short = 't', long = "post-type")]
    post_types: Vec<PostType>,

    /// Scheduled date (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Scheduled time of day (HH:MM, 24-hour)
    #[arg(long)]
    time: Option<String>,

    /// Free-text notes
    #[arg(long)]
    notes: Option<String>,

    /// Content intent: growth, lead, brand, viral
    #[arg(long)]
    intent: Option<ContentIntent>,

    /// Mark this post as part of an experiment
    #[arg(long)]
    experiment: bool,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("error")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Load the config file, falling back to defaults when none exists yet
fn load_config() -> Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(SlatedError::Config(ConfigError::ReadError(_))) => Ok(Config::default_config()),
        Err(e) => Err(e),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;
    let service = SlatedService::from_config(config).await?;

    let mut draft = service.new_draft();
    draft.set_media(MediaRef::from_path(&cli.media)?);
    if let Some(caption) = cli.caption {
        draft.set_caption(caption);
    }

    // Resolve requested accounts against the registry so typos surface
    // before submission
    let available = service.registry().active_accounts().await?;
    for requested in &cli.accounts {
        let account = available
            .iter()
            .find(|a| a.id == *requested)
            .ok_or_else(|| {
                let known: Vec<&str> = available.iter().map(|a| a.id.as_str()).collect();
                SlatedError::InvalidInput(format!(
                    "Unknown account '{}'. Active accounts: {}",
                    requested,
                    if known.is_empty() {
                        "(none registered)".to_string()
                    } else {
                        known.join(", ")
                    }
                ))
            })?;
        draft.toggle_account(account.clone());
    }

    for post_type in &cli.post_types {
        draft.toggle_post_type(*post_type);
    }

    if let Some(date) = cli.date {
        draft.set_date(date);
    }
    if let Some(time) = cli.time {
        draft.set_time(time);
    }
    if let Some(notes) = cli.notes {
        draft.set_notes(notes);
    }
    if let Some(intent) = cli.intent {
        draft.set_intent(intent);
    }
    draft.set_experiment(cli.experiment);

    let confirmation = service.submission().submit(&mut draft).await?;

    match cli.format.as_str() {
        "json" => {
            let output = serde_json::json!({
                "records": confirmation.records,
                "accounts": confirmation.accounts,
                "date": confirmation.date.to_string(),
                "time": confirmation.time,
            });
            println!("{}", output);
        }
        _ => {
            println!("{}", confirmation);
        }
    }

    Ok(())
}
