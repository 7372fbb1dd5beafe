//! slate-channels - Manage the selectable account registry

use clap::{Parser, Subcommand};
use libslated::error::ConfigError;
use libslated::registry::AccountRegistry;
use libslated::service::SlatedService;
use libslated::{Account, Config, Platform, Result, SlatedError};

#[derive(Parser)]
#[command(name = "slate-channels")]
#[command(about = "Manage the selectable account registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (text or json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List active accounts grouped by platform (default)
    List,

    /// Register a new channel account
    Add {
        /// Account identifier, e.g. "@tiktok_main"
        account: String,

        /// Platform tag: tiktok, youtube_shorts, instagram_reels,
        /// facebook_reels, twitter, snapchat, pinterest, linkedin
        #[arg(long)]
        platform: Platform,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

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

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => list(&service, &cli.format).await,
        Commands::Add { account, platform } => {
            let account = Account::new(account, platform);
            service.database().add_channel(&account, true).await?;
            println!("Registered {}", account);
            Ok(())
        }
    }
}

async fn list(service: &SlatedService, format: &str) -> Result<()> {
    let accounts = service.registry().active_accounts().await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&accounts).unwrap_or_default());
        return Ok(());
    }

    if accounts.is_empty() {
        println!("No active accounts registered. Add one with: slate-channels add <id> --platform <tag>");
        return Ok(());
    }

    for platform in Platform::all() {
        let members: Vec<&Account> =
            accounts.iter().filter(|a| a.platform == platform).collect();
        if members.is_empty() {
            continue;
        }
        println!("{}", platform.label());
        for account in members {
            println!("  {}", account.id);
        }
    }

    Ok(())
}
