use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use saju_client::{FortuneClient, FortuneClientFactory, HEALTH_CHECK_MESSAGE};
use saju_core::catalog::FORTUNE_CARDS;
use saju_core::{ConfigLoader, SajuConfig, SectionParser};
use saju_types::{FortuneResponse, FortuneType, Gender};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

mod render;
mod session;
mod viewer;

use session::{FormPrefill, SessionOptions};

#[derive(Parser, Debug)]
#[clap(name = "saju", author, version = "0.1.0", about = "사주 and daily fortune readings from the terminal")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(long, short, global = true, help = "Configuration file (default: <config dir>/saju/config.yaml)")]
    config: Option<PathBuf>,

    #[clap(long, global = true, help = "Backend base URL, e.g. http://localhost:8080/api")]
    api_url: Option<String>,

    #[clap(long, short, global = true, help = "Log level (error, warn, info, debug, trace)")]
    log_level: Option<String>,

    #[clap(long, global = true, help = "Append logs to this file instead of stderr")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Request a reading; missing fields are asked for interactively
    Analyze(AnalyzeArgs),
    /// Split a saved reading into sections and print them
    Parse {
        file: PathBuf,

        #[clap(long = "type", short = 't', default_value = "saju")]
        fortune_type: FortuneType,
    },
    /// Check that the backend is reachable
    Health,
    /// List the reading types and whether they are available
    Catalog,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[clap(long = "type", short = 't', default_value = "saju", help = "saju, daily or tarot")]
    fortune_type: FortuneType,

    #[clap(long)]
    year: Option<String>,

    #[clap(long)]
    month: Option<String>,

    #[clap(long)]
    day: Option<String>,

    #[clap(long)]
    hour: Option<String>,

    #[clap(long)]
    minute: Option<String>,

    #[clap(long, help = "MALE or FEMALE")]
    gender: Option<Gender>,

    #[clap(long, help = "Print every section expanded and exit")]
    expand_all: bool,
}

impl AnalyzeArgs {
    fn prefill(&self) -> FormPrefill {
        FormPrefill {
            year: self.year.clone(),
            month: self.month.clone(),
            day: self.day.clone(),
            hour: self.hour.clone(),
            minute: self.minute.clone(),
            gender: self.gender,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load(cli.config.as_deref()).await?;
    if let Some(api_url) = &cli.api_url {
        config.api.base_url = api_url.trim().to_string();
        config.validate()?;
    }

    let interactive = matches!(cli.command, Commands::Analyze(ref args) if !args.expand_all)
        && std::io::stdin().is_terminal();
    init_logging(&cli, &config, interactive)?;
    log::debug!("Using backend at {}", config.api.base_url);

    match cli.command {
        Commands::Analyze(args) => {
            let options = SessionOptions {
                fortune_type: args.fortune_type,
                prefill: args.prefill(),
                expand_all: args.expand_all,
                interactive,
            };
            session::run(&config, options).await
        }
        Commands::Parse { file, fortune_type } => parse_file(&file, fortune_type).await,
        Commands::Health => health(&config).await,
        Commands::Catalog => {
            print_catalog();
            Ok(())
        }
    }
}

/// Logs go to `--log-file` (or `logging.file`) when set. Interactive sessions
/// logging to stderr default to `warn` so prompts stay readable.
fn init_logging(cli: &Cli, config: &SajuConfig, interactive: bool) -> Result<()> {
    let log_file = cli.log_file.as_ref().or(config.logging.file.as_ref());

    let level = match &cli.log_level {
        Some(level) => level.parse().unwrap_or(LevelFilter::Info),
        None if interactive && log_file.is_none() => LevelFilter::Warn,
        None => config.logging.level.parse().unwrap_or(LevelFilter::Info),
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

async fn parse_file(path: &Path, fortune_type: FortuneType) -> Result<()> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let parser = SectionParser::for_fortune_type(fortune_type);
    let sections = parser.parse(&text);
    log::info!("Parsed {} sections from {}", sections.len(), path.display());

    let response = FortuneResponse::new(text, "");
    viewer::print_expanded(fortune_type, parser.table(), &response, &sections)
}

async fn health(config: &SajuConfig) -> Result<()> {
    let client = FortuneClientFactory::create_http_client(config.api.base_url.clone(), config.timeout());
    match client.health_check().await {
        Ok(status) if status.is_up() => {
            println!("✓ {} ({})", config.api.base_url, status.status);
            Ok(())
        }
        Ok(status) => {
            log::warn!("Backend reported status {}", status.status);
            bail!("{} (status: {})", HEALTH_CHECK_MESSAGE, status.status)
        }
        Err(err) => {
            log::error!("Health check failed: {}", err);
            bail!(HEALTH_CHECK_MESSAGE)
        }
    }
}

fn print_catalog() {
    for card in FORTUNE_CARDS.iter() {
        let availability = if card.enabled {
            "이용 가능"
        } else if card.coming_soon {
            "준비 중"
        } else {
            "이용 불가"
        };
        println!(
            "{} {:<8} [{}] {} ({})",
            card.icon,
            card.title,
            card.fortune_type,
            card.description,
            availability
        );
    }
}
