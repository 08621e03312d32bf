use clap::Parser;
use fortune_mock::{MockBackend, MockConfig};
use log::LevelFilter;
use std::str::FromStr;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "fortune-mock")]
#[command(about = "Mock fortune backend serving canned readings")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Delay every reading by this many milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = LevelFilter::from_str(&cli.log_level).unwrap_or(LevelFilter::Info);
    env_logger::Builder::new().filter_level(level).init();

    let mut config = MockConfig::default();
    if let Some(ms) = cli.delay_ms {
        config = config.with_delay(Duration::from_millis(ms));
    }

    let backend = MockBackend::bind(&cli.bind, config).await?;
    println!("Mock fortune backend at {}", backend.base_url());

    tokio::signal::ctrl_c().await?;
    backend.shutdown().await;
    Ok(())
}
