use clap::Parser;
use portico::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "portico", about = "Config-driven navigation shell")]
struct Args {
    /// Remote configuration endpoint (overrides config file and env)
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to portico.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("portico.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let local = config::load_config().unwrap_or_else(|e| {
        log::warn!("Using default settings: {}", e);
        config::PorticoConfig::default()
    });
    let resolved = config::resolve(&local, args.endpoint.as_deref());

    log::info!("Portico starting up, endpoint: {}", resolved.endpoint);

    portico::tui::run(resolved)
}
