use anyhow::Result;
use clap::Parser;

use glados_app::presentation::bootstrap;
use glados_app::presentation::cli::Cli;
use glados_infrastructure::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    if let Err(e) = logging::init_logger(cli.log_dir.as_deref()) {
        eprintln!("⚠️  Failed to initialize logging: {}", e);
    }

    bootstrap::run(&cli, |name| std::env::var(name).ok()).await
}
