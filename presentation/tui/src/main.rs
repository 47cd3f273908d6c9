use dotenvy::dotenv;

mod config;
mod setup;
mod ui;

use config::{app_config::AppConfig, logging_config::init_tracing};
use setup::{dependency_injection::DependencyContainer, terminal::TerminalRunner};

/// Terminal catalog entry point
///
/// Loads configuration, routes logs to a file, wires dependencies and hands
/// the terminal to the UI loop.
///
/// - config/: Environment driven configuration (API, logging, UI)
/// - setup/: Dependency injection and terminal lifecycle
/// - ui/: Application state, key handling and widgets
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = AppConfig::from_env()?;

    // 3. Initialize tracing into the log file, the terminal belongs to the UI
    init_tracing(&config.logging)?;
    tracing::info!(target: logger::LOG_TARGET, "Using catalog at {}", config.api.base_url);

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.api);

    // 5. Run the terminal UI
    TerminalRunner::run(config.ui, container).await?;

    Ok(())
}
