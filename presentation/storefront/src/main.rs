use dotenvy::dotenv;
use tracing::info;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, session::ShoppingSession};

/// Storefront entry point
///
/// Wires the stores to the mock adapters and replays a shopping visit:
/// - config/: simulated backend latencies
/// - setup/: dependency injection and the scripted session
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.stores)?;

    // 5. Run the session
    let report = ShoppingSession::run(&container).await?;
    info!(?report, "Session finished");

    Ok(())
}
