pub mod config;
pub mod fetcher;
pub mod log;
pub mod message;
pub mod notifier;
pub mod notifiers;
pub mod providers;
pub mod rate_provider;
pub mod rates;
pub mod scheduler;

use anyhow::Result;
use tracing::{debug, info};

pub async fn run() -> Result<()> {
    info!("Rate notifier starting...");

    config::load_env_file();
    let config = config::AppConfig::default();
    debug!("Loaded config: {config:#?}");

    let provider = providers::wise::WiseRateProvider::new(&config.rate_source.base_url);
    let notifier = notifiers::lark::LarkNotifier::new();

    scheduler::run(&provider, &notifier, &config).await
}
