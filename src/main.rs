use anyhow::Result;
use ratewatch::log::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let result = ratewatch::run().await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
