//! Delivery abstraction for notification messages.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, webhook_url: &str, text: &str) -> Result<()>;
}
