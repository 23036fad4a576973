//! Provides rate retrieval for the application.

use anyhow::Result;
use async_trait::async_trait;

use crate::rates::{CurrencyPair, Rate};

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Rate>;
}
