//! Collects one rate per configured pair into a complete set.

use anyhow::Result;
use tracing::debug;

use crate::rate_provider::RateProvider;
use crate::rates::{CurrencyPair, RateSet};

/// Fetches every configured pair in order, short-circuiting on the first
/// failure. Either a complete set comes back or none at all.
pub async fn fetch_all(provider: &dyn RateProvider, pairs: &[CurrencyPair]) -> Result<RateSet> {
    let mut rates = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let rate = provider.fetch_rate(pair).await?;
        debug!(pair = %pair, value = rate.value, "Fetched rate");
        rates.push(rate);
    }

    Ok(rates)
}
