use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::rate_provider::RateProvider;
use crate::rates::{CurrencyPair, Rate};

/// Hung upstreams must not stall a cycle past this bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct WiseRateProvider {
    base_url: String,
}

impl WiseRateProvider {
    pub fn new(base_url: &str) -> Self {
        WiseRateProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WiseRateResponse {
    source: String,
    target: String,
    value: f64,
    time: f64,
}

#[async_trait]
impl RateProvider for WiseRateProvider {
    #[instrument(
        name = "WiseRateFetch",
        skip(self),
        fields(pair = %pair)
    )]
    async fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Rate> {
        let url = format!(
            "{}/rates/live?source={}&target={}",
            self.base_url, pair.source, pair.target
        );
        debug!("Requesting rate from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("ratewatch/1.0")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for pair: {}", e, pair))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for pair: {}",
                response.status(),
                pair
            ));
        }

        let text = response.text().await?;

        let data: WiseRateResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", pair, e))?;

        Ok(Rate {
            pair: CurrencyPair::new(&data.source, &data.target),
            value: data.value,
            observed_at: data.time,
        })
    }
}
