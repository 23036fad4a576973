use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::notifier::Notifier;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Lark custom-bot text message envelope.
#[derive(Debug, Serialize)]
struct LarkMessage<'a> {
    msg_type: &'a str,
    content: LarkContent<'a>,
}

#[derive(Debug, Serialize)]
struct LarkContent<'a> {
    text: &'a str,
}

pub struct LarkNotifier;

impl LarkNotifier {
    pub fn new() -> Self {
        LarkNotifier
    }
}

impl Default for LarkNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for LarkNotifier {
    async fn notify(&self, webhook_url: &str, text: &str) -> Result<()> {
        let message = LarkMessage {
            msg_type: "text",
            content: LarkContent { text },
        };
        debug!("Posting notification to webhook");

        let client = reqwest::Client::builder()
            .user_agent("ratewatch/1.0")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client
            .post(webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to deliver notification: {}", e))?;

        // The webhook acknowledges with exactly 200.
        if response.status() != StatusCode::OK {
            return Err(anyhow!(
                "Webhook returned status: {}",
                response.status()
            ));
        }

        Ok(())
    }
}
