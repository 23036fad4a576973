//! Hour-aligned scheduling of the fetch, compare and notify cycle.

use anyhow::Result;
use chrono::{DateTime, Local, TimeDelta, Timelike};
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::{error, info};

use crate::config::{self, AppConfig};
use crate::fetcher;
use crate::message;
use crate::notifier::Notifier;
use crate::rate_provider::RateProvider;
use crate::rates::RateSet;

const CYCLE_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Computes the first wall-clock hour boundary strictly after `now`. An
/// instant exactly on a boundary belongs to the hour before it, so the next
/// firing is a full hour away.
pub fn next_hour_boundary(now: DateTime<Local>) -> DateTime<Local> {
    let into_hour = TimeDelta::minutes(now.minute() as i64)
        + TimeDelta::seconds(now.second() as i64)
        + TimeDelta::nanoseconds(now.nanosecond() as i64);
    now - into_hour + TimeDelta::hours(1)
}

/// Runs one cycle and returns the rate set to compare against next time.
///
/// The previous set only advances when a fetch succeeds; delivery failures
/// and a missing webhook URL do not hold it back, so comparisons always
/// anchor to the latest fetched rates.
pub async fn run_cycle(
    provider: &dyn RateProvider,
    notifier: &dyn Notifier,
    config: &AppConfig,
    previous: Option<RateSet>,
    webhook_url: Option<&str>,
    now: DateTime<Local>,
) -> Option<RateSet> {
    let current = match fetcher::fetch_all(provider, &config.pairs).await {
        Ok(rates) => rates,
        Err(e) => {
            error!(error = %e, "Failed to fetch rates, skipping cycle");
            return previous;
        }
    };

    match webhook_url {
        Some(url) => {
            let text = message::render(&current, previous.as_deref(), now);
            match notifier.notify(url, &text).await {
                Ok(()) => info!("Rate notification delivered"),
                Err(e) => error!(error = %e, "Failed to deliver notification"),
            }
        }
        None => error!("{} is not set, skipping notification", config::WEBHOOK_URL_ENV),
    }

    Some(current)
}

/// Sleeps until the next hour boundary, then ticks every hour forever. The
/// periodic timer keeps firings anchored to the boundary; cycle duration
/// does not accumulate as drift.
pub async fn run(
    provider: &dyn RateProvider,
    notifier: &dyn Notifier,
    config: &AppConfig,
) -> Result<()> {
    let first_fire = next_hour_boundary(Local::now());
    let wait = (first_fire - Local::now())
        .to_std()
        .unwrap_or(Duration::ZERO);
    info!(
        "Waiting {:?} for the first cycle at {}",
        wait,
        first_fire.format("%Y-%m-%d %H:%M:%S")
    );

    let mut ticker = time::interval_at(Instant::now() + wait, CYCLE_PERIOD);
    let mut previous: Option<RateSet> = None;

    loop {
        ticker.tick().await;
        info!(
            "Running rate notification cycle - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        previous = run_cycle(
            provider,
            notifier,
            config,
            previous,
            config::webhook_url().as_deref(),
            Local::now(),
        )
        .await;
    }
}
