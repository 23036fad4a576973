//! Renders a rate set into the notification text.

use chrono::{DateTime, Local};

use crate::rates::{Rate, direction};

/// Display names for the currencies we track. Codes outside this table
/// render as themselves.
pub fn currency_display_name(code: &str) -> &str {
    match code {
        "USD" => "美金",
        "MYR" => "马币",
        "CNY" => "人民币",
        "HKD" => "港币",
        _ => code,
    }
}

/// Builds the notification body: one line per rate, in set order, each with
/// a direction glyph against the previous set, then an update timestamp.
/// Pure and deterministic for a given `now`.
pub fn render(current: &[Rate], previous: Option<&[Rate]>, now: DateTime<Local>) -> String {
    let mut lines: Vec<String> = current
        .iter()
        .map(|rate| {
            let name = currency_display_name(&rate.pair.source);
            let glyph = direction(&rate.pair, rate.value, previous).glyph();
            format!(
                "{}{}-{}, rate: {:.6} {}",
                name, rate.pair.source, rate.pair.target, rate.value, glyph
            )
        })
        .collect();

    lines.push(format!("Updated: {}", now.format("%Y-%m-%d %H:%M:%S")));
    lines.join("\n")
}
