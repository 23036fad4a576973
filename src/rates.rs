//! Rate observations and cycle-over-cycle comparison.

use std::fmt;

/// A (source, target) currency combination, e.g. USD-CNY.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    pub source: String,
    pub target: String,
}

impl CurrencyPair {
    pub fn new(source: &str, target: &str) -> Self {
        CurrencyPair {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// One rate observation as reported by the upstream source.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate {
    pub pair: CurrencyPair,
    pub value: f64,
    /// Upstream observation time as a unix epoch value. Carried through
    /// verbatim, not interpreted.
    pub observed_at: f64,
}

/// All rates for one cycle, one per configured pair, in configuration order.
pub type RateSet = Vec<Rate>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Unchanged,
}

impl Direction {
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Unchanged => "→",
        }
    }
}

/// Compares a current value against the matching rate in the previous set.
///
/// A missing baseline (no previous set, or the pair is not in it) counts as
/// first-seen and reports `Up`, so the very first notification still carries
/// an arrow.
pub fn direction(pair: &CurrencyPair, current_value: f64, previous: Option<&[Rate]>) -> Direction {
    let Some(previous) = previous else {
        return Direction::Up;
    };

    match previous.iter().find(|rate| rate.pair == *pair) {
        Some(prior) if current_value > prior.value => Direction::Up,
        Some(prior) if current_value < prior.value => Direction::Down,
        Some(_) => Direction::Unchanged,
        None => Direction::Up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(source: &str, target: &str, value: f64) -> Rate {
        Rate {
            pair: CurrencyPair::new(source, target),
            value,
            observed_at: 1_700_000_000.0,
        }
    }

    #[test]
    fn test_direction_against_previous_value() {
        let previous = vec![rate("USD", "CNY", 7.10)];
        let pair = CurrencyPair::new("USD", "CNY");

        assert_eq!(direction(&pair, 7.25, Some(&previous)), Direction::Up);
        assert_eq!(direction(&pair, 7.00, Some(&previous)), Direction::Down);
        assert_eq!(direction(&pair, 7.10, Some(&previous)), Direction::Unchanged);
    }

    #[test]
    fn test_direction_defaults_up_without_previous_set() {
        let pair = CurrencyPair::new("MYR", "HKD");
        assert_eq!(direction(&pair, 1.66, None), Direction::Up);
        assert_eq!(direction(&pair, 0.0, None), Direction::Up);
    }

    #[test]
    fn test_direction_defaults_up_for_unseen_pair() {
        let previous = vec![rate("USD", "CNY", 7.10)];
        let pair = CurrencyPair::new("MYR", "CNY");
        assert_eq!(direction(&pair, 1.68, Some(&previous)), Direction::Up);
    }

    #[test]
    fn test_pair_display() {
        assert_eq!(CurrencyPair::new("USD", "CNY").to_string(), "USD-CNY");
    }
}
