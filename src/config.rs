use std::env;
use tracing::debug;

use crate::rates::CurrencyPair;

/// Environment variable holding the Lark webhook URL.
pub const WEBHOOK_URL_ENV: &str = "LARK_WEBHOOK_URL";

#[derive(Debug, Clone)]
pub struct RateSourceConfig {
    pub base_url: String,
}

impl Default for RateSourceConfig {
    fn default() -> Self {
        RateSourceConfig {
            base_url: "https://wise.com".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pairs to fetch each cycle, in notification order.
    pub pairs: Vec<CurrencyPair>,
    pub rate_source: RateSourceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            pairs: vec![
                CurrencyPair::new("USD", "CNY"),
                CurrencyPair::new("MYR", "CNY"),
                CurrencyPair::new("MYR", "HKD"),
            ],
            rate_source: RateSourceConfig::default(),
        }
    }
}

/// Loads an optional `.env` file into the process environment. Missing
/// files are fine; the process environment is used as-is then.
pub fn load_env_file() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(_) => debug!("No .env file found, using process environment"),
    }
}

/// Reads the webhook URL from the environment. Looked up on every cycle so
/// the variable can be supplied without restarting the process. An empty
/// value counts as unset.
pub fn webhook_url() -> Option<String> {
    env::var(WEBHOOK_URL_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_pairs_in_order() {
        let config = AppConfig::default();

        assert_eq!(
            config.pairs,
            vec![
                CurrencyPair::new("USD", "CNY"),
                CurrencyPair::new("MYR", "CNY"),
                CurrencyPair::new("MYR", "HKD"),
            ]
        );
        assert_eq!(config.rate_source.base_url, "https://wise.com");
    }

    #[test]
    fn test_webhook_url_from_environment() {
        // All mutations of the variable live in this single test to keep
        // parallel test runs from racing on process environment.
        unsafe {
            env::remove_var(WEBHOOK_URL_ENV);
        }
        assert_eq!(webhook_url(), None);

        unsafe {
            env::set_var(WEBHOOK_URL_ENV, "");
        }
        assert_eq!(webhook_url(), None, "empty value counts as unset");

        unsafe {
            env::set_var(WEBHOOK_URL_ENV, "https://open.larksuite.com/hook/abc");
        }
        assert_eq!(
            webhook_url(),
            Some("https://open.larksuite.com/hook/abc".to_string())
        );

        unsafe {
            env::remove_var(WEBHOOK_URL_ENV);
        }
    }

    #[test]
    fn test_env_file_loading() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "RATEWATCH_TEST_MARKER=from-env-file").unwrap();

        dotenvy::from_path(file.path()).expect("Failed to load env file");

        assert_eq!(
            env::var("RATEWATCH_TEST_MARKER").unwrap(),
            "from-env-file"
        );
    }
}
