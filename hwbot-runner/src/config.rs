//! Bot configuration
//!
//! Defines the credentials and tunables of the bot. Everything is read
//! once at startup and stays immutable for the lifetime of the process.

use std::time::Duration;

/// Default homework statuses endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Secrets the bot cannot run without
#[derive(Clone, Default)]
pub struct Credentials {
    /// OAuth token for the homework API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives notifications
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Names of the environment variables whose values are missing or empty
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Checks that every credential is present
    pub fn check_tokens(&self) -> bool {
        self.missing().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,

    /// Homework statuses endpoint, queried as-is
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles
    pub retry_period: Duration,

    /// How far back the first query reaches, in calendar months
    pub backfill_months: u32,

    /// Timeout applied to every outbound HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_period: Duration::from_secs(600),
            backfill_months: 3,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: Practicum homework statuses API)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - BACKFILL_MONTHS (optional, default: 3)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    ///
    /// Missing credentials are left empty and reported by [`Config::validate`].
    /// Unparseable or zero optional values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let credentials = Credentials {
            practicum_token: lookup("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: lookup("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: lookup("TELEGRAM_CHAT_ID").unwrap_or_default(),
        };

        let mut config = Self::new(credentials);

        if let Some(endpoint) = lookup("PRACTICUM_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(api_url) = lookup("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }

        if let Some(period) = lookup("RETRY_PERIOD")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&p| p > 0)
        {
            config.retry_period = Duration::from_secs(period);
        }

        if let Some(months) = lookup("BACKFILL_MONTHS").and_then(|s| s.parse::<u32>().ok()) {
            config.backfill_months = months;
        }

        if let Some(timeout) = lookup("REQUEST_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&t| t > 0)
        {
            config.request_timeout = Duration::from_secs(timeout);
        }

        config
    }

    /// Validates the configuration
    ///
    /// Only missing credentials are fatal. A malformed URL surfaces as a
    /// request error in the poll loop and is retried there.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.credentials.check_tokens() {
            anyhow::bail!(
                "missing required environment variables: {}",
                self.credentials.missing().join(", ")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn credentials() -> Credentials {
        Credentials {
            practicum_token: "p".to_string(),
            telegram_token: "t".to_string(),
            telegram_chat_id: "1".to_string(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::new(credentials());
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.backfill_months, 3);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_check_tokens() {
        assert!(credentials().check_tokens());

        let mut creds = credentials();
        creds.telegram_chat_id = String::new();
        assert!(!creds.check_tokens());
        assert_eq!(creds.missing(), vec!["TELEGRAM_CHAT_ID"]);
    }

    #[test]
    fn test_all_missing_reported() {
        let config = Config::from_lookup(lookup(&[("TELEGRAM_TOKEN", "  ")]));
        let err = config.validate().unwrap_err().to_string();

        assert!(err.contains("PRACTICUM_TOKEN"));
        assert!(err.contains("TELEGRAM_TOKEN"));
        assert!(err.contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "42"),
            ("RETRY_PERIOD", "60"),
            ("BACKFILL_MONTHS", "1"),
            ("REQUEST_TIMEOUT", "not-a-number"),
            ("PRACTICUM_ENDPOINT", "http://localhost:8000/api/"),
        ]));

        assert!(config.validate().is_ok());
        assert_eq!(config.credentials.telegram_chat_id, "42");
        assert_eq!(config.retry_period, Duration::from_secs(60));
        assert_eq!(config.backfill_months, 1);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.endpoint, "http://localhost:8000/api/");
    }

    #[test]
    fn test_malformed_urls_are_not_fatal() {
        let mut config = Config::new(credentials());
        config.endpoint = "practicum.yandex.ru/api/".to_string();
        config.telegram_api_url = "not-a-url".to_string();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_periods_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("RETRY_PERIOD", "0"),
            ("REQUEST_TIMEOUT", "0"),
        ]));

        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_debug_hides_tokens() {
        let rendered = format!("{:?}", Config::new(credentials()));
        assert!(rendered.contains("***"));
        assert!(!rendered.contains("practicum_token: \"p\""));
    }
}
