//! Client configuration.
//!
//! A [`Config`] is built once and never changes afterwards. Clients share it
//! behind an `Arc`, so it is safe to use from many tasks at the same time.

use crate::retry::{RetryPolicy, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY};
use crate::{Error, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

const ENV_SECRET_KEY: &str = "PAYSTACK_SECRET_KEY";
const ENV_PAYMENT_URL: &str = "PAYSTACK_PAYMENT_URL";
const ENV_RETRY_ATTEMPTS: &str = "PAYSTACK_RETRY_ATTEMPTS";
const ENV_RETRY_DELAY: &str = "PAYSTACK_RETRY_DELAY";

/// Immutable settings for a [`PaystackClient`](crate::PaystackClient).
///
/// # Examples
///
/// ```
/// use paystack::Config;
/// use std::time::Duration;
///
/// let config = Config::builder("sk_test_xxx")
///     .retry_attempts(5)
///     .retry_delay(Duration::from_millis(300))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_str(), "https://api.paystack.co/");
/// assert_eq!(config.retry_policy().max_attempts(), 5);
/// ```
#[derive(Clone)]
pub struct Config {
    secret_key: String,
    base_url: Url,
    retry_policy: RetryPolicy,
    timeout: Option<Duration>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("retry_policy", &self.retry_policy)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Starts a configuration for the given secret key.
    pub fn builder(secret_key: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(secret_key)
    }

    /// Reads the configuration from environment variables.
    ///
    /// Reads:
    /// - `PAYSTACK_SECRET_KEY` (required)
    /// - `PAYSTACK_PAYMENT_URL` (defaults to `https://api.paystack.co`)
    /// - `PAYSTACK_RETRY_ATTEMPTS` (defaults to 3)
    /// - `PAYSTACK_RETRY_DELAY` in milliseconds (defaults to 150)
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is missing or empty, or if a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup(ENV_SECRET_KEY).ok_or_else(|| {
            Error::ConfigurationError(format!("missing {} environment variable", ENV_SECRET_KEY))
        })?;

        let mut builder = ConfigBuilder::new(secret_key);

        if let Some(url) = lookup(ENV_PAYMENT_URL).filter(|url| !url.trim().is_empty()) {
            builder = builder.base_url(url);
        }
        if let Some(attempts) = lookup(ENV_RETRY_ATTEMPTS) {
            builder = builder.retry_attempts(parse_number(ENV_RETRY_ATTEMPTS, &attempts)?);
        }
        if let Some(delay) = lookup(ENV_RETRY_DELAY) {
            let millis: u64 = parse_number(ENV_RETRY_DELAY, &delay)?;
            builder = builder.retry_delay(Duration::from_millis(millis));
        }

        builder.build()
    }

    /// The secret key sent as the bearer token.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// The API root every request path is joined to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Attempts and delay applied to transport failures.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Per-request timeout, if one was set.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        Error::ConfigurationError(format!("{} is not a valid number: {:?}", name, value))
    })
}

/// Builder for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    secret_key: String,
    base_url: String,
    retry_attempts: usize,
    retry_delay: Duration,
    timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Creates a builder with the default base URL and retry settings.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            timeout: None,
        }
    }

    /// Overrides the API base URL, for example to target a mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the total number of attempts per request.
    pub fn retry_attempts(mut self, attempts: usize) -> Self {
        self.retry_attempts = attempts;
        self
    }

    /// Sets the fixed pause between attempts.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Sets a per-request timeout. Without one the transport default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates and freezes the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is empty or the base URL is not an
    /// absolute `http`/`https` URL.
    pub fn build(self) -> Result<Config> {
        let secret_key = self.secret_key.trim().to_string();
        if secret_key.is_empty() {
            return Err(Error::ConfigurationError(
                "Secret key is required".to_string(),
            ));
        }

        let base_url = Url::parse(self.base_url.trim())?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL must be an absolute http(s) URL: {}",
                base_url
            )));
        }

        Ok(Config {
            secret_key,
            base_url,
            retry_policy: RetryPolicy::new(self.retry_attempts, self.retry_delay),
            timeout: self.timeout,
        })
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
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_builder_defaults() {
        let config = Config::builder("sk_test_abc").build().unwrap();
        assert_eq!(config.secret_key(), "sk_test_abc");
        assert_eq!(config.base_url().as_str(), "https://api.paystack.co/");
        assert_eq!(config.retry_policy().max_attempts(), 3);
        assert_eq!(config.retry_policy().delay(), Duration::from_millis(150));
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_empty_secret_key_is_rejected() {
        let result = Config::builder("   ").build();
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            Config::builder("sk").base_url("not a url").build(),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            Config::builder("sk").base_url("ftp://files.example.com").build(),
            Err(Error::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_from_env_reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("PAYSTACK_SECRET_KEY", "sk_live_1"),
            ("PAYSTACK_PAYMENT_URL", "http://localhost:9000"),
            ("PAYSTACK_RETRY_ATTEMPTS", "5"),
            ("PAYSTACK_RETRY_DELAY", "40"),
        ]))
        .unwrap();

        assert_eq!(config.secret_key(), "sk_live_1");
        assert_eq!(config.base_url().as_str(), "http://localhost:9000/");
        assert_eq!(config.retry_policy().max_attempts(), 5);
        assert_eq!(config.retry_policy().delay(), Duration::from_millis(40));
    }

    #[test]
    fn test_from_env_requires_secret_key() {
        let result = Config::from_lookup(lookup(&[("PAYSTACK_RETRY_ATTEMPTS", "2")]));
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn test_from_env_rejects_malformed_numbers() {
        let result = Config::from_lookup(lookup(&[
            ("PAYSTACK_SECRET_KEY", "sk"),
            ("PAYSTACK_RETRY_DELAY", "soon"),
        ]));
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let config = Config::builder("sk_live_secret").build().unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("sk_live_secret"));
    }
}
