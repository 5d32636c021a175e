//! Configuration for the lab website server.

use std::time::Duration;

/// Remote search API constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Minimum spacing between outbound requests without an API key (1 req/s).
    pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(1);

    /// Minimum spacing between outbound requests with an API key (10 req/s).
    pub const MIN_REQUEST_INTERVAL_WITH_KEY: Duration = Duration::from_millis(100);

    /// Results requested per fetch.
    pub const PAGE_SIZE: u32 = 10;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields needed to render a publication card.
    pub const PUBLICATION: &[&str] = &["title", "year", "authors", "venue", "url"];
}

/// Lab-specific constants.
pub mod lab {
    use std::time::Duration;

    /// Name the author filter looks for.
    pub const PRINCIPAL_NAME: &str = "Young Im Cho";

    /// Visitor sessions are dropped after this much inactivity.
    pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(1800);

    /// Maximum number of live visitor sessions.
    pub const SESSION_CAPACITY: u64 = 10_000;

    /// Simulated contact submission latency.
    pub const CONTACT_DELAY: Duration = Duration::from_secs(2);

    /// Upper bound on concurrently served requests.
    pub const MAX_CONCURRENT_REQUESTS: usize = 256;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Minimum spacing between outbound requests. Zero disables throttling.
    pub min_request_interval: Duration,

    /// Results requested per fetch.
    pub page_size: u32,

    /// Author the publications panel filters for.
    pub principal_name: String,

    /// Visitor session idle expiry.
    pub session_idle_ttl: Duration,

    /// Maximum number of visitor sessions.
    pub session_capacity: u64,

    /// Simulated contact submission latency.
    pub contact_delay: Duration,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// The outbound throttle is relaxed when a key is present.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let min_request_interval = if api_key.is_some() {
            api::MIN_REQUEST_INTERVAL_WITH_KEY
        } else {
            api::MIN_REQUEST_INTERVAL
        };
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            min_request_interval,
            page_size: api::PAGE_SIZE,
            principal_name: lab::PRINCIPAL_NAME.to_string(),
            session_idle_ttl: lab::SESSION_IDLE_TTL,
            session_capacity: lab::SESSION_CAPACITY,
            contact_delay: lab::CONTACT_DELAY,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            min_request_interval: Duration::ZERO,
            page_size: api::PAGE_SIZE,
            principal_name: lab::PRINCIPAL_NAME.to_string(),
            session_idle_ttl: Duration::from_secs(60),
            session_capacity: 100,
            contact_delay: Duration::ZERO,
        }
    }

    /// Create configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok().filter(|k| !k.is_empty());
        let mut config = Self::new(api_key);

        if let Ok(name) = std::env::var("LAB_PRINCIPAL_NAME") {
            if name.trim().is_empty() {
                anyhow::bail!("LAB_PRINCIPAL_NAME must not be blank");
            }
            config.principal_name = name;
        }

        Ok(config)
    }

    /// Replace the API key, relaxing the outbound throttle accordingly.
    #[must_use]
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self.min_request_interval = api::MIN_REQUEST_INTERVAL_WITH_KEY;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.min_request_interval, api::MIN_REQUEST_INTERVAL);
    }

    #[test]
    fn test_config_with_api_key_relaxes_throttle() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.min_request_interval, api::MIN_REQUEST_INTERVAL_WITH_KEY);
    }

    #[test]
    fn test_with_api_key_keeps_other_settings() {
        let mut config = Config::default();
        config.principal_name = "Ada Lovelace".to_string();
        let config = config.with_api_key("k".to_string());
        assert!(config.has_api_key());
        assert_eq!(config.principal_name, "Ada Lovelace");
        assert_eq!(config.min_request_interval, api::MIN_REQUEST_INTERVAL_WITH_KEY);
    }

    #[test]
    fn test_for_testing_disables_delays() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
        assert!(config.min_request_interval.is_zero());
        assert!(config.contact_delay.is_zero());
    }

    #[test]
    fn test_publication_fields() {
        assert_eq!(fields::PUBLICATION.join(","), "title,year,authors,venue,url");
    }
}
