use std::env;
use std::time::Duration;

use auth::demo_authenticator::DEFAULT_AUTH_LATENCY;
use business::application::search::store::DEFAULT_SEARCH_LATENCY;

/// Simulated latencies of the mock backends
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub search_latency: Duration,
    pub auth_latency: Duration,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - SEARCH_LATENCY_MS: delay before search results land (default: 300)
    /// - AUTH_LATENCY_MS: delay of sign-in and registration (default: 1500)
    pub fn from_env() -> Self {
        Self {
            search_latency: latency_from(
                env::var("SEARCH_LATENCY_MS").ok(),
                DEFAULT_SEARCH_LATENCY,
            ),
            auth_latency: latency_from(env::var("AUTH_LATENCY_MS").ok(), DEFAULT_AUTH_LATENCY),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            search_latency: DEFAULT_SEARCH_LATENCY,
            auth_latency: DEFAULT_AUTH_LATENCY,
        }
    }
}

/// Milliseconds from `value`, or `default` when unset or not a number.
fn latency_from(value: Option<String>, default: Duration) -> Duration {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
