//! Session configuration resolved from the environment

use std::time::Duration;

/// How long a single wait operation may take before failing with
/// `Timeout`. Mirrors the implicit timeout configured on the browser.
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Polling cadence of the wait engine.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Per-session configuration. One value is resolved per test from the
/// environment; the wait budget is fixed for the whole suite.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Root URL of the portal under test.
    pub base_url: String,

    /// WebDriver endpoint (chromedriver).
    pub webdriver_url: String,

    /// Run the browser without a visible window.
    pub headless: bool,

    /// Budget for every wait operation.
    pub wait_timeout: Duration,

    /// Wait-engine polling interval.
    pub poll_interval: Duration,
}

impl SessionConfig {
    /// Resolve configuration from the environment.
    ///
    /// Returns `None` when `BASE_URL` is unset: the caller must skip the
    /// scenario rather than fail it.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("BASE_URL").ok()?;
        let headless = std::env::var("HEADLESS")
            .map(|v| parse_headless(&v))
            .unwrap_or(false);
        let webdriver_url = std::env::var("WEBDRIVER_URL")
            .unwrap_or_else(|_| DEFAULT_WEBDRIVER_URL.to_string());

        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            webdriver_url,
            headless,
            wait_timeout: WAIT_TIMEOUT,
            poll_interval: POLL_INTERVAL,
        })
    }

    /// Absolute URL for a portal path such as `/Prescriptions`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn parse_headless(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_flag_is_case_insensitive() {
        assert!(parse_headless("true"));
        assert!(parse_headless("TRUE"));
        assert!(parse_headless("True"));
        assert!(!parse_headless("false"));
        assert!(!parse_headless("1"));
        assert!(!parse_headless(""));
    }

    #[test]
    fn url_joins_base_and_path() {
        let config = SessionConfig {
            base_url: "http://localhost:5070".into(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.into(),
            headless: true,
            wait_timeout: WAIT_TIMEOUT,
            poll_interval: POLL_INTERVAL,
        };
        assert_eq!(config.url("/Users"), "http://localhost:5070/Users");
    }
}
