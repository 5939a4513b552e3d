//! Error types for the acceptance harness

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A wait predicate never became true within its budget. The most
    /// common failure in the suite: either the page is slow/broken or the
    /// locator is wrong.
    #[error("timed out after {waited:?} waiting for {what}")]
    Timeout { what: String, waited: Duration },

    /// An immediate (non-waited) lookup found no matches. Raised only by
    /// `find_now`; absence checks use `count_now` and treat zero as success.
    #[error("no element matches {0}")]
    ElementNotFound(String),

    /// `goto_form_with_retry` kept bouncing back to the index/login page.
    #[error("navigation to {target} failed after {attempts} attempts, last URL: {last_url}")]
    NavigationRetryExhausted {
        target: String,
        attempts: usize,
        last_url: String,
    },

    /// A scenario expectation was violated. The primary failure signal a
    /// scenario author raises on wrong text, wrong URL or wrong state.
    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    /// The application under test did not answer the reachability probe.
    #[error("application at {url} unreachable after {attempts} probes")]
    AppUnreachable { url: String, attempts: usize },

    /// The WebDriver session could not be established.
    #[error("session startup failed: {0}")]
    SessionStartup(String),

    #[error("WebDriver command error: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Scenario-side assertion that fails with [`Error::AssertionFailed`]
/// instead of panicking, so the failure flows through the artifact
/// boundary before reaching the test runner.
#[macro_export]
macro_rules! expect {
    ($cond:expr, $($msg:tt)+) => {
        if !$cond {
            return Err($crate::Error::AssertionFailed(format!($($msg)+)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_names_the_target() {
        let err = Error::Timeout {
            what: "[name='Username']".into(),
            waited: Duration::from_secs(10),
        };
        let msg = err.to_string();
        assert!(msg.contains("[name='Username']"));
        assert!(msg.contains("10s"));
    }

    #[test]
    fn retry_exhausted_reports_attempts_and_url() {
        let err = Error::NavigationRetryExhausted {
            target: "/Prescriptions/new".into(),
            attempts: 2,
            last_url: "http://localhost:5070/?page=%2FIndex".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2 attempts"));
        assert!(msg.contains("%2FIndex"));
    }

    #[test]
    fn expect_macro_raises_assertion_failed() {
        fn check(flag: bool) -> Result<()> {
            expect!(flag, "flag was {}", flag);
            Ok(())
        }
        assert!(check(true).is_ok());
        match check(false) {
            Err(Error::AssertionFailed(msg)) => assert_eq!(msg, "flag was false"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
