//! Failure artifacts and the scenario boundary
//!
//! [`run_scenario`] is the outer exception boundary every scenario runs
//! inside: it resolves configuration (skipping when no target is set),
//! owns the session lifecycle, and captures a screenshot before a failure
//! propagates to the test runner.

use std::future::Future;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{error, info, warn};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::session::Session;

/// `{test}_{yyyyMMdd_HHmmss}.png`. Two failures of the same test within
/// the same second collide; accepted limitation of the naming scheme.
pub fn artifact_filename(test_name: &str, at: DateTime<Local>) -> String {
    format!("{}_{}.png", test_name, at.format("%Y%m%d_%H%M%S"))
}

fn write_artifact(dir: &Path, filename: &str, png: &[u8]) -> Result<PathBuf> {
    let path = dir.join(filename);
    std::fs::write(&path, png)?;
    Ok(path)
}

/// Capture the current browser state. A capture failure is logged and
/// swallowed so it never masks the scenario failure that triggered it.
pub async fn capture_failure(session: &Session, test_name: &str) {
    let result = async {
        let png = session.screenshot().await?;
        write_artifact(
            Path::new("."),
            &artifact_filename(test_name, Local::now()),
            &png,
        )
    }
    .await;

    match result {
        Ok(path) => info!("Screenshot saved: {}", path.display()),
        Err(e) => error!("Failed to take screenshot: {e}"),
    }
}

/// Run one scenario inside the standard lifecycle:
///
/// - skip (not fail) when `BASE_URL` is unset,
/// - one fresh session per scenario,
/// - screenshot keyed by `test_name` on any failure,
/// - teardown on every exit path,
/// - the scenario's own result propagates unchanged.
pub async fn run_scenario<F, Fut>(test_name: &str, body: F) -> Result<()>
where
    F: FnOnce(Session) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    crate::init_logging();

    let Some(config) = SessionConfig::from_env() else {
        warn!("{test_name} skipped because BASE_URL is not set");
        return Ok(());
    };

    info!("=== Starting {test_name} ===");
    let session = Session::connect(config).await?;

    let outcome = body(session.clone()).await;
    match &outcome {
        Ok(()) => info!("=== {test_name} PASSED ==="),
        Err(e) => {
            error!("{test_name} FAILED: {e}");
            capture_failure(&session, test_name).await;
        }
    }

    session.teardown().await;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_is_test_name_plus_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 8, 7, 14, 30, 9).unwrap();
        assert_eq!(
            artifact_filename("BE_1_1_1_Failed", at),
            "BE_1_1_1_Failed_20260807_143009.png"
        );
    }

    #[test]
    fn artifacts_are_written_where_asked() {
        let dir = tempfile::tempdir().unwrap();
        let at = Local.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap();
        let path = write_artifact(
            dir.path(),
            &artifact_filename("PT_8_1_2_Failed", at),
            b"\x89PNG",
        )
        .unwrap();
        assert!(path.ends_with("PT_8_1_2_Failed_20260807_090000.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");
    }
}
