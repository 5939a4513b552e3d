//! MediPort browser-interaction harness
//!
//! This crate is the shared foundation of the MediPort acceptance suite:
//! every scenario drives the portal through these helpers instead of
//! touching the WebDriver client directly, so that element access is
//! always routed through the wait engine and every interaction leaves a
//! step-log trail.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Scenario (tests/*.rs)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  run_scenario(name, body)                                   │
//! │    ├── SessionConfig::from_env()  -> skip if BASE_URL unset │
//! │    ├── Session::connect()         -> one browser per test   │
//! │    ├── body(session)              -> nav + interact + wait  │
//! │    ├── capture_failure()          -> screenshot on Err      │
//! │    └── session.teardown()         -> always, idempotent     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  nav: login, goto, goto_form_with_retry                     │
//! │  interact: type_into, click, forced_click, set_field_value  │
//! │  wait: wait_for, wait_for_visible, wait_for_url, ...        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod interact;
pub mod locator;
pub mod nav;
pub mod session;
pub mod wait;

pub use artifact::run_scenario;
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use locator::Locator;
pub use session::Session;

/// Element handle scenarios receive back from the wait engine.
pub use fantoccini::elements::Element;

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Initialize the process-wide step-log sink.
///
/// Safe to call from every scenario; only the first call installs the
/// subscriber. The filter defaults to `info` and can be overridden with
/// `RUST_LOG`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("info".parse().expect("valid directive")),
            )
            .with_test_writer()
            .try_init();
    });
}
