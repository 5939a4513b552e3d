//! Session lifecycle management
//!
//! One [`Session`] wraps one isolated browser for exactly one scenario.
//! Scenarios never share a session; the startup cost buys freedom from
//! cookie/state bleed between tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::{Error, Result};

/// Handle to one live browser session.
///
/// Cloning shares the same underlying WebDriver session; the clone is a
/// handle, not a second browser.
#[derive(Clone)]
pub struct Session {
    pub(crate) client: Client,
    config: SessionConfig,
    closed: Arc<AtomicBool>,
}

impl Session {
    /// Probe the application, then start a fresh browser.
    pub async fn connect(config: SessionConfig) -> Result<Self> {
        wait_until_reachable(&config).await?;

        info!(
            "Starting {} browser session against {}",
            if config.headless { "headless" } else { "headed" },
            config.base_url
        );

        let client = ClientBuilder::native()
            .capabilities(capabilities(&config))
            .connect(&config.webdriver_url)
            .await
            .map_err(|e| {
                Error::SessionStartup(format!(
                    "cannot connect to WebDriver at {}: {}",
                    config.webdriver_url, e
                ))
            })?;

        Ok(Self {
            client,
            config,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Navigate to a portal path such as `/Prescriptions`.
    pub async fn goto(&self, path: &str) -> Result<()> {
        let url = self.config.url(path);
        info!("Navigating to {url}");
        self.client.goto(&url).await?;
        Ok(())
    }

    /// Reload the current page.
    pub async fn refresh(&self) -> Result<()> {
        info!("Refreshing current page");
        self.client.refresh().await?;
        Ok(())
    }

    pub async fn current_url(&self) -> Result<String> {
        Ok(self.client.current_url().await?.to_string())
    }

    /// Raw PNG of the current page.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        Ok(self.client.screenshot().await?)
    }

    /// Close the browser. Runs on every scenario exit path and is safe to
    /// call more than once; errors from an already-dead browser are logged
    /// and discarded, never raised.
    pub async fn teardown(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("Tearing down browser session");
        if let Err(e) = self.client.clone().close().await {
            warn!("Ignoring error while closing browser: {e}");
        }
    }
}

fn capabilities(config: &SessionConfig) -> serde_json::map::Map<String, serde_json::Value> {
    let mut args = vec![
        "--no-sandbox",
        "--disable-dev-shm-usage",
        "--ignore-certificate-errors",
    ];
    if config.headless {
        args.push("--headless");
    }

    let mut caps = serde_json::map::Map::new();
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps.insert("acceptInsecureCerts".to_string(), json!(true));
    caps.insert(
        "timeouts".to_string(),
        json!({ "implicit": config.wait_timeout.as_millis() as u64 }),
    );
    caps
}

/// Poll the application root until it answers, so a down portal fails fast
/// with [`Error::AppUnreachable`] instead of burning browser startup and a
/// wait timeout per scenario.
async fn wait_until_reachable(config: &SessionConfig) -> Result<()> {
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(Duration::from_secs(2))
        .build()?;

    let started = std::time::Instant::now();
    let mut attempts = 0;

    while started.elapsed() < config.wait_timeout {
        attempts += 1;
        match client.get(&config.base_url).send().await {
            // Any HTTP answer means the app is up; scenarios judge content.
            Ok(_) => return Ok(()),
            Err(e) => {
                if attempts == 1 {
                    info!("Waiting for application at {}...", config.base_url);
                }
                if !e.is_connect() && !e.is_timeout() {
                    warn!("Reachability probe error: {e}");
                }
            }
        }
        sleep(config.poll_interval).await;
    }

    Err(Error::AppUnreachable {
        url: config.base_url.clone(),
        attempts,
    })
}
