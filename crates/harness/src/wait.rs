//! Wait engine
//!
//! Every element access in the suite goes through one of these bounded
//! waits. The probe is re-run against the live DOM on each poll, so a
//! returned element is the most recent successful lookup, never a stale
//! handle from an earlier page state.

use std::future::Future;
use std::time::{Duration, Instant};

use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use tokio::time::sleep;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::Session;

/// Re-evaluate `probe` until it yields a value or `timeout` elapses.
///
/// `what` names the awaited condition in the resulting [`Error::Timeout`].
pub(crate) async fn poll<T, F, Fut>(
    timeout: Duration,
    interval: Duration,
    what: &str,
    mut probe: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let started = Instant::now();
    loop {
        if let Some(found) = probe().await? {
            return Ok(found);
        }
        if started.elapsed() >= timeout {
            return Err(Error::Timeout {
                what: what.to_string(),
                waited: started.elapsed(),
            });
        }
        sleep(interval).await;
    }
}

/// Map a lookup miss to "not yet" so the poll loop keeps going; any other
/// driver error aborts the wait.
fn found(lookup: std::result::Result<Element, CmdError>) -> Result<Option<Element>> {
    match lookup {
        Ok(element) => Ok(Some(element)),
        Err(CmdError::NoSuchElement(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Session {
    /// Wait until the element is present and attached to the DOM.
    pub async fn wait_for(&self, locator: &Locator) -> Result<Element> {
        let client = self.client.clone();
        let locator = locator.clone();
        let what = locator.to_string();
        let config = self.config().clone();
        poll(config.wait_timeout, config.poll_interval, &what, move || {
            let client = client.clone();
            let locator = locator.clone();
            async move { found(client.find(locator.query()).await) }
        })
        .await
    }

    /// Wait until the element is present *and* rendered visible.
    pub async fn wait_for_visible(&self, locator: &Locator) -> Result<Element> {
        let client = self.client.clone();
        let locator = locator.clone();
        let what = format!("{locator} to be visible");
        let config = self.config().clone();
        poll(config.wait_timeout, config.poll_interval, &what, move || {
            let client = client.clone();
            let locator = locator.clone();
            async move {
                match found(client.find(locator.query()).await)? {
                    Some(element) if element.is_displayed().await? => Ok(Some(element)),
                    _ => Ok(None),
                }
            }
        })
        .await
    }

    /// Wait until the element's attribute equals `expected`.
    pub async fn wait_for_attr(
        &self,
        locator: &Locator,
        attr: &str,
        expected: &str,
    ) -> Result<Element> {
        let client = self.client.clone();
        let locator = locator.clone();
        let attr = attr.to_string();
        let expected = expected.to_string();
        let what = format!("{locator} attribute `{attr}` == `{expected}`");
        let config = self.config().clone();
        poll(config.wait_timeout, config.poll_interval, &what, move || {
            let client = client.clone();
            let locator = locator.clone();
            let attr = attr.clone();
            let expected = expected.clone();
            async move {
                match found(client.find(locator.query()).await)? {
                    Some(element) => {
                        if element.attr(&attr).await?.as_deref() == Some(expected.as_str()) {
                            Ok(Some(element))
                        } else {
                            Ok(None)
                        }
                    }
                    None => Ok(None),
                }
            }
        })
        .await
    }

    /// Wait until at least one element matches.
    pub async fn wait_for_some(&self, locator: &Locator) -> Result<Vec<Element>> {
        let client = self.client.clone();
        let locator = locator.clone();
        let what = format!("at least one match for {locator}");
        let config = self.config().clone();
        poll(config.wait_timeout, config.poll_interval, &what, move || {
            let client = client.clone();
            let locator = locator.clone();
            async move {
                let matches = client.find_all(locator.query()).await?;
                Ok(if matches.is_empty() { None } else { Some(matches) })
            }
        })
        .await
    }

    /// Wait until the element's `value` property is non-blank; returns it.
    pub async fn wait_for_nonempty_value(&self, locator: &Locator) -> Result<String> {
        let client = self.client.clone();
        let locator = locator.clone();
        let what = format!("{locator} to hold a non-empty value");
        let config = self.config().clone();
        poll(config.wait_timeout, config.poll_interval, &what, move || {
            let client = client.clone();
            let locator = locator.clone();
            async move {
                match found(client.find(locator.query()).await)? {
                    Some(element) => {
                        let value = element.prop("value").await?.unwrap_or_default();
                        if value.trim().is_empty() {
                            Ok(None)
                        } else {
                            Ok(Some(value))
                        }
                    }
                    None => Ok(None),
                }
            }
        })
        .await
    }

    /// Wait until the current URL satisfies `pred`; returns the URL.
    pub async fn wait_for_url<P>(&self, what: &str, pred: P) -> Result<String>
    where
        P: Fn(&str) -> bool,
    {
        let client = self.client.clone();
        let config = self.config().clone();
        let pred = std::sync::Arc::new(pred);
        poll(config.wait_timeout, config.poll_interval, what, move || {
            let client = client.clone();
            let pred = pred.clone();
            async move {
                let url = client.current_url().await?.to_string();
                Ok(if pred(&url) { Some(url) } else { None })
            }
        })
        .await
    }

    /// Wait until the current URL contains `part`.
    pub async fn wait_for_url_contains(&self, part: &str) -> Result<String> {
        self.wait_for_url(&format!("URL to contain `{part}`"), |url| url.contains(part))
            .await
    }

    /// Wait until the current URL no longer contains `part`.
    pub async fn wait_for_url_not_contains(&self, part: &str) -> Result<String> {
        self.wait_for_url(&format!("URL to leave `{part}`"), |url| !url.contains(part))
            .await
    }
}
