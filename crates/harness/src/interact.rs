//! Interaction helpers
//!
//! Typed wrappers around the wait engine. Every helper waits for its
//! target first and logs the step description, so scenario code never
//! touches an element the wait engine has not seen appear.

use fantoccini::elements::Element;
use serde_json::json;
use tracing::info;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::Session;

impl Session {
    /// Clear the field, then type `text` into it.
    pub async fn type_into(&self, locator: &Locator, text: &str, step: &str) -> Result<()> {
        info!("{step}");
        let element = self.wait_for(locator).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        info!("Entered text: {text}");
        Ok(())
    }

    /// Native click.
    pub async fn click(&self, locator: &Locator, step: &str) -> Result<()> {
        info!("{step}");
        let element = self.wait_for(locator).await?;
        element.click().await?;
        info!("Clicked element");
        Ok(())
    }

    /// Dispatch a click straight against the DOM node, bypassing native
    /// hit-testing. Escape hatch for submits that overlays or animation
    /// timing make unreliable; prefer [`Session::click`].
    pub async fn forced_click(&self, locator: &Locator, step: &str) -> Result<()> {
        info!("{step}");
        let element = self.wait_for(locator).await?;
        self.client
            .execute("arguments[0].click();", vec![serde_json::to_value(&element)?])
            .await?;
        info!("Clicked element via JavaScript (forced dispatch)");
        Ok(())
    }

    /// Forced click against an element a previous wait already produced,
    /// for flows that pick one element out of a waited collection.
    pub async fn forced_click_on(&self, element: &Element, step: &str) -> Result<()> {
        info!("{step}");
        self.client
            .execute("arguments[0].click();", vec![serde_json::to_value(element)?])
            .await?;
        info!("Clicked element via JavaScript (forced dispatch)");
        Ok(())
    }

    /// Assign `value` directly and fire a `change` event, so reactive
    /// client-side validation observes the update. Needed for date inputs
    /// and fields whose validation listens on change rather than keyup.
    pub async fn set_field_value(&self, locator: &Locator, value: &str, step: &str) -> Result<()> {
        info!("{step}");
        let element = self.wait_for(locator).await?;
        element.clear().await?;
        let node = serde_json::to_value(&element)?;
        self.client
            .execute(
                "arguments[0].value = arguments[1];",
                vec![node.clone(), json!(value)],
            )
            .await?;
        self.client
            .execute(
                "arguments[0].dispatchEvent(new Event('change'));",
                vec![node],
            )
            .await?;
        info!("Value '{value}' set via JavaScript on {locator}");
        Ok(())
    }

    /// Pick a `<select>` option by its `value` attribute.
    pub async fn select_by_value(&self, locator: &Locator, value: &str, step: &str) -> Result<()> {
        info!("{step}");
        let element = self.wait_for(locator).await?;
        element.select_by_value(value).await?;
        info!("Selected option '{value}'");
        Ok(())
    }

    /// Immediate lookup without the wait engine. Only for callers that
    /// need "is it there right now" semantics; everything else goes
    /// through [`Session::wait_for`].
    pub async fn find_now(&self, locator: &Locator) -> Result<Element> {
        match self.client.find(locator.query()).await {
            Ok(element) => Ok(element),
            Err(fantoccini::error::CmdError::NoSuchElement(_)) => {
                Err(Error::ElementNotFound(locator.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Immediate match count. Absence assertions expect zero here.
    pub async fn count_now(&self, locator: &Locator) -> Result<usize> {
        Ok(self.client.find_all(locator.query()).await?.len())
    }
}
