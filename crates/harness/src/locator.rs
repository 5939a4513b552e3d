//! Declarative element locators
//!
//! Scenarios describe elements with [`Locator`] values instead of raw
//! selector strings so that wait failures and step logs always name the
//! query that was in play.

use std::fmt;

/// An owned description of how to find an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// CSS selector.
    Css(String),
    /// Element id.
    Id(String),
    /// Structural path expression.
    XPath(String),
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Locator::Id(id.into())
    }

    /// Locate by the `name` attribute, compiled to an attribute selector.
    pub fn name(name: impl AsRef<str>) -> Self {
        Locator::Css(format!("[name='{}']", name.as_ref()))
    }

    pub fn xpath(expr: impl Into<String>) -> Self {
        Locator::XPath(expr.into())
    }

    pub(crate) fn query(&self) -> fantoccini::Locator<'_> {
        match self {
            Locator::Css(s) => fantoccini::Locator::Css(s),
            Locator::Id(s) => fantoccini::Locator::Id(s),
            Locator::XPath(s) => fantoccini::Locator::XPath(s),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(s) => write!(f, "css `{s}`"),
            Locator::Id(s) => write!(f, "id `{s}`"),
            Locator::XPath(s) => write!(f, "xpath `{s}`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_compiles_to_attribute_selector() {
        assert_eq!(Locator::name("Username"), Locator::Css("[name='Username']".into()));
    }

    #[test]
    fn display_names_the_query_kind() {
        assert_eq!(Locator::id("logContent").to_string(), "id `logContent`");
        assert_eq!(
            Locator::xpath("//tbody/tr[contains(., 'Panadol')]").to_string(),
            "xpath `//tbody/tr[contains(., 'Panadol')]`"
        );
    }
}
