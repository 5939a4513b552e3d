//! Composite navigation flows
//!
//! Login and form navigation sequence the interaction helpers and block
//! on URL-state transitions instead of fixed sleeps.

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::Session;

/// URL marker of the portal's login page.
pub const LOGIN_PATH: &str = "/Account/Login";

/// URL fragments the portal lands on when a form navigation gets bounced
/// back to the index or the login page.
const BOUNCE_MARKERS: [&str; 2] = ["/?page=%2FIndex", LOGIN_PATH];

const MAX_NAV_ATTEMPTS: usize = 2;

fn username_field() -> Locator {
    Locator::name("Username")
}

fn password_field() -> Locator {
    Locator::name("Password")
}

fn login_button() -> Locator {
    Locator::name("btn-login")
}

pub(crate) fn is_bounced(url: &str) -> bool {
    BOUNCE_MARKERS.iter().any(|marker| url.contains(marker))
}

impl Session {
    /// Log in and block until the portal redirects away from the login
    /// page. Times out when the redirect never happens, e.g. on rejected
    /// credentials with no client-visible error; scenarios that expect a
    /// rejection drive the login form with the raw helpers instead.
    pub async fn login(&self, username: &str, password: &str, role_label: &str) -> Result<()> {
        info!("Logging in as {role_label} user: {username}");
        self.goto("/").await?;
        self.type_into(
            &username_field(),
            username,
            &format!("Entering username ({username})"),
        )
        .await?;
        self.type_into(&password_field(), password, "Entering password")
            .await?;
        self.click(&login_button(), "Clicking login button").await?;
        self.wait_for_url_not_contains(LOGIN_PATH).await?;
        info!("Login redirect observed");
        Ok(())
    }

    /// Navigate to `index_path`, click `link`, and wait for `sentinel` to
    /// confirm the form is ready. The portal occasionally bounces the
    /// click back to the index; one retry covers that, after which the
    /// failure reports how far navigation got.
    pub async fn goto_form_with_retry(
        &self,
        index_path: &str,
        link: &Locator,
        sentinel: &Locator,
    ) -> Result<()> {
        info!("Navigating to {index_path} and opening form...");
        let mut last_url = String::new();

        for attempt in 1..=MAX_NAV_ATTEMPTS {
            if attempt > 1 {
                warn!("Attempt {} failed, restarting navigation", attempt - 1);
            }
            self.goto(index_path).await?;
            self.click(link, &format!("Clicking form link (attempt {attempt})"))
                .await?;

            last_url = self.current_url().await?;
            if is_bounced(&last_url) {
                warn!("Bounced back to index/login after click: {last_url}");
                continue;
            }

            match self.wait_for(sentinel).await {
                Ok(_) => {
                    info!("Form is ready");
                    return Ok(());
                }
                Err(Error::Timeout { .. }) => {
                    last_url = self.current_url().await?;
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(Error::NavigationRetryExhausted {
            target: format!("{index_path} -> {link}"),
            attempts: MAX_NAV_ATTEMPTS,
            last_url,
        })
    }
}
