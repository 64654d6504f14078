//! Browser navigation seam for the login redirect.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use crate::config::AppConfig;

/// Something that can send the page to another URL.
pub trait Navigator {
    fn assign(&self, url: &str);
}

/// Navigates by setting `window.location.href`. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn assign(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    log::error!("navigation to {url} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("navigation to {url} skipped outside the browser");
        }
    }
}

/// Send the browser to the identity server's login entry point.
pub fn login(config: &AppConfig, navigator: &(impl Navigator + ?Sized)) {
    let url = config.login_url();
    log::info!("redirecting to identity server login: {url}");
    navigator.assign(&url);
}
