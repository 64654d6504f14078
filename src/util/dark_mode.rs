//! Light/dark theme preference.
//!
//! Reads the stored preference from `localStorage` (falling back to the
//! system `prefers-color-scheme`) and applies a `data-theme` attribute to the
//! `<html>` element. Toggling writes the new value back. Requires a browser
//! environment; SSR and native builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "daily_tasks_color_mode";

/// Attribute value for the given mode.
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Read the dark mode preference.
///
/// Returns `true` if the user previously picked dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == theme_name(true);
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_name(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the mode, apply it, and persist it. Returns the new mode.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme_name(next));
            }
        }
    }
    next
}
