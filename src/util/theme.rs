//! Theme initialization and toggle.
//!
//! Reads the stored theme from a `PreferenceStore` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes the new theme
//! back and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a store that cannot be read yields the light
//! theme, and a failed write still switches the theme for the current page.
//! Both are logged. Non-browser builds apply nothing.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
use crate::util::preference::PreferenceStore;

/// Read the stored theme, defaulting to [`Theme::Light`].
pub fn read_preference(store: &impl PreferenceStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
            leptos::logging::warn!("ignoring stored theme: {e}");
            Theme::Light
        }),
        Ok(None) => Theme::Light,
        Err(e) => {
            leptos::logging::warn!("theme preference unreadable: {e}");
            Theme::Light
        }
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
            leptos::logging::warn!("failed to apply theme: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme, apply it, and persist it under `key`.
pub fn toggle(store: &mut impl PreferenceStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = store.set(key, next.as_str()) {
        leptos::logging::warn!("theme preference not saved: {e}");
    }
    next
}
