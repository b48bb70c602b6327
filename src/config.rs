//! Page configuration: storage key and banner timings.
//!
//! Defaults are compiled in. A page may override any subset by embedding a
//! JSON object in `<script id="page-config" type="application/json">`; unknown
//! keys and malformed JSON are rejected and the defaults are used instead.

use serde::Deserialize;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_CART_NOTICE_MS: u32 = 3_000;
pub const DEFAULT_SUCCESS_BANNER_MS: u32 = 5_000;

/// Element id of the optional inline JSON config.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Why an inline config was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("theme_storage_key must not be empty")]
    EmptyStorageKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// `localStorage` key for the theme preference.
    pub theme_storage_key: String,
    /// How long the add-to-cart notice stays up.
    pub cart_notice_ms: u32,
    /// How long the registration success banner stays up.
    pub success_banner_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            cart_notice_ms: DEFAULT_CART_NOTICE_MS,
            success_banner_ms: DEFAULT_SUCCESS_BANNER_MS,
        }
    }
}

impl PageConfig {
    /// Parse an inline JSON override. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, unknown fields, or an empty
    /// storage key.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(config)
    }

    /// Parse `raw` if present, falling back to defaults on absence or error.
    pub fn from_inline(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|e| {
            leptos::logging::warn!("using default page config: {e}");
            Self::default()
        })
    }

    /// Load the page's inline config, if any.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            Self::from_inline(raw.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
