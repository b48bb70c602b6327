//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page persists exactly one preference (the theme). `PreferenceStore`
//! abstracts the backing store so the theme logic can be exercised against an
//! in-memory map in tests; `LocalStorage` is the browser implementation.
//!
//! ERROR HANDLING
//! ==============
//! Storage access can fail (private browsing, disabled storage, quota). Callers
//! get a typed `PreferenceError` and are expected to log and continue.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Why a preference could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// No `window` object (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,

    /// `window.localStorage` is disabled or blocked.
    #[error("localStorage unavailable")]
    Unavailable,

    /// The storage call itself threw.
    #[error("storage access failed: {0}")]
    Access(String),
}

/// A persistent string-to-string store.
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` if never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Browser `window.localStorage`.
///
/// Outside the `csr` build there is no browser, so reads find nothing and
/// writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, PreferenceError> {
    let window = web_sys::window().ok_or(PreferenceError::NoWindow)?;
    window
        .local_storage()
        .map_err(|e| PreferenceError::Access(format!("{e:?}")))?
        .ok_or(PreferenceError::Unavailable)
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| PreferenceError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| PreferenceError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}
