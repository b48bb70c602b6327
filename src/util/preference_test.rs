#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn local_storage_reads_nothing_outside_browser() {
    assert_eq!(LocalStorage.get("theme"), Ok(None));
}

#[test]
fn local_storage_write_is_accepted_outside_browser() {
    let mut store = LocalStorage;
    assert_eq!(store.set("theme", "dark"), Ok(()));
    assert_eq!(store.get("theme"), Ok(None));
}

#[test]
fn preference_error_messages() {
    assert_eq!(PreferenceError::NoWindow.to_string(), "no window available");
    assert_eq!(PreferenceError::Unavailable.to_string(), "localStorage unavailable");
    assert_eq!(
        PreferenceError::Access("QuotaExceededError".into()).to_string(),
        "storage access failed: QuotaExceededError"
    );
}
