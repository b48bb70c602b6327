//! Point-in-time field values used for cross-field rules.
//!
//! A [`FormSnapshot`] is read from the page at the start of every validation
//! call and discarded afterwards. It is never cached between calls; the
//! confirm-password rule must always compare against the password value read
//! in the same instant.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use crate::field::FieldId;

/// Current string value of every managed field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: [String; 4],
}

impl FormSnapshot {
    /// An all-empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `field` at the time the snapshot was taken.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder form of [`FormSnapshot::set`].
    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}
