//! Per-field validation state and its presentation.
//!
//! DESIGN
//! ======
//! The validator decides; [`FieldStates`] remembers the decision; and
//! [`FieldView::of`] turns a decision into the flags the page renders (marker
//! class, `aria-invalid`, error text). Keeping the last step pure means the
//! markup never has to be read back to learn whether a field is valid.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::consts::{INVALID_CLASS, VALID_CLASS};
use crate::field::FieldId;

/// Validation state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Never validated, or reset after a successful submission.
    #[default]
    Unvalidated,
    Valid,
    /// Failed validation with the given message.
    Invalid(String),
}

impl FieldState {
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Error message, if the field is invalid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message.as_str()),
            Self::Unvalidated | Self::Valid => None,
        }
    }
}

/// State of every managed field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStates {
    states: [FieldState; 4],
}

impl FieldStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: FieldId) -> &FieldState {
        &self.states[field.index()]
    }

    pub fn set(&mut self, field: FieldId, state: FieldState) {
        self.states[field.index()] = state;
    }

    /// Return every field to [`FieldState::Unvalidated`].
    pub fn reset(&mut self) {
        self.states = Default::default();
    }

    /// Presentation of `field`'s current state.
    #[must_use]
    pub fn view(&self, field: FieldId) -> FieldView {
        FieldView::of(self.get(field))
    }
}

/// Rendered flags for one field's input and error element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// `valid`, `invalid`, or no marker class.
    pub marker: Option<&'static str>,
    /// Value of the input's `aria-invalid` attribute.
    pub aria_invalid: &'static str,
    /// Text of the paired error element.
    pub error_text: String,
}

impl FieldView {
    #[must_use]
    pub fn of(state: &FieldState) -> Self {
        match state {
            FieldState::Unvalidated => Self { marker: None, aria_invalid: "false", error_text: String::new() },
            FieldState::Valid => Self { marker: Some(VALID_CLASS), aria_invalid: "false", error_text: String::new() },
            FieldState::Invalid(message) => {
                Self { marker: Some(INVALID_CLASS), aria_invalid: "true", error_text: message.clone() }
            }
        }
    }

    /// Input `class` attribute: `base` followed by the marker, if any.
    #[must_use]
    pub fn class(&self, base: &str) -> String {
        match self.marker {
            Some(marker) if base.is_empty() => marker.to_owned(),
            Some(marker) => format!("{base} {marker}"),
            None => base.to_owned(),
        }
    }
}
