//! Error-display collaborator.
//!
//! The validator never touches markup. It reports through [`ErrorDisplay`],
//! which the page implements over whatever it renders from. [`FieldStates`] is
//! the in-memory implementation the Leptos client keeps in a signal.
//!
//! Implementations must treat a field they cannot display as a silent no-op:
//! display is best-effort and never fails.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::field::FieldId;
use crate::state::{FieldState, FieldStates};
use crate::validator::{Change, FieldUpdate};

/// Sink for per-field error display.
pub trait ErrorDisplay {
    /// Mark `field` invalid and show `message`.
    fn show_error(&mut self, field: FieldId, message: &str);

    /// Mark `field` valid and clear its message.
    fn clear_error(&mut self, field: FieldId);
}

impl ErrorDisplay for FieldStates {
    fn show_error(&mut self, field: FieldId, message: &str) {
        self.set(field, FieldState::Invalid(message.to_owned()));
    }

    fn clear_error(&mut self, field: FieldId) {
        self.set(field, FieldState::Valid);
    }
}

impl<D: ErrorDisplay + ?Sized> ErrorDisplay for &mut D {
    fn show_error(&mut self, field: FieldId, message: &str) {
        (**self).show_error(field, message);
    }

    fn clear_error(&mut self, field: FieldId) {
        (**self).clear_error(field);
    }
}

/// Push `updates` to `display` in order.
pub fn apply_updates(display: &mut impl ErrorDisplay, updates: &[FieldUpdate]) {
    for update in updates {
        match update.change {
            Change::Show(message) => display.show_error(update.field, message),
            Change::Clear => display.clear_error(update.field),
        }
    }
}
