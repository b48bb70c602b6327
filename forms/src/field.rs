//! Managed field identifiers and their DOM naming convention.
//!
//! Every field the validator knows about is a variant of [`FieldId`]. The DOM
//! boundary still speaks in string ids (`event.target.id`), so this module
//! owns the mapping in both directions: `dom_id` / `error_id` for rendering and
//! [`FieldId::from_dom_id`] for routing events back into the engine.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// A managed registration-form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All managed fields in rule-table definition order.
    pub const ALL: [Self; 4] = [Self::FullName, Self::Email, Self::Password, Self::ConfirmPassword];

    /// Element id of the field's `<input>`.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Element id of the field's paired error-message element (`<domId>Error`).
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Self::FullName => "fullNameError",
            Self::Email => "emailError",
            Self::Password => "passwordError",
            Self::ConfirmPassword => "confirmPasswordError",
        }
    }

    /// Resolve a DOM element id to a managed field.
    ///
    /// Returns `None` for ids that are not managed by the validator.
    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.dom_id() == id)
    }

    /// Position of the field within [`FieldId::ALL`].
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::ConfirmPassword => 3,
        }
    }

    /// Whether the field participates in the password/confirmation coupling.
    #[must_use]
    pub fn is_password_pair(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}
