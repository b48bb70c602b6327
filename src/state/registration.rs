//! Registration form state: field values, validation state, success banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form component keeps one `RwSignal<RegistrationState>`. Event handlers
//! call the methods below with the injected `FormValidator`; the view renders
//! `fields` through `forms::state::FieldView`. Values are read from this state
//! rather than from the DOM, so every validation sees a consistent snapshot.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use forms::field::FieldId;
use forms::snapshot::FormSnapshot;
use forms::state::FieldStates;
use forms::validator::FormValidator;

use super::banner::Banner;

/// Text shown after a successful registration.
pub const SUCCESS_MESSAGE: &str = "✓ Registration successful! Welcome aboard!";

/// Registration form state.
#[derive(Clone, Debug, Default)]
pub struct RegistrationState {
    /// Current value of every managed input.
    pub values: FormSnapshot,
    /// Validation state of every managed input.
    pub fields: FieldStates,
    /// Success region below the submit button.
    pub banner: Banner,
}

impl RegistrationState {
    /// Record a keystroke and apply input-time validation.
    pub fn input(&mut self, validator: &FormValidator, field: FieldId, value: &str) {
        self.values.set(field, value);
        validator.on_input(field, value, &self.values, &mut self.fields);
    }

    /// Apply blur-time validation for `field`.
    pub fn blur(&mut self, validator: &FormValidator, field: FieldId, value: &str) {
        self.values.set(field, value);
        validator.on_blur(field, value, &self.values, &mut self.fields);
    }

    /// Run the submission flow.
    ///
    /// Clears any earlier success banner, validates every field, and on
    /// success shows the banner and resets the form. Returns the banner epoch
    /// to schedule a hide for, or `None` if validation failed.
    pub fn submit(&mut self, validator: &FormValidator) -> Option<u64> {
        self.banner.clear();
        if !validator.validate_form(&self.values, &mut self.fields) {
            return None;
        }
        let epoch = self.banner.show(SUCCESS_MESSAGE);
        self.reset();
        Some(epoch)
    }

    /// Empty every input and drop every marker and message.
    pub fn reset(&mut self) {
        self.values = FormSnapshot::new();
        self.fields.reset();
    }
}

/// Whether a password input currently reveals its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Hidden,
    Shown,
}

impl PasswordVisibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// Input `type` attribute.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Shown => "text",
        }
    }

    /// Toggle button label: the action a click performs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hidden => "Show",
            Self::Shown => "Hide",
        }
    }
}
