//! One labelled registration input with its inline error message.
//!
//! The input's marker class, `aria-invalid`, and error text are all rendered
//! from the field's `FieldState` through `forms::state::FieldView`; nothing
//! here decides validity.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use forms::field::FieldId;
use forms::validator::FormValidator;
use leptos::prelude::*;

use crate::state::registration::{PasswordVisibility, RegistrationState};

/// Static markup attributes for a managed field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub input_type: &'static str,
    pub autocomplete: &'static str,
    pub placeholder: &'static str,
}

/// Markup attributes for `field`.
pub fn field_spec(field: FieldId) -> FieldSpec {
    match field {
        FieldId::FullName => FieldSpec {
            label: "Full Name",
            input_type: "text",
            autocomplete: "name",
            placeholder: "Jane Doe",
        },
        FieldId::Email => FieldSpec {
            label: "Email Address",
            input_type: "email",
            autocomplete: "email",
            placeholder: "you@example.com",
        },
        FieldId::Password => FieldSpec {
            label: "Password",
            input_type: "password",
            autocomplete: "new-password",
            placeholder: "At least 8 characters",
        },
        FieldId::ConfirmPassword => FieldSpec {
            label: "Confirm Password",
            input_type: "password",
            autocomplete: "new-password",
            placeholder: "Re-enter your password",
        },
    }
}

/// Id of the show/hide button paired with `field`; only password inputs have one.
pub fn toggle_id(field: FieldId) -> Option<String> {
    field.is_password_pair().then(|| format!("{}Toggle", field.dom_id()))
}

#[component]
pub fn FormField(field: FieldId) -> impl IntoView {
    let form = expect_context::<RwSignal<RegistrationState>>();
    let validator = expect_context::<StoredValue<FormValidator>>();
    let spec = field_spec(field);
    let visibility = RwSignal::new(PasswordVisibility::default());
    let has_toggle = field.is_password_pair();

    let view_of = move || form.with(|s| s.fields.view(field));
    let input_type = move || if has_toggle { visibility.get().input_type() } else { spec.input_type };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        validator.with_value(|v| form.update(|s| s.input(v, field, &value)));
    };
    let on_blur = move |ev: leptos::ev::FocusEvent| {
        let value = event_target_value(&ev);
        validator.with_value(|v| form.update(|s| s.blur(v, field, &value)));
    };

    view! {
        <div class="form-group">
            <label for=field.dom_id()>{spec.label}</label>
            <div class="input-wrapper">
                <input
                    id=field.dom_id()
                    name=field.dom_id()
                    type=input_type
                    autocomplete=spec.autocomplete
                    placeholder=spec.placeholder
                    class=move || view_of().class("form-input")
                    aria-invalid=move || view_of().aria_invalid
                    aria-describedby=field.error_id()
                    prop:value=move || form.with(|s| s.values.get(field).to_owned())
                    on:input=on_input
                    on:blur=on_blur
                />
                {toggle_id(field).map(|id| view! {
                    <button
                        id=id
                        class="password-toggle"
                        type="button"
                        aria-controls=field.dom_id()
                        on:click=move |_| visibility.update(|v| *v = v.toggled())
                    >
                        <span class="toggle-text">{move || visibility.get().label()}</span>
                    </button>
                })}
            </div>
            <span id=field.error_id() class="error-message" role="alert" aria-live="polite">
                {move || view_of().error_text}
            </span>
        </div>
    }
}
