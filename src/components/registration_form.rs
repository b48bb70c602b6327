//! Registration form: four managed fields, submit, and the success banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `RwSignal<RegistrationState>` the fields render from. Submission
//! never reaches the network; a valid form shows the success banner, resets,
//! and schedules the banner to hide.
//!
//! A second submission while a hide is pending cancels that hide. If it
//! succeeds, a fresh full-length hide is scheduled; if it fails, the banner
//! is already gone.

use forms::field::FieldId;
use forms::validator::FormValidator;
use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::config::PageConfig;
use crate::state::registration::RegistrationState;
use crate::util::timer::HideTimer;

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let validator = expect_context::<StoredValue<FormValidator>>();
    let form = RwSignal::new(RegistrationState::default());
    let hide_timer = StoredValue::new_local(HideTimer::default());
    let banner_ms = config.success_banner_ms;
    provide_context(form);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        hide_timer.update_value(HideTimer::cancel);
        let epoch = validator.with_value(|v| form.try_update(|s| s.submit(v))).flatten();
        let Some(epoch) = epoch else {
            leptos::logging::log!("registration rejected: see inline errors");
            return;
        };
        hide_timer.update_value(|timer| {
            timer.schedule(banner_ms, move || {
                form.update(|s| {
                    s.banner.expire(epoch);
                });
            });
        });
    };

    view! {
        <section class="registration-card">
            <h2>"Create an Account"</h2>
            <form id="registrationForm" class="registration-form" novalidate=true on:submit=on_submit>
                {FieldId::ALL.into_iter().map(|field| view! { <FormField field=field/> }).collect_view()}
                <button type="submit" class="submit-btn">"Register"</button>
                <div
                    id="formSuccessMessage"
                    class=move || form.with(|s| s.banner.class("success-message", "show"))
                    role="status"
                    aria-live="polite"
                >
                    {move || form.with(|s| s.banner.text().to_owned())}
                </div>
            </form>
        </section>
    }
}
