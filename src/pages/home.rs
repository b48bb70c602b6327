//! The storefront landing page: header, product card, registration form.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::registration_form::RegistrationForm;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <header class="site-header">
            <h1 class="site-title">"Storefront"</h1>
            <ThemeToggle/>
        </header>
        <main class="page-content">
            <ProductCard/>
            <RegistrationForm/>
        </main>
    }
}
