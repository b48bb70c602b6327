//! Root application component and context providers.

use forms::rules::RuleTable;
use forms::validator::FormValidator;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::PageConfig;
use crate::pages::home::HomePage;
use crate::util::preference::LocalStorage;
use crate::util::theme;

/// Root application component.
///
/// Loads the page config and stored theme once, then provides them and the
/// form validator to every child through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PageConfig::load();
    let initial_theme = theme::read_preference(&LocalStorage, &config.theme_storage_key);
    theme::apply(initial_theme);

    provide_context(RwSignal::new(initial_theme));
    provide_context(StoredValue::new(FormValidator::new(RuleTable::standard())));
    provide_context(config);

    view! {
        <Title text="Storefront"/>
        <HomePage/>
    }
}
