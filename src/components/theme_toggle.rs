//! Header button that switches between light and dark themes.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::theme::Theme;
use crate::util::preference::LocalStorage;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = expect_context::<RwSignal<Theme>>();
    let storage_key = expect_context::<PageConfig>().theme_storage_key;

    let on_click = move |_| {
        let next = theme::toggle(&mut LocalStorage, &storage_key, current.get_untracked());
        current.set(next);
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label=move || current.get().toggle_label()
            on:click=on_click
        >
            <span class="theme-icon" aria-hidden="true">{move || current.get().icon()}</span>
        </button>
    }
}
