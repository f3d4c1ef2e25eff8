//! Theme Toggle Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::theme::{self, Theme};

/// Flips between light and dark mode and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let toggle = move |_| {
        let next = store.theme().get_untracked().toggled();
        store.theme().set(next);
        theme::save_preference(next);
    };

    view! {
        <button class="theme-toggle" on:click=toggle>
            {move || match store.theme().get() {
                Theme::Dark => "☀️ Light Mode",
                Theme::Light => "🌙 Dark Mode",
            }}
        </button>
    }
}
