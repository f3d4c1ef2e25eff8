//! Opsdesk App
//!
//! Top-level layout: header with nav and theme toggle, the notice bar, and
//! the four page sections. Sections stay mounted; only the active one is
//! visible, and each re-fetches its data when it becomes current.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ContactsPage, DashboardPage, InventoryPage, NavBar, NoticeBar, ProjectsPage, ThemeToggle,
};
use crate::router;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme::{self, Theme};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState {
        current_page: router::page_from_hash(),
        theme: theme::load_preference(),
        ..Default::default()
    });
    provide_context(store);

    view! {
        <div class=move || match store.theme().get() {
            Theme::Dark => "app dark-mode",
            Theme::Light => "app",
        }>
            <header class="app-header">
                <h1>"Opsdesk"</h1>
                <NavBar />
                <ThemeToggle />
            </header>
            <NoticeBar />
            <main class="app-main">
                <DashboardPage />
                <ProjectsPage />
                <InventoryPage />
                <ContactsPage />
            </main>
        </div>
    }
}
