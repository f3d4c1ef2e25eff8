//! Nav Bar Component

use leptos::prelude::*;

use crate::router::{nav_class, navigate_to, Page};
use crate::store::{use_app_store, AppStateStoreFields};

/// One link per page; the link for the current page is highlighted.
#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="nav">
            <For
                each=|| Page::ALL
                key=|page| page.id()
                children=move |page: Page| {
                    view! {
                        <a
                            href=format!("#{}", page.id())
                            class=move || nav_class(page, store.current_page().get())
                            on:click=move |_| navigate_to(&store, page.id())
                        >
                            {page.title()}
                        </a>
                    }
                }
            />
        </nav>
    }
}
