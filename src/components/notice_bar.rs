//! Notice Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Renders the active notice, if any; notices dismiss themselves.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-area">
            {move || {
                store.notice().get().map(|notice| {
                    view! { <div class=notice.level.class()>{notice.message}</div> }
                })
            }}
        </div>
    }
}
