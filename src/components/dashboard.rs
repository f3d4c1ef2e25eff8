//! Dashboard Page Component
//!
//! Summary counts for the three collections. The three list reads are
//! started together and joined before any count is written, so a single
//! failure leaves all three counts untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::models::{Contact, InventoryItem, Project};
use crate::router::{navigate_to, section_class, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let (counts, set_counts) = signal::<Option<(usize, usize, usize)>>(None);

    // Re-fetch every time the dashboard becomes current.
    Effect::new(move |_| {
        if store.current_page().get() != Some(Page::Home) {
            return;
        }
        // All three requests are in flight before the first await.
        let projects = api::list::<Project>();
        let inventory = api::list::<InventoryItem>();
        let contacts = api::list::<Contact>();
        spawn_local(async move {
            let joined = summary_counts(
                projects.await.map(|records| records.len()),
                inventory.await.map(|records| records.len()),
                contacts.await.map(|records| records.len()),
            );
            match joined {
                Ok(summary) => set_counts.set(Some(summary)),
                Err(err) => web_sys::console::error_1(
                    &format!("[API] Error loading dashboard: {}", err).into(),
                ),
            }
        });
    });

    view! {
        <section class=move || section_class(Page::Home, store.current_page().get())>
            <h2>"Dashboard"</h2>
            <div class="stats-grid">
                <div class="stat-card" on:click=move |_| navigate_to(&store, "projects")>
                    <h3>"Projects"</h3>
                    <p class="stat-number">
                        {move || display_count(counts.get().map(|c| c.0))}
                    </p>
                </div>
                <div class="stat-card" on:click=move |_| navigate_to(&store, "inventory")>
                    <h3>"Inventory Items"</h3>
                    <p class="stat-number">
                        {move || display_count(counts.get().map(|c| c.1))}
                    </p>
                </div>
                <div class="stat-card" on:click=move |_| navigate_to(&store, "contacts")>
                    <h3>"Contacts"</h3>
                    <p class="stat-number">
                        {move || display_count(counts.get().map(|c| c.2))}
                    </p>
                </div>
            </div>
        </section>
    }
}

/// All-or-nothing join of the three collection sizes.
fn summary_counts(
    projects: Result<usize, ApiError>,
    inventory: Result<usize, ApiError>,
    contacts: Result<usize, ApiError>,
) -> Result<(usize, usize, usize), ApiError> {
    Ok((projects?, inventory?, contacts?))
}

fn display_count(count: Option<usize>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "–".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_successes_yield_all_counts() {
        assert_eq!(summary_counts(Ok(2), Ok(3), Ok(5)).unwrap(), (2, 3, 5));
    }

    #[test]
    fn one_failure_updates_nothing() {
        assert!(summary_counts(Ok(2), Err(ApiError::Status(500)), Ok(5)).is_err());
        assert!(summary_counts(Err(ApiError::Transport("offline".into())), Ok(3), Ok(5)).is_err());
    }

    #[test]
    fn counts_render_as_plain_numbers() {
        assert_eq!(display_count(Some(2)), "2");
        assert_eq!(display_count(Some(0)), "0");
        assert_eq!(display_count(None), "–");
    }
}
