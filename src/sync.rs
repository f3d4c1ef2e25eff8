//! Resource Sync Controller
//!
//! One generic controller drives all three resource pages: it owns the
//! fetched records, submits creates/updates, deletes by id, and reloads
//! after every successful write. Failures leave the current rendering and
//! form contents untouched and surface a single notice. Concurrent
//! operations are not serialized; the last write to the items signal wins.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, ApiRecord};
use crate::store::{notify, notify_error, AppStore, NoticeLevel};

pub struct SyncController<T: ApiRecord> {
    items: RwSignal<Vec<T>>,
    loaded: RwSignal<bool>,
    editing: RwSignal<Option<T>>,
    store: AppStore,
}

impl<T: ApiRecord> Clone for SyncController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ApiRecord> Copy for SyncController<T> {}

impl<T: ApiRecord> SyncController<T> {
    pub fn new(store: AppStore) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            editing: RwSignal::new(None),
            store,
        }
    }

    /// Records in server order.
    pub fn items(&self) -> RwSignal<Vec<T>> {
        self.items
    }

    /// Whether at least one list fetch has succeeded; gates the empty
    /// placeholder so it does not flash before the first load.
    pub fn loaded(&self) -> RwSignal<bool> {
        self.loaded
    }

    /// Record currently being edited, if any.
    pub fn editing(&self) -> RwSignal<Option<T>> {
        self.editing
    }

    /// Fetch the collection and replace the rendered list. On failure the
    /// previous list stays as it was.
    pub fn load(self) {
        let pending = api::list::<T>();
        spawn_local(async move {
            match pending.await {
                Ok(records) => {
                    self.items.set(records);
                    self.loaded.set(true);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[API] Error loading {}: {}", T::RESOURCE, err).into(),
                    );
                    notify_error(self.store, format!("Error loading {}", T::RESOURCE));
                }
            }
        });
    }

    /// Put a record into edit mode; the page form mirrors its fields and
    /// the next submit becomes an update-in-place.
    pub fn start_edit(self, record: T) {
        self.editing.set(Some(record));
    }

    pub fn cancel_edit(self) {
        self.editing.set(None);
    }

    /// Create or update depending on edit mode. `on_success` runs before the
    /// reload so the form clears immediately; on failure the form is left
    /// intact and no reload happens.
    pub fn submit(self, draft: T::Draft, on_success: impl FnOnce() + 'static) {
        let editing_id = self.editing.get_untracked().map(|record| record.id());
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update::<T>(id, &draft).await,
                None => api::create::<T>(&draft).await,
            };
            let outcome = submit_outcome(T::LABEL, editing_id.is_some(), &result);
            if let Err(err) = &result {
                web_sys::console::error_1(
                    &format!("[API] {}: {}", outcome.message, err).into(),
                );
            }
            if outcome.clear_form {
                self.editing.set(None);
                on_success();
            }
            notify(self.store, outcome.level, outcome.message);
            if outcome.reload {
                self.load();
            }
        });
    }

    /// Delete by id. Callers must have confirmed the action already; no
    /// request is made before that confirmation.
    pub fn delete(self, id: u32) {
        spawn_local(async move {
            let result = api::delete::<T>(id).await;
            let outcome = delete_outcome(T::LABEL, &result);
            if let Err(err) = &result {
                web_sys::console::error_1(
                    &format!("[API] {} (id {}): {}", outcome.message, id, err).into(),
                );
            }
            notify(self.store, outcome.level, outcome.message);
            if outcome.reload {
                self.load();
            }
        });
    }
}

/// Effects to apply once a write resolves: whether to clear the form and
/// exit edit mode, whether to re-list (at most once), and the notice.
#[derive(Debug, Clone, PartialEq)]
struct WriteOutcome {
    clear_form: bool,
    reload: bool,
    level: NoticeLevel,
    message: String,
}

fn submit_outcome(label: &str, updating: bool, result: &Result<(), ApiError>) -> WriteOutcome {
    match result {
        Ok(()) => WriteOutcome {
            clear_form: true,
            reload: true,
            level: NoticeLevel::Success,
            message: format!(
                "{} {}",
                title_case(label),
                if updating { "updated" } else { "added" }
            ),
        },
        Err(_) => WriteOutcome {
            clear_form: false,
            reload: false,
            level: NoticeLevel::Error,
            message: format!(
                "Error {} {}",
                if updating { "updating" } else { "adding" },
                label
            ),
        },
    }
}

fn delete_outcome(label: &str, result: &Result<(), ApiError>) -> WriteOutcome {
    match result {
        Ok(()) => WriteOutcome {
            clear_form: false,
            reload: true,
            level: NoticeLevel::Success,
            message: format!("{} deleted", title_case(label)),
        },
        Err(_) => WriteOutcome {
            clear_form: false,
            reload: false,
            level: NoticeLevel::Error,
            message: format!("Error deleting {}", label),
        },
    }
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_the_first_letter() {
        assert_eq!(title_case("project"), "Project");
        assert_eq!(title_case("item"), "Item");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn successful_create_clears_the_form_and_reloads_once() {
        let outcome = submit_outcome("project", false, &Ok(()));
        assert!(outcome.clear_form);
        assert!(outcome.reload);
        assert_eq!(outcome.level, NoticeLevel::Success);
        assert_eq!(outcome.message, "Project added");
    }

    #[test]
    fn failed_create_keeps_the_form_and_does_not_reload() {
        let outcome = submit_outcome("project", false, &Err(ApiError::Status(500)));
        assert!(!outcome.clear_form);
        assert!(!outcome.reload);
        assert_eq!(outcome.level, NoticeLevel::Error);
        assert_eq!(outcome.message, "Error adding project");

        let offline = submit_outcome(
            "project",
            false,
            &Err(ApiError::Transport("offline".into())),
        );
        assert!(!offline.clear_form);
        assert!(!offline.reload);
    }

    #[test]
    fn update_mode_uses_the_update_verbs() {
        assert_eq!(submit_outcome("contact", true, &Ok(())).message, "Contact updated");
        assert_eq!(
            submit_outcome("contact", true, &Err(ApiError::Status(400))).message,
            "Error updating contact"
        );
    }

    #[test]
    fn successful_delete_reloads_once_and_leaves_the_form_alone() {
        let outcome = delete_outcome("item", &Ok(()));
        assert!(outcome.reload);
        assert!(!outcome.clear_form);
        assert_eq!(outcome.message, "Item deleted");
    }

    #[test]
    fn failed_delete_does_not_reload() {
        let outcome = delete_outcome("item", &Err(ApiError::Status(404)));
        assert!(!outcome.reload);
        assert_eq!(outcome.level, NoticeLevel::Error);
        assert_eq!(outcome.message, "Error deleting item");
    }
}
