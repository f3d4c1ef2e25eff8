//! Resource List Component
//!
//! Generic card list shared by all three resource pages: one card per
//! record in server order, a placeholder when the collection is empty, and
//! Edit/Delete controls wired to the sync controller.

use leptos::prelude::*;

use crate::api::ApiRecord;
use crate::components::DeleteConfirmButton;
use crate::sync::SyncController;

#[component]
pub fn ResourceList<T, CF>(controller: SyncController<T>, card_body: CF) -> impl IntoView
where
    T: ApiRecord,
    CF: Fn(&T) -> AnyView + Copy + Send + Sync + 'static,
{
    let items = controller.items();
    let loaded = controller.loaded();

    view! {
        <div class="item-list">
            <Show when=move || loaded.get() && items.with(|records| records.is_empty())>
                <div class="empty-message">{T::EMPTY_MESSAGE}</div>
            </Show>
            <For
                each=move || items.get()
                key=|record| record.id()
                children=move |record: T| {
                    let id = record.id();
                    let for_edit = record.clone();
                    view! {
                        <div class="item-card">
                            {card_body(&record)}
                            <div class="actions">
                                <button
                                    class="btn btn-small btn-success"
                                    on:click=move |_| controller.start_edit(for_edit.clone())
                                >
                                    "Edit"
                                </button>
                                <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                    controller.delete(id)
                                }) />
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
