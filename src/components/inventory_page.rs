//! Inventory Page Component
//!
//! Create/edit form plus the inventory card list.

use leptos::prelude::*;

use crate::models::{coerce_f64, coerce_u32, InventoryItem, InventoryItemDraft};
use crate::router::{section_class, Page};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::SyncController;

use super::ResourceList;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let store = use_app_store();
    let controller = SyncController::<InventoryItem>::new(store);

    let (name, set_name) = signal(String::new());
    let (sku, set_sku) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit_price, set_unit_price) = signal(String::new());
    let (location, set_location) = signal(String::new());

    Effect::new(move |_| {
        if store.current_page().get() == Some(Page::Inventory) {
            controller.load();
        }
    });

    let editing = controller.editing();
    Effect::new(move |_| {
        if let Some(item) = editing.get() {
            set_name.set(item.name);
            set_sku.set(item.sku);
            set_category.set(item.category);
            set_description.set(item.description.unwrap_or_default());
            set_quantity.set(item.quantity.to_string());
            set_unit_price.set(item.unit_price.to_string());
            set_location.set(item.location.unwrap_or_default());
        }
    });

    let clear_form = move || {
        set_name.set(String::new());
        set_sku.set(String::new());
        set_category.set(String::new());
        set_description.set(String::new());
        set_quantity.set(String::new());
        set_unit_price.set(String::new());
        set_location.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = InventoryItemDraft {
            name: name.get(),
            sku: sku.get(),
            category: category.get(),
            description: description.get(),
            quantity: coerce_u32(&quantity.get()),
            unit_price: coerce_f64(&unit_price.get()),
            location: location.get(),
        };
        controller.submit(draft, clear_form);
    };

    let card = |item: &InventoryItem| {
        let location = item.location.clone().unwrap_or_else(|| "N/A".to_string());
        view! {
            <h3>{item.name.clone()}</h3>
            <p class="meta"><strong>"SKU: "</strong>{item.sku.clone()}</p>
            <p class="meta"><strong>"Category: "</strong>{item.category.clone()}</p>
            <p class="meta"><strong>"Quantity: "</strong>{item.quantity}</p>
            <p class="meta"><strong>"Price: "</strong>{format!("${}", item.unit_price)}</p>
            <p class="meta"><strong>"Location: "</strong>{location}</p>
        }
        .into_any()
    };

    view! {
        <section class=move || section_class(Page::Inventory, store.current_page().get())>
            <h2>"Inventory"</h2>
            <form class="resource-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Item name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="SKU"
                    required
                    prop:value=move || sku.get()
                    on:input=move |ev| set_sku.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Category"
                    required
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Unit price"
                    prop:value=move || unit_price.get()
                    on:input=move |ev| set_unit_price.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn">
                    {move || if editing.get().is_some() { "Update Item" } else { "Add Item" }}
                </button>
                {move || editing.get().map(|item| view! {
                    <button
                        type="button"
                        class="btn cancel-btn"
                        on:click=move |_| {
                            controller.cancel_edit();
                            clear_form();
                        }
                    >
                        {format!("Cancel editing \"{}\"", item.name)}
                    </button>
                })}
            </form>
            <ResourceList controller=controller card_body=card />
        </section>
    }
}
