//! Contacts Page Component
//!
//! Create/edit form plus the contact card list.

use leptos::prelude::*;

use crate::models::{Contact, ContactDraft};
use crate::router::{section_class, Page};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::SyncController;

use super::ResourceList;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let store = use_app_store();
    let controller = SyncController::<Contact>::new(store);

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (job_title, set_job_title) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    Effect::new(move |_| {
        if store.current_page().get() == Some(Page::Contacts) {
            controller.load();
        }
    });

    let editing = controller.editing();
    Effect::new(move |_| {
        if let Some(contact) = editing.get() {
            set_first_name.set(contact.first_name);
            set_last_name.set(contact.last_name);
            set_email.set(contact.email);
            set_phone.set(contact.phone.unwrap_or_default());
            set_department.set(contact.department.unwrap_or_default());
            set_job_title.set(contact.job_title.unwrap_or_default());
            set_company.set(contact.company.unwrap_or_default());
            set_notes.set(contact.notes.unwrap_or_default());
        }
    });

    let clear_form = move || {
        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_department.set(String::new());
        set_job_title.set(String::new());
        set_company.set(String::new());
        set_notes.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ContactDraft {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            phone: phone.get(),
            department: department.get(),
            job_title: job_title.get(),
            company: company.get(),
            notes: notes.get(),
        };
        controller.submit(draft, clear_form);
    };

    let card = |contact: &Contact| {
        let meta = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());
        let notes = contact
            .notes
            .clone()
            .unwrap_or_else(|| "No notes".to_string());
        view! {
            <h3>{format!("{} {}", contact.first_name, contact.last_name)}</h3>
            <p class="meta"><strong>"Email: "</strong>{contact.email.clone()}</p>
            <p class="meta"><strong>"Phone: "</strong>{meta(&contact.phone)}</p>
            <p class="meta"><strong>"Department: "</strong>{meta(&contact.department)}</p>
            <p class="meta"><strong>"Title: "</strong>{meta(&contact.job_title)}</p>
            <p class="meta"><strong>"Company: "</strong>{meta(&contact.company)}</p>
            <p>{notes}</p>
        }
        .into_any()
    };

    view! {
        <section class=move || section_class(Page::Contacts, store.current_page().get())>
            <h2>"Contacts"</h2>
            <form class="resource-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="First name"
                    required
                    prop:value=move || first_name.get()
                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Last name"
                    required
                    prop:value=move || last_name.get()
                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Department"
                    prop:value=move || department.get()
                    on:input=move |ev| set_department.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Job title"
                    prop:value=move || job_title.get()
                    on:input=move |ev| set_job_title.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Company"
                    prop:value=move || company.get()
                    on:input=move |ev| set_company.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Notes"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn">
                    {move || if editing.get().is_some() { "Update Contact" } else { "Add Contact" }}
                </button>
                {move || editing.get().map(|contact| view! {
                    <button
                        type="button"
                        class="btn cancel-btn"
                        on:click=move |_| {
                            controller.cancel_edit();
                            clear_form();
                        }
                    >
                        {format!("Cancel editing \"{}\"", contact.first_name)}
                    </button>
                })}
            </form>
            <ResourceList controller=controller card_body=card />
        </section>
    }
}
