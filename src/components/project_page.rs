//! Projects Page Component
//!
//! Create/edit form plus the project card list.

use leptos::prelude::*;

use crate::models::{coerce_f64, Project, ProjectDraft};
use crate::router::{section_class, Page};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::SyncController;

use super::ResourceList;

/// Status options offered by the form
const PROJECT_STATUSES: &[(&str, &str)] = &[
    ("planning", "Planning"),
    ("active", "Active"),
    ("on_hold", "On Hold"),
    ("completed", "Completed"),
    ("cancelled", "Cancelled"),
];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let store = use_app_store();
    let controller = SyncController::<Project>::new(store);

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (owner, set_owner) = signal(String::new());
    let (budget, set_budget) = signal(String::new());
    let (status, set_status) = signal(String::from("planning"));

    // Re-fetch every time the page becomes current.
    Effect::new(move |_| {
        if store.current_page().get() == Some(Page::Projects) {
            controller.load();
        }
    });

    // Mirror the record under edit into the form.
    let editing = controller.editing();
    Effect::new(move |_| {
        if let Some(project) = editing.get() {
            set_name.set(project.name);
            set_description.set(project.description.unwrap_or_default());
            set_owner.set(project.owner);
            set_budget.set(project.budget.to_string());
            set_status.set(project.status);
        }
    });

    let clear_form = move || {
        set_name.set(String::new());
        set_description.set(String::new());
        set_owner.set(String::new());
        set_budget.set(String::new());
        set_status.set(String::from("planning"));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ProjectDraft {
            name: name.get(),
            description: description.get(),
            owner: owner.get(),
            budget: coerce_f64(&budget.get()),
            status: status.get(),
        };
        controller.submit(draft, clear_form);
    };

    let card = |project: &Project| {
        let description = project
            .description
            .clone()
            .unwrap_or_else(|| "No description".to_string());
        view! {
            <h3>{project.name.clone()}</h3>
            <p class="meta"><strong>"Owner: "</strong>{project.owner.clone()}</p>
            <p class="meta"><strong>"Status: "</strong>{project.status.clone()}</p>
            <p class="meta"><strong>"Budget: "</strong>{format!("${}", project.budget)}</p>
            <p>{description}</p>
        }
        .into_any()
    };

    view! {
        <section class=move || section_class(Page::Projects, store.current_page().get())>
            <h2>"Projects"</h2>
            <form class="resource-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Project name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Owner"
                    required
                    prop:value=move || owner.get()
                    on:input=move |ev| set_owner.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Budget"
                    prop:value=move || budget.get()
                    on:input=move |ev| set_budget.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || status.get()
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    {PROJECT_STATUSES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn">
                    {move || if editing.get().is_some() { "Update Project" } else { "Add Project" }}
                </button>
                {move || editing.get().map(|project| view! {
                    <button
                        type="button"
                        class="btn cancel-btn"
                        on:click=move |_| {
                            controller.cancel_edit();
                            clear_form();
                        }
                    >
                        {format!("Cancel editing \"{}\"", project.name)}
                    </button>
                })}
            </form>
            <ResourceList controller=controller card_body=card />
        </section>
    }
}
