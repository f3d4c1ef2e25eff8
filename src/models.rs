//! Frontend Models
//!
//! Record shapes matching the REST API entities, plus the draft shapes
//! submitted on create/update (drafts carry no id; ids come from the server).

use serde::{Deserialize, Serialize};

use crate::api::ApiRecord;

/// Project record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub owner: String,
    pub budget: f64,
    pub status: String,
}

/// Project fields as submitted by the form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub budget: f64,
    pub status: String,
}

impl ApiRecord for Project {
    const RESOURCE: &'static str = "projects";
    const LABEL: &'static str = "project";
    const EMPTY_MESSAGE: &'static str = "No projects yet. Create one to get started!";
    type Draft = ProjectDraft;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Inventory item record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub description: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryItemDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub location: String,
}

impl ApiRecord for InventoryItem {
    const RESOURCE: &'static str = "inventory";
    const LABEL: &'static str = "item";
    const EMPTY_MESSAGE: &'static str = "No inventory items yet. Add one to get started!";
    type Draft = InventoryItemDraft;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Contact record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_title: String,
    pub company: String,
    pub notes: String,
}

impl ApiRecord for Contact {
    const RESOURCE: &'static str = "contacts";
    const LABEL: &'static str = "contact";
    const EMPTY_MESSAGE: &'static str = "No contacts yet. Add one to get started!";
    type Draft = ContactDraft;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Lenient float coercion for form fields; unparseable input becomes 0.
/// Partially numeric input like "12abc" counts as unparseable (0), not as
/// its numeric prefix (12).
pub fn coerce_f64(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Lenient integer coercion for form fields; unparseable input becomes 0.
pub fn coerce_u32(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_parses_valid_numbers() {
        assert_eq!(coerce_f64("1500.50"), 1500.5);
        assert_eq!(coerce_f64(" 42 "), 42.0);
        assert_eq!(coerce_u32("17"), 17);
    }

    #[test]
    fn coerce_defaults_to_zero_on_garbage() {
        assert_eq!(coerce_f64(""), 0.0);
        assert_eq!(coerce_f64("abc"), 0.0);
        assert_eq!(coerce_f64("12abc"), 0.0);
        assert_eq!(coerce_u32("-3"), 0);
        assert_eq!(coerce_u32("12.5"), 0);
    }

    #[test]
    fn records_deserialize_from_api_payloads() {
        // Payloads carry server-side bookkeeping fields the client ignores.
        let project: Project = serde_json::from_str(
            r#"{"id":1,"name":"Website","description":null,"owner":"Ana",
                "budget":1000.0,"status":"active","created_at":"2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(project.id, 1);
        assert_eq!(project.description, None);

        let contact: Contact = serde_json::from_str(
            r#"{"id":9,"first_name":"Kim","last_name":"Lee","email":"k@l.io",
                "phone":null,"department":null,"job_title":null,"company":null,
                "notes":null,"status":"active"}"#,
        )
        .unwrap();
        assert_eq!(contact.last_name, "Lee");
    }

    #[test]
    fn drafts_serialize_without_id() {
        let draft = ProjectDraft {
            name: "Website".into(),
            status: "planning".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Website");
        assert_eq!(json["budget"], 0.0);
    }
}
