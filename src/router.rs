//! Page Router
//!
//! Static page table plus the class derivations that keep exactly one page
//! section and one nav link active. The active page lives in the app store;
//! nothing here keeps state of its own.

use leptos::prelude::*;

use crate::store::{AppStateStoreFields, AppStore};

/// The four navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    Inventory,
    Contacts,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Projects, Page::Inventory, Page::Contacts];

    /// Page identifier as it appears in nav links and the URL hash.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::Inventory => "inventory",
            Page::Contacts => "contacts",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Dashboard",
            Page::Projects => "Projects",
            Page::Inventory => "Inventory",
            Page::Contacts => "Contacts",
        }
    }

    /// Dispatch table from identifier to page; unknown identifiers map to
    /// nothing rather than an error.
    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|page| page.id() == id)
    }
}

/// Switch the visible page. An unknown identifier deactivates every section
/// silently; each page loader re-runs when its page becomes current.
pub fn navigate_to(store: &AppStore, page_id: &str) {
    store.current_page().set(Page::from_id(page_id));
}

pub fn section_class(section: Page, current: Option<Page>) -> &'static str {
    if current == Some(section) {
        "page active"
    } else {
        "page"
    }
}

pub fn nav_class(link: Page, current: Option<Page>) -> &'static str {
    if current == Some(link) {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Starting page from the URL hash: empty hash opens the dashboard, an
/// unknown hash opens nothing.
pub fn page_from_hash() -> Option<Page> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        Some(Page::Home)
    } else {
        Page::from_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_valid_id_maps_to_its_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
        assert_eq!(Page::from_id("home"), Some(Page::Home));
    }

    #[test]
    fn unknown_id_maps_to_nothing() {
        assert_eq!(Page::from_id("settings"), None);
        assert_eq!(Page::from_id(""), None);
    }

    #[test]
    fn exactly_one_section_is_active_for_a_known_page() {
        for current in Page::ALL {
            let active = Page::ALL
                .iter()
                .filter(|s| section_class(**s, Some(current)) == "page active")
                .count();
            assert_eq!(active, 1);
            let nav_active = Page::ALL
                .iter()
                .filter(|s| nav_class(**s, Some(current)) == "nav-link active")
                .count();
            assert_eq!(nav_active, 1);
        }
    }

    #[test]
    fn no_section_is_active_without_a_current_page() {
        for section in Page::ALL {
            assert_eq!(section_class(section, None), "page");
            assert_eq!(nav_class(section, None), "nav-link");
        }
    }
}
