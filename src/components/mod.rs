//! UI Components
//!
//! Page sections and shared controls, one component per file.

mod contact_page;
mod dashboard;
mod delete_confirm_button;
mod inventory_page;
mod nav_bar;
mod notice_bar;
mod project_page;
mod resource_list;
mod theme_toggle;

pub use contact_page::ContactsPage;
pub use dashboard::DashboardPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use inventory_page::InventoryPage;
pub use nav_bar::NavBar;
pub use notice_bar::NoticeBar;
pub use project_page::ProjectsPage;
pub use resource_list::ResourceList;
pub use theme_toggle::ThemeToggle;
