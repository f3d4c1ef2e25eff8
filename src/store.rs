//! Global Application State Store
//!
//! One reactive_stores Store owns the process-wide mutable state: the
//! current page, the theme, and the active notice. Everything else is
//! component-local.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::router::Page;
use crate::theme::Theme;

/// How long a notice stays on screen.
const NOTICE_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

/// A transient user-visible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    seq: u32,
}

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently visible page; None means no section is active
    pub current_page: Option<Page>,
    /// Light/dark preference
    pub theme: Theme,
    /// Active notification, if any
    pub notice: Option<Notice>,
    /// Sequence number of the most recent notice; lets a dismiss timer
    /// recognize that a newer notice has replaced the one it armed for
    pub notice_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Show a notice and log it to the console, then auto-dismiss it unless a
/// newer notice has replaced it in the meantime.
pub fn notify(store: AppStore, level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    let line = format!("[NOTICE] {}", message);
    match level {
        NoticeLevel::Error => web_sys::console::error_1(&line.into()),
        NoticeLevel::Success => web_sys::console::log_1(&line.into()),
    }

    let seq = store.notice_seq().get_untracked().wrapping_add(1);
    store.notice_seq().set(seq);
    store.notice().set(Some(Notice { message, level, seq }));

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_MS).await;
        let active = store.notice().get_untracked();
        if is_current(&active, seq) {
            store.notice().set(None);
        }
    });
}

/// Whether the active notice is still the one a dismiss timer was armed for.
fn is_current(active: &Option<Notice>, seq: u32) -> bool {
    active.as_ref().is_some_and(|notice| notice.seq == seq)
}

pub fn notify_success(store: AppStore, message: impl Into<String>) {
    notify(store, NoticeLevel::Success, message);
}

pub fn notify_error(store: AppStore, message: impl Into<String>) {
    notify(store, NoticeLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(seq: u32) -> Notice {
        Notice {
            message: "Project added".to_string(),
            level: NoticeLevel::Success,
            seq,
        }
    }

    #[test]
    fn dismiss_only_fires_for_the_notice_it_was_armed_for() {
        assert!(is_current(&Some(notice(3)), 3));
        // A newer notice with identical text must not be dismissed early.
        assert!(!is_current(&Some(notice(4)), 3));
        assert!(!is_current(&None, 3));
    }

    #[test]
    fn state_starts_with_no_notice() {
        let state = AppState::default();
        assert!(state.notice.is_none());
        assert_eq!(state.notice_seq, 0);
    }
}
