//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_query::{Item, ViewSession};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, filters and page cursor
    pub session: ViewSession,
    /// A list fetch is in flight
    pub loading: bool,
    /// A create request is in flight
    pub posting: bool,
    /// Last user-visible failure
    pub error: Option<String>,
    /// Short-lived success message
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            session: ViewSession::new(page_size),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the item list after a fetch, keeping filters
pub fn store_replace_items(store: &AppStore, items: Vec<Item>) {
    store.session().update(|session| session.replace_items(items));
}

/// Show an error until the next fetch or create
pub fn store_set_error(store: &AppStore, message: impl Into<String>) {
    store.error().set(Some(message.into()));
}

/// Show a notice and clear it after `timeout_ms`, unless replaced meanwhile
pub fn store_flash_notice(store: &AppStore, message: impl Into<String>, timeout_ms: u32) {
    let store = *store;
    let message = message.into();
    store.notice().set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        if store.notice().get_untracked().as_deref() == Some(message.as_str()) {
            store.notice().set(None);
        }
    });
}
