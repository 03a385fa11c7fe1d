//! New Todo Form Component
//!
//! Text input plus submit button for creating todos.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateTodoArgs};
use crate::context::use_app_context;
use crate::store::{store_flash_notice, store_set_error, use_app_store, AppStateStoreFields};

const CREATED_NOTICE: &str = "Todo added successfully!";

/// Form for creating a new todo; a successful create reloads the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let posting = move || store.posting().get();

    let create_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        let config = ctx.config();
        store.posting().set(true);
        store.error().set(None);

        spawn_local(async move {
            match commands::create_todo(&config, &CreateTodoArgs::new(&text)).await {
                Ok(()) => {
                    log::info!("[FORM] Created todo");
                    set_new_text.set(String::new());
                    store_flash_notice(&store, CREATED_NOTICE, config.notice_timeout_ms);
                    ctx.reload();
                }
                Err(err) => {
                    log::error!("[FORM] {} ({})", err, err.detail());
                    store_set_error(&store, err.to_string());
                }
            }
            store.posting().set(false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="New task..."
                prop:value=move || new_text.get()
                prop:disabled=posting
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" prop:disabled=posting>
                {move || if posting() { "Adding..." } else { "Add" }}
            </button>
        </form>
    }
}
