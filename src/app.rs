//! Todo List Frontend App
//!
//! Main application component: form, filters, list and pagination.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{FilterBar, NewTodoForm, Pagination, StatusBanner, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_replace_items, store_set_error, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let store = Store::new(AppState::new(config.page_size));
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load todos on mount and whenever a reload is triggered
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let config = ctx.config();
        log::info!("[APP] Loading todos, trigger={}", trigger);
        store.loading().set(true);
        store.error().set(None);
        spawn_local(async move {
            match commands::list_todos(&config).await {
                Ok(items) => {
                    log::info!("[APP] Loaded {} todos", items.len());
                    store_replace_items(&store, items);
                }
                Err(err) => {
                    log::error!("[APP] {} ({})", err, err.detail());
                    store_set_error(&store, err.to_string());
                }
            }
            store.loading().set(false);
        });
    });

    let page_view = Memo::new(move |_| store.session().with(|session| session.view()));

    view! {
        <div class="todo-app">
            <h3 class="todo-title">"Todo List"</h3>

            <StatusBanner />

            <section class="todo-section">
                <h6>"Add New Task"</h6>
                <NewTodoForm />
            </section>

            <section class="todo-section">
                <h6>"Filter Tasks"</h6>
                <FilterBar />
            </section>

            <TodoListView page_view=page_view />

            <Pagination page_view=page_view />

            <p class="item-count">
                {move || page_view.with(|v| format!("{} of {} todos", v.filtered_count, store.session().with(|s| s.items().len())))}
            </p>
        </div>
    }
}
