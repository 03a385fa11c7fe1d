//! Todo List View Component
//!
//! Renders the current page of the filtered list.

use leptos::prelude::*;
use todo_query::ViewResult;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView(page_view: Memo<ViewResult>) -> impl IntoView {
    let store = use_app_store();

    let page_items = move || page_view.with(|v| v.page_items.clone());

    move || {
        if store.loading().get() {
            view! { <p class="status-line">"Loading..."</p> }.into_any()
        } else if page_view.with(|v| v.is_empty()) {
            view! { <p class="status-line">"No tasks found."</p> }.into_any()
        } else {
            view! {
                <ul class="todo-list">
                    <For
                        each=page_items
                        key=|item| (item.id.clone(), item.completed, item.text.clone())
                        children=|item| view! { <TodoRow item=item /> }
                    />
                </ul>
            }
            .into_any()
        }
    }
}
