//! Pagination Component
//!
//! Previous / numbered / next page buttons, hidden for a single page.

use leptos::prelude::*;
use todo_query::ViewResult;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Pagination(page_view: Memo<ViewResult>) -> impl IntoView {
    let store = use_app_store();

    let page_buttons = move || {
        page_view.with(|v| {
            v.page_numbers()
                .map(|page| {
                    let class = if page == v.current_page { "page-btn active" } else { "page-btn" };
                    view! {
                        <button
                            class=class
                            on:click=move |_| store.session().update(|s| s.go_to_page(page))
                        >
                            {page}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || page_view.with(|v| v.total_pages > 1)>
            <nav class="pagination">
                <button
                    class="page-nav"
                    prop:disabled=move || !page_view.with(|v| v.has_previous())
                    on:click=move |_| store.session().update(|s| s.previous_page())
                >
                    "←"
                </button>
                {page_buttons}
                <button
                    class="page-nav"
                    prop:disabled=move || !page_view.with(|v| v.has_next())
                    on:click=move |_| store.session().update(|s| s.next_page())
                >
                    "→"
                </button>
            </nav>
        </Show>
    }
}
