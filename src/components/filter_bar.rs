//! Filter Bar Component
//!
//! Search box and from/to date inputs. Every edit goes back to page 1.

use leptos::prelude::*;
use todo_query::date::parse_day;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    // Raw input values; the session only sees parsed days
    let (search, set_search) = signal(String::new());
    let (from_input, set_from_input) = signal(String::new());
    let (to_input, set_to_input) = signal(String::new());

    let has_filters = move || store.session().with(|s| !s.filter().is_empty());

    let clear_filters = move |_| {
        set_search.set(String::new());
        set_from_input.set(String::new());
        set_to_input.set(String::new());
        store.session().update(|s| s.reset_filters());
    };

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="filter-search"
                placeholder="Search..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_search.set(value.clone());
                    store.session().update(|s| s.set_search_term(value));
                }
            />
            <input
                type="date"
                class="filter-date"
                prop:value=move || from_input.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    let day = parse_day(&value);
                    set_from_input.set(value);
                    store.session().update(|s| s.set_from_date(day));
                }
            />
            <input
                type="date"
                class="filter-date"
                prop:value=move || to_input.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    let day = parse_day(&value);
                    set_to_input.set(value);
                    store.session().update(|s| s.set_to_date(day));
                }
            />
            <Show when=has_filters>
                <button type="button" class="filter-clear" on:click=clear_filters>"Clear"</button>
            </Show>
        </div>
    }
}
