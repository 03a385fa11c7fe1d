//! Todo Row Component
//!
//! A single todo with its creation day and status badge.

use leptos::prelude::*;
use todo_query::date::format_day;
use todo_query::Item;

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let completed = item.completed;
    let day = format_day(item.created_day());
    let badge_class = if completed { "badge done" } else { "badge pending" };

    view! {
        <li class="todo-row">
            <div>
                <span class="todo-text">{item.text}</span>
                <br />
                <small class="todo-date">{day}</small>
            </div>
            <span class=badge_class>
                {if completed { "✔ Done" } else { "⏳ Pending" }}
            </span>
        </li>
    }
}
