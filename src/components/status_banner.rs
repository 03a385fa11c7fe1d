//! Status Banner Component
//!
//! Error and success messages above the form.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.error().get().map(|message| view! {
            <div class="alert alert-error" role="alert">
                <span>{message}</span>
                <button class="alert-dismiss" on:click=move |_| store.error().set(None)>"×"</button>
            </div>
        })}
        {move || store.notice().get().map(|message| view! {
            <div class="alert alert-success" role="status">{message}</div>
        })}
    }
}
