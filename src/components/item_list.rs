//! Item List Component
//!
//! Read-only list of items in insertion order, keyed by item id.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="item-list">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=|item| view! { <li>{item.text}</li> }
            />
        </ul>
    }
}
