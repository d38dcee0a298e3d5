//! New Item Form Component
//!
//! Uncontrolled form: the input is read and cleared on submit.

use leptos::prelude::*;

use crate::form::{handle_submit, FIELD_NAME};
use crate::store::use_app_store;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    view! {
        <form class="new-item-form" on:submit=move |ev| handle_submit(ev, store)>
            <label>
                "Elemento a introducir:"
                <input name=FIELD_NAME required type="text" placeholder="Elemento" />
            </label>
            <button type="submit">"Añadir elemento a la lista"</button>
        </form>
    }
}
