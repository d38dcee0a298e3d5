//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// Texts of the items present before any submission
pub const SEED_ITEMS: [&str; 2] = ["Videojuegos", "Libros"];

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in insertion order
    pub items: Vec<Item>,
}

impl AppState {
    /// State with one fresh item per seed text
    pub fn seeded() -> Self {
        Self {
            items: SEED_ITEMS.into_iter().map(Item::new).collect(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Create the store and provide it to all children
pub fn provide_app_store() {
    provide_context(Store::new(AppState::seeded()));
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// New sequence holding `prev` followed by `item`
pub fn append_item(prev: &[Item], item: Item) -> Vec<Item> {
    let mut next = Vec::with_capacity(prev.len() + 1);
    next.extend_from_slice(prev);
    next.push(item);
    next
}

/// Append an item to the store, replacing the previous sequence
pub fn store_append_item(store: &AppStore, item: Item) {
    let items = store.items();
    let mut guard = items.write();
    *guard = append_item(&guard, item);
}
