//! Item List App
//!
//! Root component: heading and form on the side, list of items in the main section.

use leptos::prelude::*;

use crate::components::{ItemList, NewItemForm};
use crate::store::provide_app_store;

#[component]
pub fn App() -> impl IntoView {
    // Seed items are created once per mount
    provide_app_store();
    tracing::info!("item list mounted");

    view! {
        <main>
            <aside>
                <h1>"Prueba técnica de React"</h1>
                <h2>"Añadir y eliminar elementos de una lista"</h2>
                <NewItemForm />
            </aside>
            <section>
                <h2>"Lista de elementos"</h2>
                <ItemList />
            </section>
        </main>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn list_texts(root: &HtmlElement) -> Vec<String> {
        let entries = root.query_selector_all("li").unwrap();
        (0..entries.length())
            .filter_map(|i| entries.item(i))
            .filter_map(|node| node.text_content())
            .collect()
    }

    #[wasm_bindgen_test]
    fn initial_render_shows_seed_items() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&root).unwrap();

        let handle = leptos::mount::mount_to(root.clone(), App);

        assert_eq!(list_texts(&root), vec!["Videojuegos", "Libros"]);
        let input = root.query_selector("input[name=item]").unwrap().unwrap();
        assert!(input.has_attribute("required"));
        assert_eq!(input.get_attribute("type").as_deref(), Some("text"));

        drop(handle);
        root.remove();
    }
}
