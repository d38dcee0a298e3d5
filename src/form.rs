//! Form Submission
//!
//! Resolves the named text input from a submitted form and turns its value
//! into a new item. A control that is missing or of another kind makes the
//! submission a no-op.

use js_sys::Object;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlFormControlsCollection, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, RadioNodeList, SubmitEvent,
};

use crate::models::{Item, ItemId};
use crate::store::{store_append_item, AppStore};

/// Name of the input that holds the new item's text
pub const FIELD_NAME: &str = "item";

/// What a named lookup in a form's control collection can yield
#[derive(Debug, Clone, PartialEq)]
pub enum FormControl<T> {
    Input(T),
    TextArea,
    Select,
    Button,
    /// Several controls share the name
    Group(u32),
    /// Any other element, by tag name
    Other(String),
}

impl<T> FormControl<T> {
    pub fn kind(&self) -> String {
        match self {
            FormControl::Input(_) => "input".to_string(),
            FormControl::TextArea => "textarea".to_string(),
            FormControl::Select => "select".to_string(),
            FormControl::Button => "button".to_string(),
            FormControl::Group(count) => format!("group of {}", count),
            FormControl::Other(tag) => tag.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error("submit event has no form target")]
    NoForm,
    #[error("no control named '{name}'")]
    Missing { name: String },
    #[error("control '{name}' is a {found}, not a text input")]
    NotTextInput { name: String, found: String },
}

/// Keep only a text input; anything else fails closed
pub fn narrow<T>(name: &str, found: Option<FormControl<T>>) -> Result<T, ControlError> {
    match found {
        Some(FormControl::Input(input)) => Ok(input),
        Some(other) => Err(ControlError::NotTextInput {
            name: name.to_string(),
            found: other.kind(),
        }),
        None => Err(ControlError::Missing {
            name: name.to_string(),
        }),
    }
}

/// A control whose text can be read and overwritten
pub trait TextControl {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

impl TextControl for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value)
    }
}

impl<T: TextControl + ?Sized> TextControl for &T {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value)
    }
}

/// Create an item from the resolved control.
///
/// `commit` receives the new item and performs the state update; the
/// control is cleared afterwards. Returns the new item's id, or `None`
/// when the control could not be resolved.
pub fn submit_item<C: TextControl>(
    resolved: Result<C, ControlError>,
    commit: impl FnOnce(Item),
) -> Option<ItemId> {
    let Ok(control) = resolved else {
        return None;
    };

    let item = Item::new(control.value());
    let id = item.id;
    commit(item);
    control.set_value("");
    tracing::debug!(%id, "added item");
    Some(id)
}

/// Look up `name` among the form's controls
pub fn lookup_control(form: &HtmlFormElement, name: &str) -> Option<FormControl<HtmlInputElement>> {
    let controls: HtmlFormControlsCollection = form.elements().unchecked_into();
    controls.named_item(name).map(classify)
}

fn classify(found: Object) -> FormControl<HtmlInputElement> {
    if let Some(input) = found.dyn_ref::<HtmlInputElement>() {
        return FormControl::Input(input.clone());
    }
    if let Some(group) = found.dyn_ref::<RadioNodeList>() {
        return FormControl::Group(group.length());
    }
    if found.is_instance_of::<HtmlTextAreaElement>() {
        return FormControl::TextArea;
    }
    if found.is_instance_of::<HtmlSelectElement>() {
        return FormControl::Select;
    }
    if found.is_instance_of::<HtmlButtonElement>() {
        return FormControl::Button;
    }
    match found.dyn_ref::<Element>() {
        Some(el) => FormControl::Other(el.tag_name().to_lowercase()),
        None => FormControl::Other("unknown".to_string()),
    }
}

pub fn resolve_text_input(form: &HtmlFormElement, name: &str) -> Result<HtmlInputElement, ControlError> {
    narrow(name, lookup_control(form, name))
}

/// Submit handler for the new item form
pub fn handle_submit(ev: SubmitEvent, store: AppStore) {
    ev.prevent_default();

    // Delegated listeners can report the document as current target
    let resolved = ev
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        .or_else(|| ev.target().and_then(|target| target.dyn_into::<HtmlFormElement>().ok()))
        .ok_or(ControlError::NoForm)
        .and_then(|form| resolve_text_input(&form, FIELD_NAME));

    submit_item(resolved, |item| store_append_item(&store, item));
}
