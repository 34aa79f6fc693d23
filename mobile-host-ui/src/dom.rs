// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small DOM helpers shared by the widgets and the desktop adapter.

use crate::error::MobileHostError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord, Node,
    NodeList,
};

pub fn document() -> Result<Document, MobileHostError> {
    web_sys::window()
        .ok_or(MobileHostError::NoWindow)?
        .document()
        .ok_or(MobileHostError::NoDocument)
}

pub fn body() -> Result<HtmlElement, MobileHostError> {
    document()?.body().ok_or(MobileHostError::NoDocument)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Remove every element carrying `id`. Returns how many were removed.
pub fn remove_all_by_id(id: &str) -> usize {
    let mut removed = 0;
    while let Some(element) = element_by_id(id) {
        element.remove();
        removed += 1;
    }
    removed
}

pub fn text_of(id: &str) -> Option<String> {
    element_by_id(id)?
        .text_content()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Elements matching `selector` below `root`; empty when the selector is invalid.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

pub fn is_display_none(element: &HtmlElement) -> bool {
    element
        .style()
        .get_property_value("display")
        .map(|display| display.trim() == "none")
        .unwrap_or(false)
}

/// Create an element with the given class and append it to `parent`.
pub fn append_element(
    document: &Document,
    parent: &Element,
    tag: &str,
    class: &str,
) -> Result<HtmlElement, MobileHostError> {
    let element = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MobileHostError::Dom(format!("<{tag}> is not an HtmlElement")))?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    parent.append_child(&element)?;
    Ok(element)
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// A connected `MutationObserver`, disconnected on drop.
pub struct ObserverGuard {
    observer: MutationObserver,
    _callback: ObserverCallback,
}

impl ObserverGuard {
    pub fn observe(
        target: &Node,
        options: &MutationObserverInit,
        mut on_records: impl FnMut(Vec<MutationRecord>) + 'static,
    ) -> Result<Self, MobileHostError> {
        let callback: ObserverCallback = Closure::new(move |records: js_sys::Array, _observer: MutationObserver| {
            let records = records
                .iter()
                .map(|record| record.unchecked_into::<MutationRecord>())
                .collect();
            on_records(records);
        });
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe_with_options(target, options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observer options for a filtered attribute watch that keeps old values.
pub fn attribute_watch(attribute: &str) -> MutationObserverInit {
    let options = MutationObserverInit::new();
    options.set_attributes(true);
    options.set_attribute_old_value(true);
    options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str(attribute)));
    options
}

/// Observer options for text changes anywhere below the target.
pub fn text_watch() -> MutationObserverInit {
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_character_data(true);
    options.set_subtree(true);
    options
}
