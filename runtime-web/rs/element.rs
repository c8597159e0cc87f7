use kochab_element::{AttrValue, Element};
use std::cell::Cell;
use tracing::error;
use wasm_bindgen::prelude::*;

/// A DOM element with the render flag kept on the Rust side.
pub struct WebElement {
    element: web_sys::Element,
    rendering: Cell<bool>,
}

impl WebElement {
    pub fn new(element: web_sys::Element) -> Self {
        Self {
            element,
            rendering: Cell::new(false),
        }
    }

    pub fn set_rendering(&self, rendering: bool) {
        self.rendering.set(rendering);
    }
}

impl Element for WebElement {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.element.set_attribute(name, value) {
            error!(attribute = name, error = ?err, "failed to set attribute");
        }
    }

    fn remove_attribute(&self, name: &str) {
        if let Err(err) = self.element.remove_attribute(name) {
            error!(attribute = name, error = ?err, "failed to remove attribute");
        }
    }

    fn is_rendering(&self) -> bool {
        self.rendering.get()
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Coerces a JS value with `String(value)`, `null` and `undefined` being
/// absent.
pub fn to_attr_value(value: &JsValue) -> AttrValue {
    if value.is_null() || value.is_undefined() {
        AttrValue::Absent
    } else if let Some(value) = value.as_string() {
        value.into()
    } else {
        js_string(value).into()
    }
}
