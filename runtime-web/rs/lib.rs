mod element;
mod utils;

pub use element::{to_attr_value, WebElement};

use kochab_element::{Component, Element as _, FlushMode, ManagerConfig};
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn internal_init() {
    utils::set_panic_hook();
    utils::set_tracing_subscriber();
}

/// Attribute state of one custom element instance.
///
/// A custom element class keeps one of these and forwards its
/// `connectedCallback`, `disconnectedCallback` and `attributeChangedCallback`.
#[wasm_bindgen]
pub struct AttributeHost {
    component: Component<WebElement>,
}

impl AttributeHost {
    fn with_config(element: web_sys::Element, config: ManagerConfig) -> Self {
        Self {
            component: Component::with_config(Rc::new(WebElement::new(element)), config),
        }
    }
}

#[wasm_bindgen]
impl AttributeHost {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web_sys::Element) -> AttributeHost {
        Self::with_config(element, ManagerConfig::default())
    }

    #[wasm_bindgen(js_name = withFlushMode)]
    pub fn with_flush_mode(element: web_sys::Element, mode: &str) -> Result<AttributeHost, JsValue> {
        let flush_mode = mode
            .parse::<FlushMode>()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        debug!(?flush_mode, "creating attribute host");
        Ok(Self::with_config(
            element,
            ManagerConfig::default().with_flush_mode(flush_mode),
        ))
    }

    #[wasm_bindgen(js_name = connectedCallback)]
    pub fn connected_callback(&self) {
        self.component.connected_callback();
    }

    #[wasm_bindgen(js_name = disconnectedCallback)]
    pub fn disconnected_callback(&self) {
        self.component.disconnected_callback();
    }

    #[wasm_bindgen(js_name = attributeChangedCallback)]
    pub fn attribute_changed_callback(&self, name: &str, old: JsValue, new: JsValue) -> bool {
        self.component
            .attribute_changed_callback(name, to_attr_value(&old), to_attr_value(&new))
    }

    #[wasm_bindgen(js_name = setAttributeWhenConnected)]
    pub fn set_attribute_when_connected(&self, name: &str, value: JsValue) -> bool {
        self.component
            .set_attribute_when_connected(name, to_attr_value(&value))
    }

    #[wasm_bindgen(js_name = beginRender)]
    pub fn begin_render(&self) {
        self.component.element().set_rendering(true);
    }

    #[wasm_bindgen(js_name = endRender)]
    pub fn end_render(&self) {
        self.component.element().set_rendering(false);
        self.component.rendered();
    }

    #[wasm_bindgen(js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        self.component.attributes().is_connected()
    }

    #[wasm_bindgen(js_name = isRendering)]
    pub fn is_rendering(&self) -> bool {
        self.component.element().is_rendering()
    }
}
