use crate::{AttrValue, AttributesManager, Element, ManagerConfig};
use std::{cell::OnceCell, rc::Rc};

/// Base state of a custom element.
///
/// Owns the host element and routes its lifecycle callbacks into an
/// [`AttributesManager`] that is created on first use.
pub struct Component<E: ?Sized> {
    element: Rc<E>,
    config: ManagerConfig,
    attributes: OnceCell<AttributesManager<E>>,
}

impl<E: Element + ?Sized> Component<E> {
    pub fn new(element: Rc<E>) -> Self {
        Self::with_config(element, ManagerConfig::default())
    }

    pub fn with_config(element: Rc<E>, config: ManagerConfig) -> Self {
        Self {
            element,
            config,
            attributes: OnceCell::new(),
        }
    }

    pub fn element(&self) -> &Rc<E> {
        &self.element
    }

    pub fn attributes(&self) -> &AttributesManager<E> {
        self.attributes.get_or_init(|| {
            AttributesManager::with_config(Rc::downgrade(&self.element), self.config.clone())
        })
    }

    pub fn connected_callback(&self) {
        self.attributes().resume_attributes_updates();
    }

    pub fn disconnected_callback(&self) {
        self.attributes().suspend_attributes_updates();
    }

    /// Returns `true` if `new` differs from the value last set on this component.
    pub fn attribute_changed_callback(
        &self,
        name: &str,
        _old: impl Into<AttrValue>,
        new: impl Into<AttrValue>,
    ) -> bool {
        self.attributes().on_attribute_changed(name, new)
    }

    /// Updates or removes (when `value` is absent) the attribute once the
    /// component is connected and not rendering.
    pub fn set_attribute_when_connected(&self, name: &str, value: impl Into<AttrValue>) -> bool {
        self.attributes().set_attr_value(name, value)
    }

    pub fn rendered(&self) {
        self.attributes().on_render_complete();
    }
}
