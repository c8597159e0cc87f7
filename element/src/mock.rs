use crate::Element;
use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mutation {
    Set(String, String),
    Remove(String),
}

type Observer = Box<dyn Fn(&str, Option<&str>)>;

/// In-memory element that records every mutation it receives.
#[derive(Default)]
pub(crate) struct MockElement {
    attributes: RefCell<BTreeMap<String, String>>,
    mutations: RefCell<Vec<Mutation>>,
    rendering: Cell<bool>,
    observer: RefCell<Option<Observer>>,
}

impl MockElement {
    pub(crate) fn with_attribute(self, name: &str, value: &str) -> Self {
        self.attributes
            .borrow_mut()
            .insert(name.into(), value.into());
        self
    }

    pub(crate) fn set_rendering(&self, rendering: bool) {
        self.rendering.set(rendering);
    }

    pub(crate) fn mutations(&self) -> Vec<Mutation> {
        self.mutations.borrow().clone()
    }

    pub(crate) fn mutation_count(&self) -> usize {
        self.mutations.borrow().len()
    }

    /// Changes an attribute without recording it, like a script touching the DOM directly.
    pub(crate) fn mutate_externally(&self, name: &str, value: Option<&str>) {
        let mut attributes = self.attributes.borrow_mut();
        match value {
            Some(value) => attributes.insert(name.into(), value.into()),
            None => attributes.remove(name),
        };
    }

    /// Called after every recorded mutation, as `attributeChangedCallback` would be.
    pub(crate) fn observe<F: 'static + Fn(&str, Option<&str>)>(&self, f: F) {
        *self.observer.borrow_mut() = Some(Box::new(f));
    }

    fn notify(&self, name: &str, value: Option<&str>) {
        if let Some(observer) = &*self.observer.borrow() {
            observer(name, value);
        }
    }
}

impl Element for MockElement {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.into(), value.into());
        self.mutations
            .borrow_mut()
            .push(Mutation::Set(name.into(), value.into()));
        self.notify(name, Some(value));
    }

    fn remove_attribute(&self, name: &str) {
        self.attributes.borrow_mut().remove(name);
        self.mutations
            .borrow_mut()
            .push(Mutation::Remove(name.into()));
        self.notify(name, None);
    }

    fn is_rendering(&self) -> bool {
        self.rendering.get()
    }
}
