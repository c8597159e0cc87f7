use crate::{AttrValue, Element, FlushMode, ManagerConfig};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Weak,
};
use tracing::{debug, trace, warn};

/// Postpones attribute writes until the owner is connected and not rendering.
///
/// `set_attr_value` and `on_attribute_changed` report whether a value differs
/// from the last one seen, whatever the connection state, so callers never
/// need to know a write was deferred. No borrow is held while the owner is
/// called, so a write that re-enters the manager through the owner's
/// attribute observation is fine.
pub struct AttributesManager<E: ?Sized> {
    owner: Weak<E>,
    config: ManagerConfig,
    connected: Cell<bool>,
    pending_values: RefCell<Vec<(String, AttrValue)>>,
    last_set_values: RefCell<HashMap<String, AttrValue>>,
}

impl<E: Element + ?Sized> AttributesManager<E> {
    pub fn new(owner: Weak<E>) -> Self {
        Self::with_config(owner, ManagerConfig::default())
    }

    pub fn with_config(owner: Weak<E>, config: ManagerConfig) -> Self {
        Self {
            owner,
            config,
            connected: Cell::new(false),
            pending_values: Default::default(),
            last_set_values: Default::default(),
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    pub fn pending_value(&self, name: &str) -> Option<AttrValue> {
        self.pending_values
            .borrow()
            .iter()
            .find(|(pending, _)| pending == name)
            .map(|(_, value)| value.clone())
    }

    /// Names with a deferred write, oldest first.
    pub fn pending_names(&self) -> Vec<String> {
        self.pending_values
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn last_set_value(&self, name: &str) -> Option<AttrValue> {
        self.last_set_values.borrow().get(name).cloned()
    }

    /// Called when the owner is disconnected. Pending values stay pending.
    pub fn suspend_attributes_updates(&self) {
        debug!("suspending attribute updates");
        self.connected.set(false);
    }

    /// Called when the owner is connected. Writes every pending value.
    pub fn resume_attributes_updates(&self) {
        debug!(pending = self.pending_values.borrow().len(), "resuming attribute updates");
        self.connected.set(true);
        self.flush();
    }

    /// Called when a render pass of the owner has finished.
    ///
    /// Only flushes when `flush_after_render` is configured; otherwise
    /// values deferred by rendering wait for the next reconnect.
    pub fn on_render_complete(&self) {
        if !self.config.flush_after_render || !self.connected.get() {
            return;
        }
        if self.owner.upgrade().map_or(false, |owner| owner.is_rendering()) {
            return;
        }
        self.flush();
    }

    /// Records an attribute change reported by the host. A pending write for
    /// `name` is dropped, the host value wins.
    ///
    /// Returns `true` if the value differs from the last one recorded.
    pub fn on_attribute_changed(&self, name: &str, value: impl Into<AttrValue>) -> bool {
        let value = value.into();
        self.clear_pending_value(name);
        self.record(name, value)
    }

    /// Updates the attribute, or removes it when `value` is absent.
    ///
    /// While disconnected or rendering, the value is kept and only written
    /// when the owner is connected again. Returns `true` if the value
    /// differs from the last one recorded.
    pub fn set_attr_value(&self, name: &str, value: impl Into<AttrValue>) -> bool {
        let value = value.into();
        let changed = self.record(name, value.clone());
        let rendering = self
            .owner
            .upgrade()
            .map_or(false, |owner| owner.is_rendering());
        if !self.connected.get() || rendering {
            trace!(attribute = name, rendering, "deferring attribute write");
            self.set_pending_value(name, value);
        } else {
            self.clear_pending_value(name);
            self.sync_attr_value(name, &value);
        }
        changed
    }

    fn record(&self, name: &str, value: AttrValue) -> bool {
        let mut last_set_values = self.last_set_values.borrow_mut();
        let changed = last_set_values.get(name) != Some(&value);
        last_set_values.insert(name.into(), value);
        changed
    }

    fn flush(&self) {
        match self.config.flush_mode {
            FlushMode::SinglePass => self.flush_pass(),
            FlushMode::Fixpoint => {
                let mut passes = 0;
                while self.connected.get() && !self.pending_values.borrow().is_empty() {
                    if passes == self.config.max_flush_passes {
                        warn!(
                            passes,
                            pending = ?self.pending_names(),
                            "attribute flush did not settle"
                        );
                        break;
                    }
                    self.flush_pass();
                    passes += 1;
                }
            }
        }
    }

    // Names pending at the start of the pass are written with their latest
    // value. Names deferred during the pass wait for the next flush.
    fn flush_pass(&self) {
        let names: Vec<String> = self.pending_names();
        for name in names {
            let value = self.take_pending_value(&name);
            if let Some(value) = value {
                self.sync_attr_value(&name, &value);
            }
        }
    }

    fn sync_attr_value(&self, name: &str, value: &AttrValue) {
        let owner = match self.owner.upgrade() {
            Some(owner) => owner,
            None => {
                warn!(attribute = name, "owner is gone, dropping attribute write");
                return;
            }
        };
        let current = AttrValue::from(owner.get_attribute(name));
        if current == *value {
            trace!(attribute = name, "attribute already up to date");
            return;
        }
        match value.as_str() {
            Some(value) => {
                trace!(attribute = name, value, "setting attribute");
                owner.set_attribute(name, value);
            }
            None => {
                trace!(attribute = name, "removing attribute");
                owner.remove_attribute(name);
            }
        }
    }

    fn set_pending_value(&self, name: &str, value: AttrValue) {
        let mut pending_values = self.pending_values.borrow_mut();
        match pending_values.iter_mut().find(|(pending, _)| pending == name) {
            Some((_, pending)) => *pending = value,
            None => pending_values.push((name.into(), value)),
        }
    }

    fn take_pending_value(&self, name: &str) -> Option<AttrValue> {
        let mut pending_values = self.pending_values.borrow_mut();
        let index = pending_values.iter().position(|(pending, _)| pending == name)?;
        Some(pending_values.remove(index).1)
    }

    fn clear_pending_value(&self, name: &str) {
        self.take_pending_value(name);
    }
}
