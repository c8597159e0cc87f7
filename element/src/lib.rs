pub mod attributes;
pub mod component;
pub mod config;
pub mod element;
pub mod value;

pub use attributes::AttributesManager;
pub use component::Component;
pub use config::{FlushMode, ManagerConfig, ParseFlushModeError};
pub use element::Element;
pub use value::AttrValue;

#[cfg(test)]
pub(crate) mod mock;
