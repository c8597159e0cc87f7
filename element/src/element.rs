/// The host element an [`AttributesManager`](crate::AttributesManager) writes through.
///
/// Handles to DOM nodes are shared, so mutations only need `&self`.
/// Implementations must not panic on host failures.
pub trait Element {
    fn get_attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    /// Whether a render pass is currently in progress.
    fn is_rendering(&self) -> bool;
}
