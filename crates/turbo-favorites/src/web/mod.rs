//! Browser bindings and the Leptos modal component.

mod browser;
mod component;

pub use browser::{browser_controller, AlertNotifier, DomRegion};
pub use component::ProductModal;
