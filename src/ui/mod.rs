//! Terminal user interface.
//!
//! [`app_component::AppComponent`] owns the state and the child components,
//! [`renderer::run_app`] drives the terminal and the event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use layout::LayoutManager;
pub use renderer::run_app;
