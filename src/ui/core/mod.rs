//! Core UI building blocks.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background API calls reporting back through actions
//!
//! Components turn input into [`Action`]s, the app component turns actions
//! into background API calls, and the results come back as actions again.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{LoadRequest, RefreshPolicy, Snapshot, TaskId, TaskManager};
