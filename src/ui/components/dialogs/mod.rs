//! Dialog renderers used by the dialog component

pub mod common;
pub mod list_dialogs;
pub mod scroll_behavior;
pub mod system_dialogs;
pub mod todo_dialogs;
