//! Reusable UI components

pub mod alert_component;
pub mod dialog_component;
pub mod dialogs;
pub mod input_field;
pub mod scrollbar_helper;
pub mod sidebar_component;
pub mod status_bar;
pub mod todo_item_component;
pub mod todo_list_component;

// Component exports
pub use alert_component::AlertComponent;
pub use dialog_component::DialogComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
pub use todo_list_component::TodoListComponent;
