//! Constants used throughout the application
//!
//! This module centralizes UI text, log messages, and layout limits.

// Server defaults
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const API_URL_ENV: &str = "TICKLIST_API_URL";

// Sidebar entry shown when the service has no named lists
pub const FLAT_MODE_LIST_NAME: &str = "All Todos";

// Validation messages
pub const ERROR_EMPTY_ENTRY: &str = "Entry can't be empty";
pub const ERROR_EMPTY_LIST_NAME: &str = "List name can't be empty";
pub const ERROR_LAST_LIST: &str = "Cannot delete the last remaining list";
pub const ERROR_LISTS_DISABLED: &str = "Named lists are disabled for this server";

// Alert prompts
pub const ALERT_DELETE_TODO: &str = "You sure to delete this item?";
pub const ALERT_DELETE_LIST: &str = "You sure to delete this list and all its items?";

// Log messages
pub const LOG_LOAD_FAILED: &str = "Failed to load data";
pub const LOG_REORDER_FAILED: &str = "Failed to save new order, reloading";

// UI messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const LOADING: &str = "Loading...";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
