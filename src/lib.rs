//! ticklist - a terminal client for a to-do list REST service
//!
//! Lists, creates, edits, deletes, reorders and flags to-do items, grouped
//! into named lists. All data lives on the server; the client keeps an
//! in-memory copy that is refetched after every change.
//!
//! # Modules
//!
//! * [`api`] - REST client and wire types
//! * [`config`] - Application configuration management
//! * [`ordering`] - Local reordering of items
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date helpers

/// REST API client, wire types and the `TodoApi` seam
pub mod api;

/// Command line parsing
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Log plumbing and the in-memory log buffer
pub mod logger;

/// Position bookkeeping for drag and drop
pub mod ordering;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;
