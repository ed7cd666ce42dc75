//! Utility modules for ticklist.
//!
//! - [`datetime`] - deadline parsing, shorthand input and human-readable formatting

pub mod datetime;
