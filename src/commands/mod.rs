//! UI-facing commands
//!
//! Each command returns a response envelope instead of failing, so the UI can
//! show the error text as-is.

pub mod catalog;
pub mod preferences;
