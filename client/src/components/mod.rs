//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the workspace chrome and the upload/summary surfaces
//! while reading shared state from Leptos context providers.

pub mod file_upload;
pub mod navbar;
pub mod summary_display;
pub mod summary_history;
