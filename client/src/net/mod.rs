//! Networking modules for the summarizer backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints behind message-string error handling;
//! `types` defines the wire schema the backend owns.

pub mod api;
pub mod types;
