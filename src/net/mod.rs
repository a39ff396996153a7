//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and classifies failures; `types` defines the
//! JSON schema shared with the backend.

pub mod api;
pub mod types;
