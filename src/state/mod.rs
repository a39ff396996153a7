//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state lives behind a single context-provided store so every
//! identity-aware view reads the same signal.

pub mod session;
