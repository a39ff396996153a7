//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from the context-provided `SessionStore`;
//! only `SessionProvider` creates it.

pub mod guard;
pub mod layout;
pub mod session_indicator;
pub mod session_provider;
