//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and math helpers live here so pages and components stay thin
//! and the rules are testable without a browser.

pub mod guard;
pub mod one_rep_max;
