//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route asks the same question of the session: render,
//! redirect, or wait. Keeping the answer a pure function of `SessionState`
//! means the `Guard` component and the tests share one rule set.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::{LANDING_PATH, LOGIN_PATH};
use crate::net::types::Identity;
use crate::state::session::SessionState;

/// A named permission checked by a guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Capability {
    #[default]
    Authenticated,
    Admin,
    Trainer,
}

impl Capability {
    /// Whether `identity` holds this capability.
    pub fn granted_to(self, identity: &Identity) -> bool {
        match self {
            Self::Authenticated => true,
            Self::Admin => identity.admin,
            Self::Trainer => identity.trainer,
        }
    }
}

/// What a guard should do on this render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity not known yet: render nothing, navigate nowhere.
    Defer,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
    /// Render the guarded subtree.
    Render,
}

/// Decide how a guard requiring `capability` treats `state`.
pub fn decide(state: &SessionState, capability: Capability) -> GuardDecision {
    if state.loading {
        return GuardDecision::Defer;
    }
    match &state.identity {
        None => GuardDecision::Redirect(LOGIN_PATH),
        Some(identity) if !capability.granted_to(identity) => GuardDecision::Redirect(LANDING_PATH),
        Some(_) => GuardDecision::Render,
    }
}
