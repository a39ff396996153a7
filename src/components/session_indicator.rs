//! Expired-session overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once at the router root so it stays visible across the redirect
//! that a lapsed session triggers. The overlay cannot be dismissed; the only
//! way out is re-authenticating, which runs the store's logout.

#[cfg(test)]
#[path = "session_indicator_test.rs"]
mod session_indicator_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStore};

/// Visibility of the overlay, derived from the session on every change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorPhase {
    #[default]
    Hidden,
    Shown,
}

impl IndicatorPhase {
    pub fn from_session(state: &SessionState) -> Self {
        if state.expired && state.identity.is_none() { Self::Shown } else { Self::Hidden }
    }
}

/// Overlay with a "log in again" action shown while the session is expired.
#[component]
pub fn SessionIndicator() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let navigate = use_navigate();

    let on_reauth = Callback::new(move |()| store.logout(navigate.clone()));

    view! {
        <Show when=move || session.with(IndicatorPhase::from_session) == IndicatorPhase::Shown>
            <div class="session-indicator__backdrop" aria-hidden="true"></div>
            <div class="session-indicator" role="alertdialog" aria-modal="true">
                <p class="session-indicator__title">"Your session has expired or you were logged out."</p>
                <p class="session-indicator__body">"Log in again to continue."</p>
                <button class="btn btn--primary" on:click=move |_| on_reauth.run(())>
                    "Log in again"
                </button>
            </div>
        </Show>
    }
}
