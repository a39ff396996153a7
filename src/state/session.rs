//! Session state for the current browser user.
//!
//! ARCHITECTURE
//! ============
//! `SessionState` is a plain value with the transition rules (resolution
//! tickets, expiry detection, logout reset). `SessionStore` wraps it in a
//! signal, owns the background poll, and is handed to components through
//! context by `SessionProvider`. Guards and the session indicator only read.
//!
//! TRADE-OFFS
//! ==========
//! Resolutions are never cancelled. Each one takes a ticket when issued and
//! only the most recently issued ticket may write, so a slow initial fetch
//! cannot overwrite a fresher poll result. `loading` covers only the first
//! resolution; background polls keep the current identity visible until they
//! land, which keeps protected pages from blanking every interval.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::Identity;

/// What applying a resolution did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionTransition {
    /// A newer resolution was issued after this one; nothing changed.
    Stale,
    /// An identity is present.
    Authenticated,
    /// A previously valid session was rejected by the backend.
    Expired,
    /// No identity, and no prior session to report as expired.
    SignedOut,
}

/// Who is logged in, whether we know yet, and whether their session lapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
    pub expired: bool,
    issued: u64,
    had_session: bool,
    signing_out: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { identity: None, loading: true, expired: false, issued: 0, had_session: false, signing_out: false }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Ticket of the most recently issued resolution.
    pub fn latest_ticket(&self) -> u64 {
        self.issued
    }

    /// True between `begin_sign_out` and `finish_sign_out`.
    pub fn is_signing_out(&self) -> bool {
        self.signing_out
    }

    /// Register a new identity resolution and return its ticket.
    pub fn begin_resolution(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Like `begin_resolution`, but guards defer again until it lands.
    ///
    /// Used right after login, when the previous "signed out" answer is known
    /// to be stale and must not trigger a redirect back to the login page.
    pub fn begin_reload(&mut self) -> u64 {
        self.loading = true;
        self.begin_resolution()
    }

    /// Apply the result of the resolution holding `ticket`.
    ///
    /// Only 401s flag expiry, and only when an identity was resolved at some
    /// point since the last logout (a network error in between does not
    /// forget it). Expiry then stays set until an identity returns or the
    /// user logs out.
    pub fn apply_resolution(&mut self, ticket: u64, result: Result<Identity, ApiError>) -> SessionTransition {
        if ticket != self.issued {
            return SessionTransition::Stale;
        }
        self.loading = false;
        match result {
            Ok(identity) => {
                self.identity = Some(identity);
                self.expired = false;
                self.had_session = true;
                SessionTransition::Authenticated
            }
            Err(ApiError::Unauthenticated) => {
                self.expired = self.expired || self.had_session;
                self.identity = None;
                if self.expired { SessionTransition::Expired } else { SessionTransition::SignedOut }
            }
            Err(_) => {
                self.identity = None;
                SessionTransition::SignedOut
            }
        }
    }

    /// Clear the session for an explicit logout.
    ///
    /// Bumps the ticket so resolutions still in flight cannot restore the
    /// identity that was just logged out.
    pub fn reset(&mut self) {
        self.identity = None;
        self.loading = false;
        self.expired = false;
        self.had_session = false;
        self.issued += 1;
    }

    /// `reset`, then refuse new resolutions until `finish_sign_out`.
    ///
    /// The session cookie stays valid until the backend answers the logout
    /// request; a poll landing in that window would restore the identity.
    pub fn begin_sign_out(&mut self) {
        self.reset();
        self.signing_out = true;
    }

    pub fn finish_sign_out(&mut self) {
        self.signing_out = false;
    }
}

/// Context-provided handle to the session signal and its lifecycle.
#[derive(Clone, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    api: ApiClient,
    alive: Arc<AtomicBool>,
}

impl SessionStore {
    pub fn new(api: ApiClient) -> Self {
        Self { state: RwSignal::new(SessionState::default()), api, alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Reactive session state for guards and identity-aware views.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// REST client shared with pages that talk to the auth endpoints.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// First resolution on mount. `loading` clears when it lands.
    pub fn initialize(&self) {
        log::debug!("session: initial identity resolution");
        self.refresh();
    }

    /// Re-resolve the identity in the background.
    pub fn refresh(&self) {
        self.resolve(SessionState::begin_resolution);
    }

    /// Re-resolve with guards deferring until the answer lands (after login).
    pub fn reload(&self) {
        self.resolve(SessionState::begin_reload);
    }

    fn resolve(&self, begin: fn(&mut SessionState) -> u64) {
        if !self.alive.load(Ordering::Relaxed) {
            return;
        }
        let Some(ticket) = self.state.try_update(|s| (!s.signing_out).then(|| begin(s))).flatten() else {
            log::debug!("session: resolution skipped");
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let store = self.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::resolve_identity(&store.api).await;
                store.finish(ticket, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }

    #[cfg(feature = "hydrate")]
    fn finish(&self, ticket: u64, result: Result<Identity, ApiError>) {
        if !self.alive.load(Ordering::Relaxed) {
            return;
        }
        if let Err(err) = &result {
            if *err != ApiError::Unauthenticated {
                log::warn!("session: identity resolution failed: {err}");
            }
        }
        match self.state.try_update(|s| s.apply_resolution(ticket, result)) {
            Some(SessionTransition::Stale) => log::debug!("session: dropped stale resolution #{ticket}"),
            Some(SessionTransition::Expired) => log::info!("session: expired"),
            Some(_) | None => {}
        }
    }

    /// Revalidate every `interval` until `dispose` is called.
    pub fn start_polling(&self, interval: Duration) {
        #[cfg(feature = "hydrate")]
        {
            let store = self.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(interval).await;
                    if !store.alive.load(Ordering::Relaxed) {
                        break;
                    }
                    store.refresh();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = interval;
        }
    }

    /// Clear the session, tell the backend, then navigate to the login page.
    pub fn logout<F>(&self, navigate: F)
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        self.state.update(SessionState::begin_sign_out);
        log::info!("session: logged out");
        // Guards may already have replaced the entry with /login.
        let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
        #[cfg(feature = "hydrate")]
        {
            let api = self.api.clone();
            let state = self.state;
            leptos::task::spawn_local(async move {
                api.logout().await;
                state.try_update(SessionState::finish_sign_out);
                navigate(LOGIN_PATH, options);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.state.update(SessionState::finish_sign_out);
            navigate(LOGIN_PATH, options);
        }
    }

    /// Stop polling and ignore any resolution that completes afterwards.
    pub fn dispose(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_disposed(&self) -> bool {
        !self.alive.load(Ordering::Relaxed)
    }
}
