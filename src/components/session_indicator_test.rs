use super::*;
use crate::net::api::ApiError;
use crate::net::types::Identity;

fn member() -> Identity {
    Identity { id: 3, name: "Ania".to_owned(), mail: "ania@gym.pl".to_owned(), admin: false, trainer: false }
}

fn signed_in() -> SessionState {
    let mut state = SessionState::default();
    let ticket = state.begin_resolution();
    state.apply_resolution(ticket, Ok(member()));
    state
}

fn expire(state: &mut SessionState) {
    let ticket = state.begin_resolution();
    state.apply_resolution(ticket, Err(ApiError::Unauthenticated));
}

#[test]
fn hidden_while_loading() {
    assert_eq!(IndicatorPhase::from_session(&SessionState::default()), IndicatorPhase::Hidden);
}

#[test]
fn hidden_for_valid_session() {
    assert_eq!(IndicatorPhase::from_session(&signed_in()), IndicatorPhase::Hidden);
}

#[test]
fn hidden_when_never_signed_in() {
    let mut state = SessionState::default();
    expire(&mut state);
    assert_eq!(IndicatorPhase::from_session(&state), IndicatorPhase::Hidden);
}

#[test]
fn shown_after_revalidation_401() {
    let mut state = signed_in();
    expire(&mut state);
    assert_eq!(IndicatorPhase::from_session(&state), IndicatorPhase::Shown);
}

#[test]
fn hidden_again_after_reauth_logout() {
    let mut state = signed_in();
    expire(&mut state);
    state.reset();
    assert_eq!(IndicatorPhase::from_session(&state), IndicatorPhase::Hidden);
}

#[test]
fn hidden_again_when_identity_returns() {
    let mut state = signed_in();
    expire(&mut state);
    let ticket = state.begin_resolution();
    state.apply_resolution(ticket, Ok(member()));
    assert_eq!(IndicatorPhase::from_session(&state), IndicatorPhase::Hidden);
}

#[test]
fn default_phase_is_hidden() {
    assert_eq!(IndicatorPhase::default(), IndicatorPhase::Hidden);
}
