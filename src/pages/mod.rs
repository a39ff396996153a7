//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetch/mutate flow. Access checks live in
//! `components::guard`; pages assume the guard already admitted the user.


pub mod admin;
pub mod home;
pub mod login;
pub mod one_rep_max;
pub mod register;
pub mod trainer_panel;
pub mod workouts;

use crate::net::api::ApiError;

/// User-facing message for a failed panel request.
pub(crate) fn request_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Forbidden => "You do not have access to this panel.".to_owned(),
        other => format!("Request failed: {other}"),
    }
}
