//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`mail`, `trainingDate`) so serde
//! round-trips need no adapters. Role flags accept both the bean-style
//! (`admin`) and prefixed (`isAdmin`) spellings the backend has emitted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `GET /api/user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Numeric user identifier.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email address.
    #[serde(default)]
    pub mail: String,
    /// Account may manage other accounts.
    #[serde(default, alias = "isAdmin")]
    pub admin: bool,
    /// Account may accept or decline submitted trainings.
    #[serde(default, alias = "isTrainer")]
    pub trainer: bool,
}

/// An account row in the admin panel listing (`GET /api/user`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub mail: String,
    #[serde(default, alias = "isAdmin")]
    pub admin: bool,
    #[serde(default, alias = "isTrainer")]
    pub trainer: bool,
}

/// A logged training (`GET /api/training/all`, `GET /api/training/to-accept`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    pub training_date: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub mail: String,
    pub password: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub mail: String,
    pub password: String,
}

/// Body for `PATCH /api/user/updateName/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenameRequest {
    pub name: String,
}
