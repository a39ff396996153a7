//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookies (`credentials: include`).
//! Server-side (SSR) and native tests: stubs returning `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. HTTP statuses are classified once
//! in `classify_status`, so callers can match on `Unauthenticated` vs the rest
//! without inspecting raw responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Account, Identity, LoginRequest, RegisterRequest, Training};
#[cfg(feature = "hydrate")]
use super::types::RenameRequest;

pub const ME_PATH: &str = "/api/user/me";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const REFRESH_PATH: &str = "/api/auth/refresh";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const ACCOUNTS_PATH: &str = "/api/user";
pub const TRAININGS_PATH: &str = "/api/training/all";
pub const PENDING_TRAININGS_PATH: &str = "/api/training/to-accept";

/// Failure taxonomy for REST calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No session, or the session cookie is invalid/expired (401).
    #[error("not authenticated")]
    Unauthenticated,
    /// Authenticated but lacking the required role (403).
    #[error("forbidden")]
    Forbidden,
    /// The resource already exists (409).
    #[error("conflict")]
    Conflict,
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map an HTTP status to an error, or `None` for 2xx.
pub fn classify_status(status: u16) -> Option<ApiError> {
    match status {
        200..=299 => None,
        401 => Some(ApiError::Unauthenticated),
        403 => Some(ApiError::Forbidden),
        409 => Some(ApiError::Conflict),
        other => Some(ApiError::Status(other)),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn account_endpoint(id: i64) -> String {
    format!("{ACCOUNTS_PATH}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rename_account_endpoint(id: i64) -> String {
    format!("{ACCOUNTS_PATH}/updateName/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn accept_training_endpoint(id: i64) -> String {
    format!("/api/training/accept/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn decline_training_endpoint(id: i64) -> String {
    format!("/api/training/decline/{id}")
}

/// Anything that can answer "who is logged in" and attempt a silent renewal.
///
/// `ApiClient` is the browser implementation; tests substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait IdentitySource {
    /// Fetch the identity bound to the current session.
    async fn fetch_me(&self) -> Result<Identity, ApiError>;
    /// Ask the backend to renew an expired access session.
    async fn renew(&self) -> Result<(), ApiError>;
}

/// Resolve the current identity, renewing the session once on a 401.
///
/// A failed renewal reports `Unauthenticated` regardless of why it failed,
/// since the first 401 is what the caller needs to act on.
pub async fn resolve_identity<S>(source: &S) -> Result<Identity, ApiError>
where
    S: IdentitySource + ?Sized,
{
    match source.fetch_me().await {
        Err(ApiError::Unauthenticated) => {
            if let Err(err) = source.renew().await {
                log::debug!("session renewal failed: {err}");
                return Err(ApiError::Unauthenticated);
            }
            source.fetch_me().await
        }
        other => other,
    }
}

/// REST client bound to an API base prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self { base: base.to_owned() }
    }

    /// Absolute (or same-origin) URL for an `/api/...` path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// `GET /api/user/me`.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` on 401, otherwise a transport/status/decode error.
    pub async fn fetch_current_user(&self) -> Result<Identity, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(gloo_net::http::Request::get(&self.url(ME_PATH)).credentials(INCLUDE).build()).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/refresh`.
    ///
    /// # Errors
    ///
    /// Returns the classified status when the backend refuses renewal.
    pub async fn renew_session(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send(gloo_net::http::Request::post(&self.url(REFRESH_PATH)).credentials(INCLUDE).build()).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/login`. The backend answers with session cookies.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` for wrong credentials.
    pub async fn login(&self, body: &LoginRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send(gloo_net::http::Request::post(&self.url(LOGIN_PATH)).credentials(INCLUDE).json(body)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// `Conflict` when the mail is already registered.
    pub async fn register(&self, body: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send(gloo_net::http::Request::post(&self.url(REGISTER_PATH)).json(body)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /api/auth/logout`. Best effort; the local session is cleared regardless.
    pub async fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.url(LOGOUT_PATH)).credentials(INCLUDE).build();
            if let Err(err) = send(req).await {
                log::warn!("logout request failed: {err}");
            }
        }
    }

    /// `GET /api/user` (admin only).
    ///
    /// # Errors
    ///
    /// `Forbidden` when the caller is not an admin.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(ACCOUNTS_PATH);
            let resp = self
                .send_authorized(|| gloo_net::http::Request::get(&url).credentials(INCLUDE).build())
                .await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /api/user/{id}` (admin only).
    ///
    /// # Errors
    ///
    /// Returns the classified status on failure.
    pub async fn delete_account(&self, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&account_endpoint(id));
            self.send_authorized(|| gloo_net::http::Request::delete(&url).credentials(INCLUDE).build())
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// `PATCH /api/user/updateName/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the classified status on failure.
    pub async fn rename_account(&self, id: i64, name: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&rename_account_endpoint(id));
            let body = RenameRequest { name: name.to_owned() };
            self.send_authorized(|| gloo_net::http::Request::patch(&url).credentials(INCLUDE).json(&body))
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, name);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/training/all`: the caller's own trainings.
    ///
    /// # Errors
    ///
    /// Returns the classified status on failure.
    pub async fn list_trainings(&self) -> Result<Vec<Training>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(TRAININGS_PATH);
            let resp = self
                .send_authorized(|| gloo_net::http::Request::get(&url).credentials(INCLUDE).build())
                .await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/training/to-accept` (trainer only).
    ///
    /// # Errors
    ///
    /// `Forbidden` when the caller is not a trainer.
    pub async fn list_pending_trainings(&self) -> Result<Vec<Training>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(PENDING_TRAININGS_PATH);
            let resp = self
                .send_authorized(|| gloo_net::http::Request::get(&url).credentials(INCLUDE).build())
                .await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `PATCH /api/training/accept/{id}` or `/decline/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the classified status on failure.
    pub async fn review_training(&self, id: i64, accept: bool) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&if accept { accept_training_endpoint(id) } else { decline_training_endpoint(id) });
            self.send_authorized(|| gloo_net::http::Request::patch(&url).credentials(INCLUDE).build())
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, accept);
            Err(ApiError::Unavailable)
        }
    }

    /// Send a request, renewing the session and retrying once on 401.
    #[cfg(feature = "hydrate")]
    async fn send_authorized<F>(&self, build: F) -> Result<gloo_net::http::Response, ApiError>
    where
        F: Fn() -> Result<gloo_net::http::Request, gloo_net::Error>,
    {
        match send(build()).await {
            Err(ApiError::Unauthenticated) => {
                self.renew_session().await.map_err(|_| ApiError::Unauthenticated)?;
                send(build()).await
            }
            other => other,
        }
    }
}

impl IdentitySource for ApiClient {
    async fn fetch_me(&self) -> Result<Identity, ApiError> {
        self.fetch_current_user().await
    }

    async fn renew(&self) -> Result<(), ApiError> {
        self.renew_session().await
    }
}

#[cfg(feature = "hydrate")]
const INCLUDE: web_sys::RequestCredentials = web_sys::RequestCredentials::Include;

#[cfg(feature = "hydrate")]
async fn send(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    match classify_status(resp.status()) {
        None => Ok(resp),
        Some(err) => Err(err),
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
