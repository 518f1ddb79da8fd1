//! API client for the portal backend.
//!
//! Requests go through gloo-net's fetch wrapper. Auth endpoints send
//! credentials so the backend can set/read the session cookie; the client
//! never inspects it.

use gloo_net::http::{Request, Response};
use portal_shared::{
    ApiErrorResponse, ApiListResponse, College, LoginRequest, Profile, SignupRequest,
    API_COLLEGES, API_LOGIN, API_PROFILE, API_SIGNUP,
};
use web_sys::RequestCredentials;

/// Failure of one API call, split the way the forms need it: a structured
/// rejection carries the backend's message, everything else (no response,
/// malformed body) is transport noise the user never sees verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a `{error}` body.
    Rejected(String),
    /// No response or an unparseable one.
    Transport(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Rejected(msg) => write!(f, "rejected: {msg}"),
            ApiError::Transport(msg) => write!(f, "transport: {msg}"),
        }
    }
}

impl ApiError {
    /// Message to surface to the user: the backend's own words when it sent
    /// any, otherwise the caller's generic fallback.
    pub fn user_message(self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(msg) => msg,
            ApiError::Transport(_) => fallback.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortalApi {
    base_url: String,
}

impl PortalApi {
    /// Same-origin client; the app is served next to its API.
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// College directory for the signup selector.
    pub async fn get_colleges(&self) -> Result<Vec<College>, ApiError> {
        let res = Request::get(&self.url(API_COLLEGES))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !res.ok() {
            return Err(error_from(res).await);
        }

        res.json::<ApiListResponse<College>>()
            .await
            .map(|list| list.data)
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Registers a new account. Success carries no body.
    pub async fn signup(&self, req: &SignupRequest) -> Result<(), ApiError> {
        let res = Request::post(&self.url(API_SIGNUP))
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !res.ok() {
            return Err(error_from(res).await);
        }

        Ok(())
    }

    /// Authenticates; on success the backend sets the session cookie.
    pub async fn login(&self, req: &LoginRequest) -> Result<(), ApiError> {
        let res = Request::post(&self.url(API_LOGIN))
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !res.ok() {
            return Err(error_from(res).await);
        }

        Ok(())
    }

    /// Current user, read off the session cookie. Called right after login
    /// to learn the principal's role.
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        let res = Request::get(&self.url(API_PROFILE))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !res.ok() {
            return Err(error_from(res).await);
        }

        res.json::<Profile>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// Maps a non-2xx response to an [`ApiError`]. A well-formed, non-empty
/// `{error}` body becomes a rejection; anything else is transport noise.
async fn error_from(res: Response) -> ApiError {
    let status = res.status();
    match res.json::<ApiErrorResponse>().await {
        Ok(body) if !body.error.is_empty() => ApiError::Rejected(body.error),
        _ => ApiError::Transport(format!("status {status}")),
    }
}
