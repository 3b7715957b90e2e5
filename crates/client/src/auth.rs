//! Bearer-token session with refresh-on-401.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// The signed-in user as reported by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier
    pub id: u64,

    /// Login name
    pub username: String,

    /// Whether the user may use admin routes
    #[serde(default)]
    pub is_staff: bool,
}

/// Errors returned by [`AuthSession`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password rejected
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No usable session; the stored tokens have been cleared
    #[error("not authenticated")]
    Unauthorized,

    /// The auth backend answered with something unexpected
    #[error("unexpected auth response: {0}")]
    UnexpectedResponse(String),

    /// The request never got a response
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Deserialize)]
struct TokenPair {
    access: String,
    refresh: String,
}

#[derive(Debug, Deserialize)]
struct AccessToken {
    access: String,
}

#[derive(Debug, Default, Clone)]
struct Session {
    access: Option<String>,
    refresh: Option<String>,
    user: Option<User>,
}

/// Holds the bearer tokens for admin calls.
///
/// Authenticated requests carry `Authorization: Bearer <access>`. A 401
/// triggers one refresh and one retry; if either fails the session is cleared.
pub struct AuthSession {
    transport: Arc<dyn Transport>,
    session: RwLock<Session>,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession").finish_non_exhaustive()
    }
}

impl AuthSession {
    /// Create a signed-out session.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            session: RwLock::new(Session::default()),
        }
    }

    /// Resume a session from stored tokens.
    #[must_use]
    pub fn with_tokens(
        transport: Arc<dyn Transport>,
        access: impl Into<String>,
        refresh: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            session: RwLock::new(Session {
                access: Some(access.into()),
                refresh: Some(refresh.into()),
                user: None,
            }),
        }
    }

    /// Whether an access token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.access.is_some()
    }

    /// The user loaded by the last [`Self::login`] or [`Self::me`].
    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.user.clone()
    }

    /// The current access token.
    pub async fn access_token(&self) -> Option<String> {
        self.session.read().await.access.clone()
    }

    /// Exchange credentials for a token pair, then load the user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on 400/401. If the user can't
    /// be loaded afterwards the session is cleared and that error returned.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let response = self
            .transport
            .send(ApiRequest::post(
                "/api/token/",
                &json!({ "username": username, "password": password }),
            )?)
            .await?;

        let tokens: TokenPair = match response.status {
            200 => parse(&response)?,
            400 | 401 => return Err(AuthError::InvalidCredentials),
            status => {
                return Err(AuthError::UnexpectedResponse(format!(
                    "login failed with status {status}"
                )));
            }
        };

        *self.session.write().await = Session {
            access: Some(tokens.access),
            refresh: Some(tokens.refresh),
            user: None,
        };

        let user = match self.me().await {
            Ok(user) => user,
            Err(error) => {
                self.logout().await;

                return Err(error);
            }
        };

        info!(username = %user.username, "signed in");

        Ok(user)
    }

    /// Load the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] when the session can't be used.
    pub async fn me(&self) -> Result<User, AuthError> {
        let response = self
            .send_authenticated(ApiRequest::get("/api/auth/me/"))
            .await?;

        if response.status != 200 {
            return Err(AuthError::UnexpectedResponse(format!(
                "profile request failed with status {}",
                response.status
            )));
        }

        let user: User = parse(&response)?;

        self.session.write().await.user = Some(user.clone());

        Ok(user)
    }

    /// Drop all tokens and the cached user.
    pub async fn logout(&self) {
        *self.session.write().await = Session::default();

        debug!("session cleared");
    }

    /// Send `request` with the bearer token, refreshing once on 401.
    ///
    /// Any response other than 401 is returned to the caller as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] and clears the session when no
    /// token is held, the refresh fails, or the retry is still 401.
    pub async fn send_authenticated(&self, request: ApiRequest) -> Result<ApiResponse, AuthError> {
        let Some(access) = self.access_token().await else {
            return Err(AuthError::Unauthorized);
        };

        let response = self
            .transport
            .send(request.clone().with_bearer(access))
            .await?;

        if response.status != 401 {
            return Ok(response);
        }

        debug!(path = %request.path, "access token rejected, refreshing");

        let access = match self.refresh().await {
            Ok(access) => access,
            Err(error) => {
                warn!("token refresh failed: {error}");

                self.logout().await;

                return Err(AuthError::Unauthorized);
            }
        };

        let retried = self.transport.send(request.with_bearer(access)).await?;

        if retried.status == 401 {
            self.logout().await;

            return Err(AuthError::Unauthorized);
        }

        Ok(retried)
    }

    async fn refresh(&self) -> Result<String, AuthError> {
        let Some(refresh) = self.session.read().await.refresh.clone() else {
            return Err(AuthError::Unauthorized);
        };

        let response = self
            .transport
            .send(ApiRequest::post(
                "/api/token/refresh/",
                &json!({ "refresh": refresh }),
            )?)
            .await?;

        if response.status != 200 {
            return Err(AuthError::Unauthorized);
        }

        let token: AccessToken = parse(&response)?;

        self.session.write().await.access = Some(token.access.clone());

        Ok(token.access)
    }
}

fn parse<T: serde::de::DeserializeOwned>(response: &ApiResponse) -> Result<T, AuthError> {
    response
        .parse()
        .map_err(|error| AuthError::UnexpectedResponse(error.to_string()))
}
