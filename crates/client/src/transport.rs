//! HTTP transport for the storefront REST API.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

/// HTTP method used by the storefront API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,

    /// `POST`
    Post,
}

/// A request against the API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,

    /// Path including the leading slash, e.g. `/api/products/`
    pub path: String,

    /// Bearer token sent as `Authorization: Bearer <token>`
    pub bearer: Option<String>,

    /// JSON body
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Build a `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    /// Build a `POST` request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body can't be encoded as JSON.
    pub fn post(path: impl Into<String>, body: &impl Serialize) -> Result<Self, TransportError> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            bearer: None,
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// Raw API response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body
    pub body: String,
}

impl ApiResponse {
    /// Build a response with a JSON body.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body doesn't match `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Errors raised before a response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network failure, timeout or TLS error
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The request body couldn't be encoded
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Sends API requests. Mocked in tests.
#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the response, whatever its status.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    http: Client,
}

impl ReqwestTransport {
    /// Create a transport for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client can't be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            http: Client::builder().timeout(timeout).build()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(method = ?request.method, %url, status, "api response");

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() -> TestResult {
        let transport = ReqwestTransport::new("http://localhost:8000/", Duration::from_secs(1))?;

        assert_eq!(
            transport.url("/api/products/"),
            "http://localhost:8000/api/products/"
        );

        Ok(())
    }

    #[test]
    fn post_encodes_body() -> TestResult {
        let request = ApiRequest::post("/api/token/", &json!({ "username": "ada" }))?
            .with_bearer("abc");

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body, Some(json!({ "username": "ada" })));
        assert_eq!(request.bearer.as_deref(), Some("abc"));

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() -> TestResult {
        let transport = ReqwestTransport::new("http://127.0.0.1:1", Duration::from_secs(2))?;

        let result = transport.send(ApiRequest::get("/api/products/")).await;

        assert!(
            matches!(result, Err(TransportError::Http(_))),
            "expected an http error, got {result:?}"
        );

        Ok(())
    }
}
