//! Authentication capability for Relay Desktop
//!
//! The app shell talks to [`AuthApi`] rather than a concrete HTTP client so
//! the sign-in flow can be exercised without a server. [`AuthClient`] is the
//! production implementation backed by reqwest.

use crate::config::AppConfig;
use crate::state::AuthSession;
use crate::validate::FormValues;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The server answered with a non-success status. `body` is the
    /// response body exactly as the server sent it.
    #[error("{body}")]
    Rejected { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// True for 400-class rejections, whose body is shown to the user
    /// verbatim. Everything else gets the generic failure banner.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AuthError::Rejected { status, .. } if (400..500).contains(status))
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Network(e.to_string())
    }
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, values: &FormValues) -> Result<AuthSession, AuthError>;
    async fn logout(&self);
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user_id: String,
    #[serde(default)]
    expires_at: i64,
}

pub struct AuthClient {
    http: Client,
    base_url: String,
    token: Mutex<Option<String>>,
}

impl AuthClient {
    pub fn new(config: &AppConfig) -> Result<Self, AuthError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.http_url(),
            token: Mutex::new(None),
        })
    }

    pub fn restore_token(&self, token: &str) {
        *self.token.lock() = Some(token.to_string());
    }

    fn auth_header(&self) -> Option<String> {
        self.token.lock().as_ref().map(|t| format!("Bearer {}", t))
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, values: &FormValues) -> Result<AuthSession, AuthError> {
        let resp = self
            .http
            .post(format!("{}/api/v1/auth/login", self.base_url))
            .json(&json!({
                "email": values.email,
                "password": values.password,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let data: LoginResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        *self.token.lock() = Some(data.token.clone());

        Ok(AuthSession {
            token: data.token,
            user_id: data.user_id,
            email: values.email.clone(),
            expires_at: data.expires_at,
        })
    }

    async fn logout(&self) {
        if let Some(auth) = self.auth_header() {
            self.http
                .post(format!("{}/api/v1/auth/logout", self.base_url))
                .header("Authorization", auth)
                .send()
                .await
                .ok();
        }
        *self.token.lock() = None;
    }
}
