//! Application state management

use crate::config::AppConfig;
use crate::form::SignInForm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user_id: String,
    pub email: String,
    /// Unix seconds; 0 means the server set no expiry.
    pub expires_at: i64,
}

impl AuthSession {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at != 0 && self.expires_at <= now
    }
}

pub struct AppState {
    pub data_dir: PathBuf,
    pub config: AppConfig,

    // Navigation
    pub current_screen: Screen,
    /// Screen shown after a successful sign-in.
    pub redirect: Screen,

    // Auth
    pub session: Option<AuthSession>,
    pub form: SignInForm,

    // UI state
    pub is_submitting: bool,
    pub submit_error: Option<String>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, config: AppConfig, session: Option<AuthSession>) -> Self {
        // An already-authenticated user never sees the form.
        let current_screen = if session.is_some() {
            Screen::Home
        } else {
            Screen::SignIn
        };

        Self {
            data_dir,
            config,
            current_screen,
            redirect: Screen::Home,
            session,
            form: SignInForm::new(),
            is_submitting: false,
            submit_error: None,
        }
    }
}
