//! Main application module for Relay Desktop

use crate::auth::{AuthApi, AuthClient};
use crate::config::AppConfig;
use crate::messages::Message;
use crate::screens::{home::HomeScreen, sign_in::SignInScreen};
use crate::session;
use crate::state::{AppState, AuthSession, Screen};

use iced::{executor, Application, Command, Element};
use std::path::PathBuf;
use std::sync::Arc;

/// Banner shown for failures that carry no server message (network errors,
/// 5xx, malformed responses). These used to be easy to drop on the floor;
/// here they always surface and get logged.
const FALLBACK_SUBMIT_ERROR: &str = "Sign in failed. Check your connection and try again.";

#[derive(Default)]
pub struct Flags {
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub session: Option<AuthSession>,
}

pub struct Relay {
    state: AppState,
    auth: Arc<dyn AuthApi>,
}

impl Application for Relay {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = iced::Theme;
    type Flags = Flags;

    fn new(flags: Self::Flags) -> (Self, Command<Self::Message>) {
        let client =
            AuthClient::new(&flags.config).expect("Failed to initialize HTTP client");
        if let Some(ref session) = flags.session {
            client.restore_token(&session.token);
        }

        let state = AppState::new(flags.data_dir, flags.config, flags.session);

        let app = Self {
            state,
            auth: Arc::new(client),
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        match self.state.current_screen {
            Screen::SignIn => "Relay - Sign In".to_string(),
            Screen::Home => "Relay".to_string(),
        }
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.state.form.set(field, value);
                self.state.form.touch(field);
                Command::none()
            }

            Message::Submit => {
                // The button is disabled while invalid or in flight, but
                // Enter in a text input reaches here regardless.
                if !self.state.form.is_valid() || self.state.is_submitting {
                    return Command::none();
                }

                self.state.is_submitting = true;
                self.state.submit_error = None;

                let auth = self.auth.clone();
                let values = self.state.form.values().clone();

                Command::perform(
                    async move { auth.login(&values).await },
                    |result| match result {
                        Ok(session) => Message::SignInSucceeded(session),
                        Err(e) => Message::SignInFailed(e),
                    },
                )
            }

            Message::SignInSucceeded(auth_session) => {
                self.state.is_submitting = false;
                self.state.submit_error = None;

                if let Err(e) = session::save(&self.state.data_dir, &auth_session) {
                    tracing::warn!("Could not persist session: {}", e);
                }

                tracing::info!("Signed in as {}", auth_session.email);
                self.state.session = Some(auth_session);
                self.state.form.clear_password();
                self.state.current_screen = self.state.redirect;
                Command::none()
            }

            Message::SignInFailed(error) => {
                self.state.is_submitting = false;

                if error.is_client_error() {
                    // Server message shown verbatim, matching what it sent
                    self.state.submit_error = Some(error.to_string());
                } else {
                    tracing::warn!("Sign-in failed: {}", error);
                    self.state.submit_error = Some(FALLBACK_SUBMIT_ERROR.to_string());
                }
                Command::none()
            }

            Message::Logout => {
                if let Err(e) = session::clear(&self.state.data_dir) {
                    tracing::warn!("Could not clear stored session: {}", e);
                }
                self.state.session = None;
                self.state.form = Default::default();
                self.state.submit_error = None;
                self.state.current_screen = Screen::SignIn;

                let auth = self.auth.clone();
                Command::perform(async move { auth.logout().await }, |_| Message::Noop)
            }

            Message::ClearSubmitError => {
                self.state.submit_error = None;
                Command::none()
            }

            Message::Noop => Command::none(),
        }
    }

    fn view(&self) -> Element<Self::Message> {
        // An authenticated user is never shown the form, regardless of
        // which screen navigation last landed on.
        let screen = if self.state.session.is_some() {
            Screen::Home
        } else {
            self.state.current_screen
        };

        match screen {
            Screen::SignIn => SignInScreen::view(&self.state),
            Screen::Home => HomeScreen::view(&self.state),
        }
    }

    fn theme(&self) -> iced::Theme {
        if self.state.config.ui.theme == "dark" {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
