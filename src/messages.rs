//! Application messages (events)

use crate::auth::AuthError;
use crate::state::AuthSession;
use crate::validate::Field;

#[derive(Debug, Clone)]
pub enum Message {
    // Sign-in form
    FieldChanged(Field, String),
    Submit,
    SignInSucceeded(AuthSession),
    SignInFailed(AuthError),
    Logout,

    // Misc
    ClearSubmitError,
    Noop,
}
