//! Client-side validation for the sign-in form

/// Symbols a password may contain, at least one of which is required.
const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

const EMAIL_MIN: usize = 6;
const EMAIL_MAX: usize = 255;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub email: String,
    pub password: String,
}

/// First violation message per field. Derived from [`FormValues`] only;
/// recomputed on every change, never stored across edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }
}

/// Validates both fields in one pass so every invalid field is reported
/// simultaneously rather than stopping at the first failure.
pub fn validate(values: &FormValues) -> FieldErrors {
    FieldErrors {
        email: email_error(&values.email),
        password: password_error(&values.password),
    }
}

fn email_error(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    let len = email.chars().count();
    if len < EMAIL_MIN {
        return Some(format!("Email must be at least {} characters", EMAIL_MIN));
    }
    if len > EMAIL_MAX {
        return Some(format!("Email must be at most {} characters", EMAIL_MAX));
    }
    if !is_email_syntax(email) {
        return Some("Email must be a valid email address".to_string());
    }
    None
}

/// Minimal email grammar: one `@`, a non-empty local part, and a dotted
/// domain of non-empty labels. Any top-level domain is accepted.
fn is_email_syntax(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if local.chars().any(char::is_whitespace) {
        return false;
    }
    let mut count = 0;
    for label in domain.split('.') {
        if label.is_empty()
            || !label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return false;
        }
        count += 1;
    }
    count >= 2
}

fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    let len = password.chars().count();
    if len < PASSWORD_MIN {
        return Some(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN
        ));
    }
    if len > PASSWORD_MAX {
        return Some(format!(
            "Password must be at most {} characters",
            PASSWORD_MAX
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain a lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain an uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain a digit".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)) {
        return Some(format!(
            "Password must contain one of {}",
            PASSWORD_SYMBOLS.iter().collect::<String>()
        ));
    }
    if !password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(&c))
    {
        return Some("Password contains characters that are not allowed".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(email: &str, password: &str) -> FormValues {
        FormValues {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    const GOOD_PASSWORD: &str = "Valid1!pass";
    const GOOD_EMAIL: &str = "user@example.com";

    #[test]
    fn valid_credentials_produce_no_errors() {
        let errors = validate(&values(GOOD_EMAIL, GOOD_PASSWORD));
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn missing_email_is_reported() {
        let errors = validate(&values("", GOOD_PASSWORD));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert!(errors.password.is_none());
    }

    #[test]
    fn short_email_is_reported() {
        // 5 characters, below the minimum of 6
        let errors = validate(&values("a@b.c", GOOD_PASSWORD));
        assert!(errors.email.is_some());
    }

    #[test]
    fn overlong_email_is_reported() {
        let local = "a".repeat(250);
        let errors = validate(&values(&format!("{}@example.com", local), GOOD_PASSWORD));
        assert!(errors.email.is_some());
    }

    #[test]
    fn malformed_email_is_reported() {
        for bad in ["no-at-sign.com", "two@@example.com", "user@nodots", "@example.com", "user name@example.com"] {
            let errors = validate(&values(bad, GOOD_PASSWORD));
            assert!(errors.email.is_some(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn any_tld_is_accepted() {
        let errors = validate(&values("user@example.zzz-custom", GOOD_PASSWORD));
        assert!(errors.email.is_none());
    }

    #[test]
    fn password_without_uppercase_is_reported() {
        let errors = validate(&values(GOOD_EMAIL, "alllowercase1!"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must contain an uppercase letter")
        );
    }

    #[test]
    fn short_password_is_reported() {
        let errors = validate(&values(GOOD_EMAIL, "Sh0rt!"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn password_without_digit_is_reported() {
        let errors = validate(&values(GOOD_EMAIL, "NoDigits!here"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must contain a digit")
        );
    }

    #[test]
    fn password_without_symbol_is_reported() {
        let errors = validate(&values(GOOD_EMAIL, "NoSymbol1here"));
        assert!(errors.password.is_some());
    }

    #[test]
    fn password_with_disallowed_symbol_is_reported() {
        let errors = validate(&values(GOOD_EMAIL, "Almost1!good#"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password contains characters that are not allowed")
        );
    }

    #[test]
    fn overlong_password_is_reported() {
        let errors = validate(&values(GOOD_EMAIL, "Aa1!aaaaaaaaaaaaaaaaaaaaaaaaaa"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at most 25 characters")
        );
    }

    #[test]
    fn both_fields_reported_in_one_pass() {
        let errors = validate(&values("", ""));
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
    }
}
