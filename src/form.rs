//! Sign-in form controller: field values, touched tracking, derived errors

use crate::validate::{validate, Field, FieldErrors, FormValues};

/// Owns the form values and recomputes validation on every change,
/// including at construction so submit starts out disabled.
///
/// Touched state only gates which errors are shown; it never affects
/// whether the form is valid.
#[derive(Debug, Clone)]
pub struct SignInForm {
    values: FormValues,
    errors: FieldErrors,
    email_touched: bool,
    password_touched: bool,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInForm {
    pub fn new() -> Self {
        let values = FormValues::default();
        let errors = validate(&values);
        Self {
            values,
            errors,
            email_touched: false,
            password_touched: false,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.values.email,
            Field::Password => &self.values.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.values.email = value,
            Field::Password => self.values.password = value,
        }
        self.errors = validate(&self.values);
    }

    pub fn touch(&mut self, field: Field) {
        match field {
            Field::Email => self.email_touched = true,
            Field::Password => self.password_touched = true,
        }
    }

    fn touched(&self, field: Field) -> bool {
        match field {
            Field::Email => self.email_touched,
            Field::Password => self.password_touched,
        }
    }

    /// The field's current error, surfaced only once the user has
    /// interacted with the field.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Clears the password after a completed submit so it never lingers
    /// in memory longer than needed.
    pub fn clear_password(&mut self) {
        self.values.password.clear();
        self.password_touched = false;
        self.errors = validate(&self.values);
    }
}
