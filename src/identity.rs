//! Simulated identity provider.
//!
//! Nothing is authenticated: any well-formed credentials sign in. The
//! provider only exists to supply a display name for "created by" fields.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::QuizError;
use crate::models::User;

const MIN_PASSWORD_LENGTH: usize = 6;
const SIMULATED_USER_ID: &str = "1";
const ANONYMOUS: &str = "Anonymous";

/// Some non-space text, an `@`, more text, a dot, more text. Unanchored, so
/// it only has to match somewhere in the input.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").unwrap_or_else(|err| panic!("invalid email pattern: {err}"))
});

/// Holds the signed-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct Identity {
    user: Option<User>,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in; the display name is taken from the email's local part.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, QuizError> {
        let mut errors = BTreeMap::new();
        check_email(email, &mut errors);
        check_password(password, &mut errors);
        if !errors.is_empty() {
            return Err(QuizError::Validation(errors));
        }

        let name = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .map(str::to_string);
        Ok(self.sign_in(User {
            id: SIMULATED_USER_ID.to_string(),
            email: email.to_string(),
            name,
        }))
    }

    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<&User, QuizError> {
        let mut errors = BTreeMap::new();
        if name.is_empty() {
            errors.insert("name".to_string(), "Name is required".to_string());
        }
        check_email(email, &mut errors);
        check_password(password, &mut errors);
        if password != confirm_password {
            errors.insert(
                "confirmPassword".to_string(),
                "Passwords do not match".to_string(),
            );
        }
        if !errors.is_empty() {
            return Err(QuizError::Validation(errors));
        }

        Ok(self.sign_in(User {
            id: SIMULATED_USER_ID.to_string(),
            email: email.to_string(),
            name: Some(name.to_string()),
        }))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "signed out");
        }
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Author name for new quizzes: name, then email, then "Anonymous".
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or(ANONYMOUS, User::display_name)
    }

    fn sign_in(&mut self, user: User) -> &User {
        tracing::info!(email = %user.email, "signed in");
        self.user.insert(user)
    }
}

fn check_email(email: &str, errors: &mut BTreeMap<String, String>) {
    if email.is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !looks_like_email(email) {
        errors.insert(
            "email".to_string(),
            "Please enter a valid email address".to_string(),
        );
    }
}

fn check_password(password: &str, errors: &mut BTreeMap<String, String>) {
    if password.is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(
            "password".to_string(),
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        );
    }
}

fn looks_like_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
