//! Client-side input checks run before any auth request.
//!
//! Every check fails fast with the first field-level problem it finds, so a
//! form can show one banner message. Passing validation is the only way a
//! login or registration reaches the network.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::auth::credentials::{Credentials, RegistrationData};
use crate::shared::ClientError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;
pub const MIN_NAME_LENGTH: usize = 2;
/// Registration is refused below this strength score
pub const MIN_PASSWORD_SCORE: u8 = 3;

const COMMON_PASSWORDS: &[&str] = &["password", "123456", "qwerty", "admin"];

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Required fields, then the email pattern
pub fn validate_login(credentials: &Credentials) -> Result<(), ClientError> {
    match credentials {
        Credentials::Email { email, password } => {
            if email.trim().is_empty() {
                return Err(ClientError::validation("email", "Email is required"));
            }
            if password.trim().is_empty() {
                return Err(ClientError::validation("password", "Password is required"));
            }
            if !is_valid_email(email.trim()) {
                return Err(ClientError::validation(
                    "email",
                    "Please enter a valid email address",
                ));
            }
        }
        Credentials::Username { username, password } => {
            if username.trim().is_empty() {
                return Err(ClientError::validation("username", "Username is required"));
            }
            if password.trim().is_empty() {
                return Err(ClientError::validation("password", "Password is required"));
            }
        }
    }
    Ok(())
}

pub fn validate_registration(data: &RegistrationData) -> Result<(), ClientError> {
    let required = [
        ("email", "Email", data.email.as_str()),
        ("username", "Username", data.username.as_str()),
        ("first_name", "First name", data.first_name.as_str()),
        ("last_name", "Last name", data.last_name.as_str()),
        ("password", "Password", data.password.as_str()),
        (
            "password_confirmation",
            "Password confirmation",
            data.password_confirmation.as_str(),
        ),
    ];
    for (field, label, value) in required {
        if value.trim().is_empty() {
            return Err(ClientError::validation(field, format!("{} is required", label)));
        }
    }

    if !is_valid_email(data.email.trim()) {
        return Err(ClientError::validation(
            "email",
            "Please enter a valid email address",
        ));
    }

    let username = data.username.trim();
    let username_len = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&username_len) {
        return Err(ClientError::validation(
            "username",
            format!(
                "Username must be between {} and {} characters",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
            ),
        ));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ClientError::validation(
            "username",
            "Username can only contain letters, numbers, and underscores",
        ));
    }

    if data.first_name.trim().chars().count() < MIN_NAME_LENGTH
        || data.last_name.trim().chars().count() < MIN_NAME_LENGTH
    {
        return Err(ClientError::validation(
            "name",
            "First and last names must be at least 2 characters",
        ));
    }

    if data.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ClientError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }

    if data.password != data.password_confirmation {
        return Err(ClientError::validation(
            "password_confirmation",
            "Passwords do not match",
        ));
    }

    let strength = password_strength(&data.password);
    if strength.score < MIN_PASSWORD_SCORE {
        return Err(ClientError::validation(
            "password",
            format!("Password is too weak: {}", strength.feedback.join(", ")),
        ));
    }

    Ok(())
}

/// Heuristic password score, 0 to 5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub feedback: Vec<&'static str>,
}

/// One point each for length, lowercase, uppercase, digit and symbol.
/// A well-known password scores 0 regardless.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0;
    let mut feedback = Vec::new();

    let checks: [(bool, &'static str); 5] = [
        (
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            "Password should be at least 8 characters",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Include lowercase letters",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Include uppercase letters",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Include numbers",
        ),
        (
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
            "Include special characters",
        ),
    ];
    for (passed, hint) in checks {
        if passed {
            score += 1;
        } else {
            feedback.push(hint);
        }
    }

    if COMMON_PASSWORDS.contains(&password.to_lowercase().as_str()) {
        score = 0;
        feedback.push("Avoid common passwords");
    }

    PasswordStrength { score, feedback }
}
