//! Client-side checks run before any call to the hosted service.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::sync::LazyLock;

use error_location::ErrorLocation;
use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_STUDENT_AGE: i32 = 5;
pub const MAX_STUDENT_AGE: i32 = 12;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub(crate) static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// `local@domain.tld` with no whitespace and a single `@` per part.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.as_ref().is_ok_and(|re| re.is_match(email))
}

#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    if !is_valid_email(email) {
        return Err(CoreError::validation("Please enter a valid email address"));
    }
    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Email/password pair from the sign-in and sign-up form.
///
/// `email` is expected to be trimmed already; the password is taken verbatim.
#[track_caller]
pub fn validate_credentials(email: &str, password: &str) -> CoreErrorResult<()> {
    if email.is_empty() || password.is_empty() {
        return Err(CoreError::validation("Please fill in all fields"));
    }
    validate_email(email)?;
    validate_password(password)
}

/// Coerce a raw age input to an integer, reading leading digits only
/// (`"7"` and `"7 years"` both give 7). Returns `None` when no digits lead.
///
/// Values too large for `i32` saturate so range checks still reject them.
pub fn coerce_age(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut digits = digits.chars().map_while(|c| c.to_digit(10)).peekable();
    digits.peek()?;

    let value = digits.fold(0i32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(digit as i32)
    });
    Some(sign * value)
}

/// Student ages accepted on the profile editor, inclusive on both ends.
#[track_caller]
pub fn validate_profile_age(age: i32) -> CoreErrorResult<()> {
    if !(MIN_STUDENT_AGE..=MAX_STUDENT_AGE).contains(&age) {
        return Err(CoreError::validation(format!(
            "Age must be between {MIN_STUDENT_AGE} and {MAX_STUDENT_AGE}"
        )));
    }
    Ok(())
}

/// Fixed arithmetic challenge on the last onboarding panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captcha {
    question: &'static str,
    answer: &'static str,
}

impl Captcha {
    pub const fn standard() -> Self {
        Self {
            question: "What is 5 + 3?",
            answer: "8",
        }
    }

    pub fn question(&self) -> &'static str {
        self.question
    }

    /// Exact match only; `" 8"` is a wrong answer.
    #[track_caller]
    pub fn check(&self, input: &str) -> CoreErrorResult<()> {
        if input != self.answer {
            return Err(CoreError::CaptchaMismatch {
                question: self.question,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

impl Default for Captcha {
    fn default() -> Self {
        Self::standard()
    }
}
