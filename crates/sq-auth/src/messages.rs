//! Service error text to banner text.

use sq_core::{FlowOutcome, FollowUp};

pub(crate) const LOGIN_SUCCESS: &str = "Login successful! Redirecting...";
pub(crate) const SIGN_UP_SUCCESS: &str = "Account created successfully! Redirecting...";
pub(crate) const STUDENT_SIGN_UP_SUCCESS: &str =
    "Account created successfully! Redirecting to avatar selection...";
pub(crate) const RESET_EMAIL_SENT: &str = "Password reset email sent! Check your inbox.";
pub(crate) const RESET_EMAIL_REQUIRED: &str = "Please enter your email address";
pub(crate) const RESET_FAILED: &str = "Failed to send reset email. Please try again.";
pub(crate) const GOOGLE_BLOCKED_FOR_STUDENTS: &str =
    "Google sign-in is not available for student accounts. Please use email and password.";
pub(crate) const GOOGLE_FAILED: &str = "Failed to sign in with Google. Please try again.";
pub(crate) const LOGOUT_FAILED: &str = "Failed to logout. Please try again.";
pub(crate) const PROFILE_LOAD_FAILED: &str = "Failed to load profile data";
pub(crate) const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub(crate) const PROFILE_UPDATE_FAILED: &str = "Failed to update profile. Please try again.";
pub(crate) const STUDENT_EMAIL_TAKEN: &str =
    "This email is already registered. Please use a different email or try logging in.";

const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";
const ALREADY_REGISTERED: &str = "This email is already registered. Please log in instead.";
const EMAIL_NOT_CONFIRMED: &str = "Please check your email to confirm your account.";
const ACCOUNT_EXISTS: &str = "This account already exists. Please log in instead.";
pub(crate) const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

const STUDENT_ALREADY_REGISTERED: &str = "This email is already registered. Please use a different email or try logging in at auth/auth.html";
const STUDENT_CHECK_CONSTRAINT: &str =
    "Unable to create student account. Please check your information and try again.";
const STUDENT_INVALID_EMAIL: &str = "Please enter a valid email address.";
const STUDENT_GENERIC_FAILURE: &str = "An error occurred during signup. Please try again.";

/// Outcome for a failed sign-in/sign-up on the main auth form.
///
/// "User already registered" also flips the form to sign-in mode after
/// `mode_switch_delay_ms`.
pub fn auth_failure(message: &str, mode_switch_delay_ms: u64) -> FlowOutcome {
    if message.contains("Invalid login credentials") {
        FlowOutcome::error(INVALID_CREDENTIALS)
    } else if message.contains("User already registered") {
        FlowOutcome::error(ALREADY_REGISTERED).with_follow_up(FollowUp::SwitchToSignIn {
            after_ms: mode_switch_delay_ms,
        })
    } else if message.contains("Email not confirmed") {
        FlowOutcome::error(EMAIL_NOT_CONFIRMED)
    } else if message.contains("duplicate key") {
        FlowOutcome::error(ACCOUNT_EXISTS)
    } else {
        FlowOutcome::error(or_fallback(message, GENERIC_FAILURE))
    }
}

/// Banner text for a failed student onboarding submission.
pub fn onboarding_failure(message: &str) -> String {
    let lower = message.to_lowercase();

    let text = if lower.contains("already registered")
        || lower.contains("already exists")
        || message.contains("duplicate key")
    {
        STUDENT_ALREADY_REGISTERED
    } else if message.contains("violates check constraint") {
        STUDENT_CHECK_CONSTRAINT
    } else if lower.contains("email") && lower.contains("invalid") {
        STUDENT_INVALID_EMAIL
    } else {
        or_fallback(message, STUDENT_GENERIC_FAILURE)
    };

    text.to_string()
}

/// `message` unless blank
pub(crate) fn or_fallback<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}
