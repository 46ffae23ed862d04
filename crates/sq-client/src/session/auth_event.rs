use crate::Session;

/// Auth state change observed by subscribers of `AuthApi::subscribe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}
