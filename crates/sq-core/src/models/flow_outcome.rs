//! What a user action ends in: a banner, a deferred navigation, and an
//! optional follow-up for the form that triggered it.

use crate::Destination;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    /// Transient banner, usually followed by navigation
    Success(String),
    /// Persistent banner, never followed by navigation
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum NavigationTarget {
    Page(Destination),
    /// Third-party URL (federated sign-in)
    External(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub target: NavigationTarget,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FollowUp {
    /// Flip the auth form from sign-up to sign-in mode
    SwitchToSignIn { after_ms: u64 },
    /// Empty the CAPTCHA input and stay on the current panel
    ClearCaptcha,
    CloseResetDialog { after_ms: u64 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<FollowUp>,
}

impl FlowOutcome {
    /// Returned when a submission is already in flight; nothing happens.
    pub fn busy() -> Self {
        Self::default()
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            notice: Some(Notice::Error(message.into())),
            ..Self::default()
        }
    }

    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            notice: Some(Notice::Success(message.into())),
            ..Self::default()
        }
    }

    /// Success banner first, navigation after `delay_ms` so it stays visible.
    pub fn redirect<S: Into<String>>(message: S, destination: Destination, delay_ms: u64) -> Self {
        Self {
            notice: Some(Notice::Success(message.into())),
            navigation: Some(Navigation {
                target: NavigationTarget::Page(destination),
                delay_ms,
            }),
            follow_up: None,
        }
    }

    /// Navigation without a banner
    pub fn navigate(target: NavigationTarget, delay_ms: u64) -> Self {
        Self {
            navigation: Some(Navigation { target, delay_ms }),
            ..Self::default()
        }
    }

    pub fn with_follow_up(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }

    pub fn is_busy(&self) -> bool {
        self.notice.is_none() && self.navigation.is_none() && self.follow_up.is_none()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.notice, Some(Notice::Error(_)))
    }

    pub fn message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Success(message)) | Some(Notice::Error(message)) => Some(message),
            None => None,
        }
    }

    /// Page this outcome navigates to, if any
    pub fn destination(&self) -> Option<Destination> {
        match self.navigation.as_ref().map(|navigation| &navigation.target) {
            Some(NavigationTarget::Page(destination)) => Some(*destination),
            _ => None,
        }
    }
}
