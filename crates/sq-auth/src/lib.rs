//! sq-auth
//!
//! The user-facing flows of the platform: sign-up, sign-in, federated
//! sign-in, password reset, student onboarding, profile editing and
//! sign-out. Every flow ends in a [`FlowOutcome`](sq_core::FlowOutcome);
//! failures become error banners, never panics or propagated errors.

mod error;
mod flows;
mod messages;
mod profile_provisioner;
mod submit_guard;

#[cfg(test)]
mod tests;

pub use error::{AuthError, Result as AuthResult};
pub use flows::{
    auth_flows::AuthFlows,
    profile_editor::{ProfileEditor, ProfileScreen, ProfileView},
    student_onboarding::StudentOnboarding,
};
pub use messages::{auth_failure, onboarding_failure};
pub use profile_provisioner::{Provisioned, ProfileProvisioner, ensure_profile, insert_profile_once};
pub use submit_guard::{SubmitGuard, SubmitPermit};
