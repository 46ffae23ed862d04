pub mod error;
pub mod models;
pub mod resolution;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::account_type::AccountType;
pub use models::account_type_hint::AccountTypeHint;
pub use models::destination::Destination;
pub use models::flow_outcome::{FlowOutcome, FollowUp, Navigation, NavigationTarget, Notice};
pub use models::identity::Identity;
pub use models::new_profile::NewProfile;
pub use models::profile::Profile;
pub use models::profile_form::ProfileForm;
pub use models::profile_update::{ProfileUpdate, StudentFields};
pub use resolution::policy::resolve_destination;
pub use resolution::profile_lookup::{
    ACCESS_POLICY_ERROR_CODE, LookupFailure, ProfileLookup, is_access_policy_violation,
};
pub use resolution::resolution::{Resolution, ResolutionBasis, ResolutionFailure};
pub use validation::Captcha;
pub use wizard::account_form::AccountForm;
pub use wizard::student_draft::StudentDraft;
pub use wizard::student_registration::StudentRegistration;
pub use wizard::student_signup_wizard::StudentSignupWizard;
pub use wizard::wizard_panel::WizardPanel;
