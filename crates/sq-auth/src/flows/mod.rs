pub(crate) mod auth_flows;
pub(crate) mod profile_editor;
pub(crate) mod student_onboarding;
