pub mod account_form;
pub mod student_draft;
pub mod student_registration;
pub mod student_signup_wizard;
pub mod wizard_panel;
