pub mod account_type;
pub mod account_type_hint;
pub mod destination;
pub mod flow_outcome;
pub mod identity;
pub mod new_profile;
pub mod profile;
pub mod profile_form;
pub mod profile_update;
