pub(crate) mod auth_event;
#[allow(clippy::module_inception)]
pub(crate) mod session;
pub(crate) mod sign_up_metadata;
