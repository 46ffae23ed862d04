//! sq-client
//!
//! REST client for the hosted identity/data service, plus the two seams
//! (`AuthApi`, `ProfileStore`) the auth flows are written against.

mod auth_api;
mod client;
mod profile_store;
mod session;

#[cfg(test)]
mod tests;

pub use auth_api::AuthApi;
pub use client::{ClientError, ClientResult, ServiceClient};
pub use profile_store::ProfileStore;
pub use session::{auth_event::AuthEvent, session::Session, sign_up_metadata::SignUpMetadata};

/// PostgREST "no rows / multiple rows for a single-row request"
pub const NO_SINGLE_ROW_ERROR_CODE: &str = "PGRST116";
/// Postgres `unique_violation`
pub const DUPLICATE_ERROR_CODE: &str = "23505";

const AUTH_PATH: &str = "/auth/v1";
const REST_PATH: &str = "/rest/v1";
const AUTH_EVENT_CAPACITY: usize = 16;
