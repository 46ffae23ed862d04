use crate::ClientResult;

use sq_core::{NewProfile, Profile, ProfileUpdate};

use async_trait::async_trait;
use uuid::Uuid;

/// Record half of the hosted service: the profile table and the
/// email-availability procedure.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Profile row for `id`; zero rows is `Ok(None)`.
    async fn fetch_profile(&self, id: Uuid) -> ClientResult<Option<Profile>>;

    /// Insert a row. An existing row surfaces as an error where
    /// `ClientError::is_duplicate` holds.
    async fn insert_profile(&self, profile: &NewProfile) -> ClientResult<()>;

    /// Overwrite the given fields of the row for `id`.
    async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> ClientResult<()>;

    /// Overwrite the row for `profile.id` with every field of `profile`.
    async fn replace_profile(&self, profile: &NewProfile) -> ClientResult<()>;

    /// Id of the parent-category profile registered under `email`.
    async fn find_parent_by_email(&self, email: &str) -> ClientResult<Option<Uuid>>;

    async fn is_email_available(&self, email: &str) -> ClientResult<bool>;
}
