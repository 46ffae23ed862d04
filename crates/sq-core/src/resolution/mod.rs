//! Post-sign-in account resolution.
//!
//! Decides which dashboard a freshly signed-in user lands on from the
//! stored profile, falling back to the transient [`AccountTypeHint`]
//! only when the profile is missing, unreadable or has no category.
//!
//! [`AccountTypeHint`]: crate::AccountTypeHint

pub mod policy;
pub mod profile_lookup;
#[allow(clippy::module_inception)]
pub mod resolution;
