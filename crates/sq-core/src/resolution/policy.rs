use crate::{
    AccountType, AccountTypeHint, ProfileLookup, Resolution, ResolutionBasis, ResolutionFailure,
};

use std::str::FromStr;

use chrono::Utc;

/// Decide where a signed-in user goes.
///
/// Priority order:
/// 1. read failed: access-policy violations always reject, anything else
///    falls back to the hint
/// 2. no row: hint fallback
/// 3. row with empty category: hint fallback
/// 4. row with category: parent/teacher/student by value; an unknown value
///    is rejected unless the hint says student
pub fn resolve_destination(lookup: &ProfileLookup, hint: AccountTypeHint) -> Resolution {
    match lookup {
        ProfileLookup::Failed(failure) if failure.is_access_policy_violation() => {
            Resolution::Reject(ResolutionFailure::AccessPolicy {
                support_code: support_code(),
            })
        }
        ProfileLookup::Failed(_) => fallback(
            hint,
            ResolutionBasis::HintAfterReadError,
            ResolutionFailure::ProfileUnavailable,
        ),
        ProfileLookup::Missing => fallback(
            hint,
            ResolutionBasis::HintAfterMissingProfile,
            ResolutionFailure::ProfileNotFound,
        ),
        ProfileLookup::Found { account_type } => {
            let raw = account_type.as_deref().map(str::trim).unwrap_or_default();
            if raw.is_empty() {
                return fallback(
                    hint,
                    ResolutionBasis::HintAfterMissingAccountType,
                    ResolutionFailure::AccountTypeMissing,
                );
            }

            match AccountType::from_str(raw) {
                Ok(account_type) => Resolution::Redirect {
                    account_type,
                    basis: ResolutionBasis::StoredProfile,
                },
                Err(_) if hint.is_student() => Resolution::Redirect {
                    account_type: AccountType::Student,
                    basis: ResolutionBasis::LegacyStudentFallback,
                },
                Err(_) => Resolution::Reject(ResolutionFailure::InvalidAccountType {
                    value: raw.to_lowercase(),
                }),
            }
        }
    }
}

fn fallback(
    hint: AccountTypeHint,
    basis: ResolutionBasis,
    failure: ResolutionFailure,
) -> Resolution {
    match hint.account_type() {
        Some(account_type) => Resolution::Redirect {
            account_type,
            basis,
        },
        None => Resolution::Reject(failure),
    }
}

/// Reference quoted to support for access-policy failures
fn support_code() -> String {
    format!("RLS-{}", Utc::now().timestamp_millis())
}
