//! Access-control decisions.
//!
//! Callers identify themselves through two untyped hints, a user id and a
//! claimed role. The functions here are pure: services look the caller up and
//! hand the stored record in, so the same inputs always yield the same
//! decision.

use thiserror::Error;

use super::{User, UserId, UserType};

/// Identity hints supplied by the caller.
///
/// Malformed hints are kept as absent; the decision functions treat them the
/// same way as missing ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallerClaim {
    user_id: Option<UserId>,
    role: Option<UserType>,
}

impl CallerClaim {
    /// Build a claim from already-typed parts.
    #[must_use]
    pub const fn new(user_id: Option<UserId>, role: Option<UserType>) -> Self {
        Self { user_id, role }
    }

    /// Parse raw header values, dropping anything that does not parse.
    #[must_use]
    pub fn from_raw(user_id: Option<&str>, role: Option<&str>) -> Self {
        Self {
            user_id: user_id.and_then(|raw| UserId::parse(raw).ok()),
            role: role.and_then(|raw| raw.parse().ok()),
        }
    }

    /// Claimed caller id, if present and numeric.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Claimed role, if present and recognised.
    #[must_use]
    pub const fn role(&self) -> Option<UserType> {
        self.role
    }
}

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DenialReason {
    /// No `user_id` hint, or one that is not a number.
    #[error("caller id is missing or malformed")]
    MissingCallerId,
    /// No `user_role` hint, or one that names no known role.
    #[error("caller role is missing or unrecognised")]
    MissingRole,
    /// The claimed id does not resolve to a stored user.
    #[error("caller is not a registered user")]
    UnknownCaller,
    /// The claimed role is not allowed to perform the action.
    #[error("role {claimed} may not perform this action")]
    RoleNotPermitted {
        /// Role named in the `user_role` hint.
        claimed: UserType,
    },
    /// The claimed role differs from the one stored for the caller.
    #[error("claimed role {claimed} does not match stored role {stored}")]
    RoleMismatch {
        /// Role named in the `user_role` hint.
        claimed: UserType,
        /// Role recorded for the caller.
        stored: UserType,
    },
    /// The caller targeted an account other than their own.
    #[error("user {caller} may only act on their own account, not {target}")]
    NotOwner {
        /// Verified caller.
        caller: UserId,
        /// Account the caller tried to act on.
        target: UserId,
    },
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The action may go ahead.
    Permit,
    /// The action is refused for the given reason.
    Deny(DenialReason),
}

impl AccessDecision {
    /// Convert into a `Result` for `?` propagation.
    #[must_use = "a denial is only enforced when the result is checked"]
    pub fn into_result(self) -> Result<(), DenialReason> {
        match self {
            Self::Permit => Ok(()),
            Self::Deny(reason) => Err(reason),
        }
    }
}

/// Permit only callers that claim TEACHER and are stored as TEACHER.
///
/// The stored type is checked so a spoofed role header is not enough.
#[must_use]
pub fn decide_verified_teacher(claim: &CallerClaim, stored_caller: Option<&User>) -> AccessDecision {
    let Some(_) = claim.user_id() else {
        return AccessDecision::Deny(DenialReason::MissingCallerId);
    };
    let Some(claimed) = claim.role() else {
        return AccessDecision::Deny(DenialReason::MissingRole);
    };
    if claimed != UserType::Teacher {
        return AccessDecision::Deny(DenialReason::RoleNotPermitted { claimed });
    }
    let Some(stored) = stored_caller else {
        return AccessDecision::Deny(DenialReason::UnknownCaller);
    };
    if stored.user_type() != claimed {
        return AccessDecision::Deny(DenialReason::RoleMismatch {
            claimed,
            stored: stored.user_type(),
        });
    }
    AccessDecision::Permit
}

/// Listing users requires a verified teacher.
#[must_use]
pub fn decide_list_users(claim: &CallerClaim, stored_caller: Option<&User>) -> AccessDecision {
    decide_verified_teacher(claim, stored_caller)
}

/// Creating, updating and deleting exams requires a verified teacher.
#[must_use]
pub fn decide_manage_exams(claim: &CallerClaim, stored_caller: Option<&User>) -> AccessDecision {
    decide_verified_teacher(claim, stored_caller)
}

/// Users may only delete themselves.
#[must_use]
pub fn decide_delete_user(
    claim: &CallerClaim,
    stored_caller: Option<&User>,
    target: UserId,
) -> AccessDecision {
    if claim.user_id().is_none() {
        return AccessDecision::Deny(DenialReason::MissingCallerId);
    }
    let Some(caller) = stored_caller else {
        return AccessDecision::Deny(DenialReason::UnknownCaller);
    };
    if caller.id() != target {
        return AccessDecision::Deny(DenialReason::NotOwner {
            caller: caller.id(),
            target,
        });
    }
    AccessDecision::Permit
}

#[cfg(test)]
mod tests;
