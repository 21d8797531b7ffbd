//! Route and action guards for jurisdiction-scoped views.
//!
//! A guard runs its checks in order and stops at the first failure:
//! - an identity must be presented
//! - the administrator must be active
//! - their level must rank at least the required level
//!   (national > provincial > district > sector)
//! - the target, if any, must parse and lie inside their jurisdiction

use crate::features::access::models::{AccessDecision, AccessRequest, DenyReason};
use crate::features::access::services::can_access;
use crate::features::admins::models::Administrator;

/// Evaluates `request` for the administrator presented by the caller.
///
/// # Example
/// ```ignore
/// let request = AccessRequest::raw_target(NodeKind::District, "kigali-nyarugenge");
/// if !guard(Some(&admin), &request).is_allowed() { /* redirect to dashboard */ }
/// ```
pub fn guard(admin: Option<&Administrator>, request: &AccessRequest) -> AccessDecision {
    let Some(admin) = admin else {
        return AccessDecision::Deny(DenyReason::Unauthenticated);
    };

    if !admin.is_active() {
        return AccessDecision::Deny(DenyReason::Suspended);
    }

    if let Some(required) = request.required_level {
        if !admin.level().at_least(required) {
            return AccessDecision::Deny(DenyReason::InsufficientLevel);
        }
    }

    if let Some(target) = &request.target {
        let Some(path) = target.resolve() else {
            return AccessDecision::Deny(DenyReason::MalformedTarget);
        };
        if !can_access(Some(&admin.jurisdiction), &path) {
            return AccessDecision::Deny(DenyReason::OutsideJurisdiction);
        }
    }

    AccessDecision::Allow
}
