//! Pure jurisdiction check: may an administrator seated at `scope` act on `target`?
//!
//! | seat \ target | province | district | sector |
//! |---------------|----------|----------|--------|
//! | national | allow | allow | allow |
//! | provincial | same province | inside province | inside province |
//! | district | deny | same district | inside district |
//! | sector | deny | deny | same sector |
//!
//! "Same" and "inside" always compare the full ancestor path, since district
//! and sector ids repeat across parents. Status is not visible here; callers
//! deny suspended administrators before asking (see [`crate::features::access::guards`]).

use crate::features::admins::models::Jurisdiction;
use crate::features::geography::{JurisdictionPath, NodeKind};

/// Decision for a structured target. A missing scope is always denied.
pub fn can_access(scope: Option<&Jurisdiction>, target: &JurisdictionPath) -> bool {
    let Some(scope) = scope else {
        return false;
    };

    match (scope, target) {
        (Jurisdiction::National, _) => true,

        (Jurisdiction::Provincial { province_id }, target) => target.province_id() == province_id,

        (Jurisdiction::District { .. }, JurisdictionPath::Province { .. }) => false,
        (
            Jurisdiction::District {
                province_id,
                district_id,
            },
            JurisdictionPath::District {
                province_id: target_province,
                district_id: target_district,
            }
            | JurisdictionPath::Sector {
                province_id: target_province,
                district_id: target_district,
                ..
            },
        ) => target_province == province_id && target_district == district_id,

        (
            Jurisdiction::Sector {
                province_id,
                district_id,
                sector_id,
            },
            JurisdictionPath::Sector {
                province_id: target_province,
                district_id: target_district,
                sector_id: target_sector,
            },
        ) => {
            target_province == province_id
                && target_district == district_id
                && target_sector == sector_id
        }
        (Jurisdiction::Sector { .. }, _) => false,
    }
}

/// Decision for the separator-joined target form (`"kigali-nyarugenge"`).
/// A target that does not parse as `kind` is denied.
pub fn can_access_path(scope: Option<&Jurisdiction>, kind: NodeKind, target_id: &str) -> bool {
    match JurisdictionPath::parse(kind, target_id) {
        Some(target) => can_access(scope, &target),
        None => false,
    }
}
