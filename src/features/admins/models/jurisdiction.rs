use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AdminLevel;
use crate::features::geography::JurisdictionPath;

/// The seat an administrator holds: their level plus the ids that anchor it.
///
/// Serialized flat and tagged by `level`, e.g.
/// `{"level": "district", "provinceId": "kigali", "districtId": "nyarugenge"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Jurisdiction {
    National,
    Provincial {
        province_id: String,
    },
    District {
        province_id: String,
        district_id: String,
    },
    Sector {
        province_id: String,
        district_id: String,
        sector_id: String,
    },
}

impl Jurisdiction {
    pub fn provincial(province_id: impl Into<String>) -> Self {
        Jurisdiction::Provincial {
            province_id: province_id.into(),
        }
    }

    pub fn district(province_id: impl Into<String>, district_id: impl Into<String>) -> Self {
        Jurisdiction::District {
            province_id: province_id.into(),
            district_id: district_id.into(),
        }
    }

    pub fn sector(
        province_id: impl Into<String>,
        district_id: impl Into<String>,
        sector_id: impl Into<String>,
    ) -> Self {
        Jurisdiction::Sector {
            province_id: province_id.into(),
            district_id: district_id.into(),
            sector_id: sector_id.into(),
        }
    }

    pub fn level(&self) -> AdminLevel {
        match self {
            Jurisdiction::National => AdminLevel::National,
            Jurisdiction::Provincial { .. } => AdminLevel::Provincial,
            Jurisdiction::District { .. } => AdminLevel::District,
            Jurisdiction::Sector { .. } => AdminLevel::Sector,
        }
    }

    /// Root of the administrator's subtree; `None` for the national seat
    pub fn anchor(&self) -> Option<JurisdictionPath> {
        match self {
            Jurisdiction::National => None,
            Jurisdiction::Provincial { province_id } => {
                Some(JurisdictionPath::province(province_id.as_str()))
            }
            Jurisdiction::District {
                province_id,
                district_id,
            } => Some(JurisdictionPath::district(
                province_id.as_str(),
                district_id.as_str(),
            )),
            Jurisdiction::Sector {
                province_id,
                district_id,
                sector_id,
            } => Some(JurisdictionPath::sector(
                province_id.as_str(),
                district_id.as_str(),
                sector_id.as_str(),
            )),
        }
    }

    pub fn province_id(&self) -> Option<&str> {
        match self {
            Jurisdiction::National => None,
            Jurisdiction::Provincial { province_id }
            | Jurisdiction::District { province_id, .. }
            | Jurisdiction::Sector { province_id, .. } => Some(province_id),
        }
    }

    pub fn district_id(&self) -> Option<&str> {
        match self {
            Jurisdiction::District { district_id, .. }
            | Jurisdiction::Sector { district_id, .. } => Some(district_id),
            _ => None,
        }
    }

    pub fn sector_id(&self) -> Option<&str> {
        match self {
            Jurisdiction::Sector { sector_id, .. } => Some(sector_id),
            _ => None,
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor() {
            Some(path) => write!(f, "{} {}", self.level(), path),
            None => f.write_str("national"),
        }
    }
}

/// How an upsert decides which existing record it replaces.
///
/// `Leaf` compares only the district/sector id, so a same-named district or
/// sector under another parent is treated as the same seat. `Path` compares
/// the full ancestor path. Provincial and national seats behave the same
/// under both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementKey {
    #[default]
    Leaf,
    Path,
}

impl ReplacementKey {
    /// Whether `a` and `b` occupy the same seat under this policy
    pub fn same_seat(self, a: &Jurisdiction, b: &Jurisdiction) -> bool {
        match (a, b) {
            (Jurisdiction::National, Jurisdiction::National) => true,
            (
                Jurisdiction::Provincial { province_id: pa },
                Jurisdiction::Provincial { province_id: pb },
            ) => pa == pb,
            (
                Jurisdiction::District {
                    province_id: pa,
                    district_id: da,
                },
                Jurisdiction::District {
                    province_id: pb,
                    district_id: db,
                },
            ) => da == db && (self == ReplacementKey::Leaf || pa == pb),
            (
                Jurisdiction::Sector {
                    province_id: pa,
                    district_id: da,
                    sector_id: sa,
                },
                Jurisdiction::Sector {
                    province_id: pb,
                    district_id: db,
                    sector_id: sb,
                },
            ) => sa == sb && (self == ReplacementKey::Leaf || (pa == pb && da == db)),
            _ => false,
        }
    }
}

impl FromStr for ReplacementKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "leaf" => Ok(ReplacementKey::Leaf),
            "path" => Ok(ReplacementKey::Path),
            other => Err(format!(
                "ADMIN_REPLACEMENT_KEY must be 'leaf' or 'path', got '{}'",
                other
            )),
        }
    }
}
