use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::constants::PATH_SEPARATOR;

/// Kind of geography node a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Province,
    District,
    Sector,
}

impl NodeKind {
    /// Number of segments a path of this kind carries
    pub fn depth(self) -> usize {
        match self {
            NodeKind::Province => 1,
            NodeKind::District => 2,
            NodeKind::Sector => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Province => "province",
            NodeKind::District => "district",
            NodeKind::Sector => "sector",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully qualified reference to a province, district or sector.
///
/// District and sector ids are only unique below their parent, so a
/// reference always carries every ancestor id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum JurisdictionPath {
    Province {
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

impl JurisdictionPath {
    pub fn province(province_id: impl Into<String>) -> Self {
        JurisdictionPath::Province {
            province_id: province_id.into(),
        }
    }

    pub fn district(province_id: impl Into<String>, district_id: impl Into<String>) -> Self {
        JurisdictionPath::District {
            province_id: province_id.into(),
            district_id: district_id.into(),
        }
    }

    pub fn sector(
        province_id: impl Into<String>,
        district_id: impl Into<String>,
        sector_id: impl Into<String>,
    ) -> Self {
        JurisdictionPath::Sector {
            province_id: province_id.into(),
            district_id: district_id.into(),
            sector_id: sector_id.into(),
        }
    }

    /// Parses the separator-joined form used by route parameters
    /// (`"kigali"`, `"kigali-nyarugenge"`, `"kigali-nyarugenge-gikondo"`).
    ///
    /// Returns `None` when the segment count does not match `kind` or a
    /// segment is empty, so an id containing the separator can never be
    /// silently split into the wrong ancestors.
    pub fn parse(kind: NodeKind, raw: &str) -> Option<Self> {
        let segments: Vec<&str> = raw.split(PATH_SEPARATOR).collect();
        if segments.len() != kind.depth() || segments.iter().any(|s| s.is_empty()) {
            return None;
        }

        let path = match kind {
            NodeKind::Province => Self::province(segments[0]),
            NodeKind::District => Self::district(segments[0], segments[1]),
            NodeKind::Sector => Self::sector(segments[0], segments[1], segments[2]),
        };
        Some(path)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            JurisdictionPath::Province { .. } => NodeKind::Province,
            JurisdictionPath::District { .. } => NodeKind::District,
            JurisdictionPath::Sector { .. } => NodeKind::Sector,
        }
    }

    pub fn province_id(&self) -> &str {
        match self {
            JurisdictionPath::Province { province_id }
            | JurisdictionPath::District { province_id, .. }
            | JurisdictionPath::Sector { province_id, .. } => province_id,
        }
    }

    pub fn district_id(&self) -> Option<&str> {
        match self {
            JurisdictionPath::Province { .. } => None,
            JurisdictionPath::District { district_id, .. }
            | JurisdictionPath::Sector { district_id, .. } => Some(district_id),
        }
    }

    pub fn sector_id(&self) -> Option<&str> {
        match self {
            JurisdictionPath::Sector { sector_id, .. } => Some(sector_id),
            _ => None,
        }
    }

    /// Id of the node the path points at
    pub fn leaf_id(&self) -> &str {
        match self {
            JurisdictionPath::Province { province_id } => province_id,
            JurisdictionPath::District { district_id, .. } => district_id,
            JurisdictionPath::Sector { sector_id, .. } => sector_id,
        }
    }

    /// True when `other` is this node or lies below it
    pub fn contains(&self, other: &JurisdictionPath) -> bool {
        if other.kind().depth() < self.kind().depth() {
            return false;
        }
        if self.province_id() != other.province_id() {
            return false;
        }
        match self {
            JurisdictionPath::Province { .. } => true,
            JurisdictionPath::District { district_id, .. } => {
                other.district_id() == Some(district_id.as_str())
            }
            JurisdictionPath::Sector { .. } => self == other,
        }
    }
}

impl fmt::Display for JurisdictionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JurisdictionPath::Province { province_id } => write!(f, "{}", province_id),
            JurisdictionPath::District {
                province_id,
                district_id,
            } => write!(f, "{}{}{}", province_id, PATH_SEPARATOR, district_id),
            JurisdictionPath::Sector {
                province_id,
                district_id,
                sector_id,
            } => write!(
                f,
                "{}{sep}{}{sep}{}",
                province_id,
                district_id,
                sector_id,
                sep = PATH_SEPARATOR
            ),
        }
    }
}
