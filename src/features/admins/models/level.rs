use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::constants::{RANK_DISTRICT, RANK_NATIONAL, RANK_PROVINCIAL, RANK_SECTOR};

/// Rank of an administrator in the national → sector hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminLevel {
    National,
    Provincial,
    District,
    Sector,
}

impl AdminLevel {
    pub const ALL: [AdminLevel; 4] = [
        AdminLevel::National,
        AdminLevel::Provincial,
        AdminLevel::District,
        AdminLevel::Sector,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AdminLevel::National => "national",
            AdminLevel::Provincial => "provincial",
            AdminLevel::District => "district",
            AdminLevel::Sector => "sector",
        }
    }

    /// Higher rank outranks lower rank in route guards
    pub fn rank(self) -> u8 {
        match self {
            AdminLevel::National => RANK_NATIONAL,
            AdminLevel::Provincial => RANK_PROVINCIAL,
            AdminLevel::District => RANK_DISTRICT,
            AdminLevel::Sector => RANK_SECTOR,
        }
    }

    pub fn at_least(self, required: AdminLevel) -> bool {
        self.rank() >= required.rank()
    }
}

impl fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "national" => Ok(AdminLevel::National),
            "provincial" => Ok(AdminLevel::Provincial),
            "district" => Ok(AdminLevel::District),
            "sector" => Ok(AdminLevel::Sector),
            other => Err(format!("Unknown admin level: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminStatus {
    #[default]
    Active,
    Suspended,
}

impl AdminStatus {
    pub fn toggled(self) -> Self {
        match self {
            AdminStatus::Active => AdminStatus::Suspended,
            AdminStatus::Suspended => AdminStatus::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdminStatus::Active => "active",
            AdminStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
