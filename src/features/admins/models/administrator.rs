use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AdminLevel, AdminStatus, Jurisdiction};
use crate::shared::constants::ADMIN_ID_PREFIX;

/// Globally unique administrator identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(String);

impl AdminId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `admin-<level>-<uuid v7>`; time-ordered like the portal's ids
    pub fn generate(level: AdminLevel) -> Self {
        Self(format!("{}-{}-{}", ADMIN_ID_PREFIX, level, Uuid::now_v7()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AdminId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Administrator record as held by the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Administrator {
    pub id: AdminId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(flatten)]
    pub jurisdiction: Jurisdiction,
    #[serde(default)]
    pub status: AdminStatus,
    pub created_at: DateTime<Utc>,
}

impl Administrator {
    pub fn level(&self) -> AdminLevel {
        self.jurisdiction.level()
    }

    pub fn is_active(&self) -> bool {
        self.status == AdminStatus::Active
    }

    /// Case-insensitive substring match over contact details and jurisdiction ids.
    /// An empty query matches everyone.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }

        [
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            Some(self.phone.as_str()),
            self.jurisdiction.province_id(),
            self.jurisdiction.district_id(),
            self.jurisdiction.sector_id(),
        ]
        .into_iter()
        .flatten()
        .any(|v| v.to_lowercase().contains(&q))
    }
}
