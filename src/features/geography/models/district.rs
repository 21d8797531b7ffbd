use serde::{Deserialize, Serialize};

use super::Sector;

/// District (akarere). `id` is unique only within its province.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: String,
    pub name: String,
    /// Owning province, filled in when the catalog is loaded
    #[serde(default, skip_deserializing)]
    pub province_id: String,
    #[serde(default)]
    pub sectors: Vec<Sector>,
}

impl District {
    pub fn find_sector(&self, sector_id: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == sector_id)
    }
}
