use serde::{Deserialize, Serialize};

/// Sector (umurenge). `id` is unique only within its district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: String,
    pub name: String,
    #[serde(default, skip_deserializing)]
    pub province_id: String,
    #[serde(default, skip_deserializing)]
    pub district_id: String,
}
