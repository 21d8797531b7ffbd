use serde::{Deserialize, Serialize};

use super::District;

/// Province (intara): the top level below the nation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub districts: Vec<District>,
}

impl Province {
    pub fn find_district(&self, district_id: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.id == district_id)
    }
}
