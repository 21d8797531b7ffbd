use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::features::geography::models::{District, JurisdictionPath, Province, Sector};
use crate::shared::validation::JURISDICTION_ID_REGEX;

const EMBEDDED_CATALOG: &str = include_str!("../../../../data/rwanda_hierarchy.json");

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    provinces: Vec<Province>,
}

/// Read-only province → district → sector tree.
///
/// Every lookup below the province level is scoped by its ancestors; a
/// missing segment yields `None` or an empty slice rather than an error.
#[derive(Debug, Clone)]
pub struct GeographyCatalog {
    provinces: Vec<Province>,
}

impl GeographyCatalog {
    /// Catalog compiled into the binary (Rwanda, as used by the portal)
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read geography catalog {}: {:?}", path.display(), e);
            AppError::Io(e)
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let fixture: CatalogFixture = serde_json::from_str(raw)?;
        Self::from_provinces(fixture.provinces)
    }

    /// Builds a catalog, checking ids and filling in parent ids.
    pub fn from_provinces(mut provinces: Vec<Province>) -> Result<Self> {
        check_siblings("province", "catalog", provinces.iter().map(|p| p.id.as_str()))?;

        for province in &mut provinces {
            check_siblings(
                "district",
                &province.id,
                province.districts.iter().map(|d| d.id.as_str()),
            )?;

            for district in &mut province.districts {
                district.province_id = province.id.clone();

                let scope = format!("{}/{}", province.id, district.id);
                check_siblings("sector", &scope, district.sectors.iter().map(|s| s.id.as_str()))?;

                for sector in &mut district.sectors {
                    sector.province_id = province.id.clone();
                    sector.district_id = district.id.clone();
                }
            }
        }

        let catalog = Self { provinces };
        tracing::debug!(
            "Loaded geography catalog: {} provinces, {} districts, {} sectors",
            catalog.province_count(),
            catalog.district_count(),
            catalog.sector_count()
        );
        Ok(catalog)
    }

    // ==================== Province Methods ====================

    pub fn list_provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn find_province(&self, province_id: &str) -> Option<&Province> {
        self.provinces.iter().find(|p| p.id == province_id)
    }

    // ==================== District Methods ====================

    /// Districts of a province, empty when the province is unknown
    pub fn list_districts(&self, province_id: &str) -> &[District] {
        self.find_province(province_id)
            .map(|p| p.districts.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_district(&self, province_id: &str, district_id: &str) -> Option<&District> {
        self.find_province(province_id)?.find_district(district_id)
    }

    /// Every district in catalog order
    pub fn all_districts(&self) -> impl Iterator<Item = &District> {
        self.provinces.iter().flat_map(|p| p.districts.iter())
    }

    // ==================== Sector Methods ====================

    /// Sectors of a district, empty when any segment is unknown
    pub fn list_sectors(&self, province_id: &str, district_id: &str) -> &[Sector] {
        self.find_district(province_id, district_id)
            .map(|d| d.sectors.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_sector(
        &self,
        province_id: &str,
        district_id: &str,
        sector_id: &str,
    ) -> Option<&Sector> {
        self.find_district(province_id, district_id)?
            .find_sector(sector_id)
    }

    /// Every sector in catalog order
    pub fn all_sectors(&self) -> impl Iterator<Item = &Sector> {
        self.all_districts().flat_map(|d| d.sectors.iter())
    }

    // ==================== Path Methods ====================

    /// Display name of the node at `path`, if every segment exists under its parent
    pub fn resolve(&self, path: &JurisdictionPath) -> Option<&str> {
        let name = match path {
            JurisdictionPath::Province { province_id } => &self.find_province(province_id)?.name,
            JurisdictionPath::District {
                province_id,
                district_id,
            } => &self.find_district(province_id, district_id)?.name,
            JurisdictionPath::Sector {
                province_id,
                district_id,
                sector_id,
            } => &self.find_sector(province_id, district_id, sector_id)?.name,
        };
        Some(name.as_str())
    }

    pub fn contains(&self, path: &JurisdictionPath) -> bool {
        self.resolve(path).is_some()
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn district_count(&self) -> usize {
        self.all_districts().count()
    }

    pub fn sector_count(&self) -> usize {
        self.all_sectors().count()
    }
}

fn check_siblings<'a>(
    kind: &str,
    scope: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !JURISDICTION_ID_REGEX.is_match(id) {
            return Err(AppError::Catalog(format!(
                "invalid {} id '{}' in {}",
                kind, id, scope
            )));
        }
        if !seen.insert(id) {
            return Err(AppError::Catalog(format!(
                "duplicate {} id '{}' in {}",
                kind, id, scope
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> GeographyCatalog {
        GeographyCatalog::embedded().expect("embedded catalog must load")
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog();
        assert_eq!(catalog.province_count(), 3);
        assert_eq!(catalog.district_count(), 10);
        assert_eq!(catalog.sector_count(), 142);
        assert_eq!(catalog.list_provinces()[0].id, "kigali");
    }

    #[test]
    fn test_parent_ids_are_filled_in() {
        let catalog = catalog();
        let sector = catalog
            .find_sector("northern", "burera", "butaro")
            .expect("butaro exists");
        assert_eq!(sector.province_id, "northern");
        assert_eq!(sector.district_id, "burera");
        assert!(catalog.all_districts().all(|d| !d.province_id.is_empty()));
    }

    #[test]
    fn test_find_sector_iff_child_of_parents() {
        let catalog = catalog();
        for province in catalog.list_provinces() {
            for district in &province.districts {
                for sector in &district.sectors {
                    assert!(catalog
                        .find_sector(&province.id, &district.id, &sector.id)
                        .is_some());
                }
            }
        }

        // Every (province, district, sector) triple with a real leaf id but a
        // wrong ancestor must miss.
        for province in catalog.list_provinces() {
            for district in catalog.all_districts() {
                for sector in catalog.all_sectors() {
                    let is_child = district.province_id == province.id
                        && district.find_sector(&sector.id).is_some();
                    assert_eq!(
                        catalog
                            .find_sector(&province.id, &district.id, &sector.id)
                            .is_some(),
                        is_child,
                        "{}/{}/{}",
                        province.id,
                        district.id,
                        sector.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_leaf_id_under_different_parents() {
        let catalog = catalog();
        // "gikondo" exists in three Kigali districts
        assert!(catalog.find_sector("kigali", "nyarugenge", "gikondo").is_some());
        assert!(catalog.find_sector("kigali", "gasabo", "gikondo").is_some());
        assert!(catalog.find_sector("kigali", "kicukiro", "gikondo").is_some());
        assert!(catalog.find_sector("northern", "nyarugenge", "gikondo").is_none());
        // "ngoma" exists in both northern/rulindo and southern/nyaruguru
        assert!(catalog.find_sector("northern", "rulindo", "ngoma").is_some());
        assert!(catalog.find_sector("southern", "nyaruguru", "ngoma").is_some());
        assert!(catalog.find_sector("southern", "rulindo", "ngoma").is_none());
    }

    #[test]
    fn test_missing_segments_are_absent_not_errors() {
        let catalog = catalog();
        assert!(catalog.find_province("eastern").is_none());
        assert!(catalog.list_districts("eastern").is_empty());
        assert!(catalog.list_districts("").is_empty());
        assert!(catalog.find_district("northern", "nyarugenge").is_none());
        assert!(catalog.list_sectors("northern", "nyarugenge").is_empty());
        assert!(catalog.list_sectors("eastern", "burera").is_empty());
        assert_eq!(catalog.list_sectors("northern", "burera").len(), 16);
    }

    #[test]
    fn test_contains_path() {
        let catalog = catalog();
        assert!(catalog.contains(&JurisdictionPath::province("southern")));
        assert!(catalog.contains(&JurisdictionPath::district("southern", "nyamagabe")));
        assert!(!catalog.contains(&JurisdictionPath::district("kigali", "nyamagabe")));
        assert!(catalog.contains(&JurisdictionPath::sector("kigali", "gasabo", "remera")));
        assert!(!catalog.contains(&JurisdictionPath::sector("kigali", "nyarugenge", "remera")));
    }

    #[test]
    fn test_resolve_names() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve(&JurisdictionPath::province("kigali")),
            Some("Kigali City")
        );
        assert_eq!(
            catalog.resolve(&JurisdictionPath::district("kigali", "nyarugenge")),
            Some("Nyarugenge District")
        );
        assert_eq!(
            catalog.resolve(&JurisdictionPath::sector("kigali", "nyarugenge", "gikondo")),
            Some("Gikondo")
        );
        assert_eq!(catalog.resolve(&JurisdictionPath::province("eastern")), None);
    }

    #[test]
    fn test_rejects_duplicate_siblings() {
        let raw = r#"{"provinces": [{"id": "kigali", "name": "Kigali", "districts": [
            {"id": "gasabo", "name": "Gasabo", "sectors": [
                {"id": "remera", "name": "Remera"},
                {"id": "remera", "name": "Remera"}
            ]}
        ]}]}"#;

        let err = GeographyCatalog::from_json(raw).unwrap_err();
        assert!(matches!(err, AppError::Catalog(msg) if msg.contains("duplicate sector id 'remera'")));
    }

    #[test]
    fn test_rejects_separator_in_id() {
        let raw = r#"{"provinces": [{"id": "kigali-city", "name": "Kigali"}]}"#;

        let err = GeographyCatalog::from_json(raw).unwrap_err();
        assert!(matches!(err, AppError::Catalog(msg) if msg.contains("invalid province id")));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GeographyCatalog::from_json("{\"provinces\": 3}").unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn test_same_leaf_id_in_different_parents_is_allowed() {
        let raw = r#"{"provinces": [
            {"id": "a", "name": "A", "districts": [{"id": "x", "name": "X"}]},
            {"id": "b", "name": "B", "districts": [{"id": "x", "name": "X"}]}
        ]}"#;

        let catalog = GeographyCatalog::from_json(raw).unwrap();
        assert_eq!(catalog.find_district("a", "x").unwrap().province_id, "a");
        assert_eq!(catalog.find_district("b", "x").unwrap().province_id, "b");
    }
}
