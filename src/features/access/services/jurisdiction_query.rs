use serde::Serialize;

use crate::features::admins::models::Jurisdiction;
use crate::features::geography::{District, GeographyCatalog, Province, Sector};

/// Nodes an administrator may operate on, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccessibleJurisdictions<'a> {
    pub provinces: Vec<&'a Province>,
    pub districts: Vec<&'a District>,
    pub sectors: Vec<&'a Sector>,
}

impl AccessibleJurisdictions<'_> {
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty() && self.districts.is_empty() && self.sectors.is_empty()
    }
}

/// Walks the catalog down from the administrator's anchor.
///
/// A district administrator gets no province entry since they do not hold
/// the whole province. An anchor that does not resolve yields nothing.
pub fn accessible_jurisdictions<'a>(
    catalog: &'a GeographyCatalog,
    scope: Option<&Jurisdiction>,
) -> AccessibleJurisdictions<'a> {
    let Some(scope) = scope else {
        return AccessibleJurisdictions::default();
    };

    let found = match scope {
        Jurisdiction::National => Some(AccessibleJurisdictions {
            provinces: catalog.list_provinces().iter().collect(),
            districts: catalog.all_districts().collect(),
            sectors: catalog.all_sectors().collect(),
        }),
        Jurisdiction::Provincial { province_id } => {
            catalog
                .find_province(province_id)
                .map(|province| AccessibleJurisdictions {
                    provinces: vec![province],
                    districts: province.districts.iter().collect(),
                    sectors: province
                        .districts
                        .iter()
                        .flat_map(|d| d.sectors.iter())
                        .collect(),
                })
        }
        Jurisdiction::District {
            province_id,
            district_id,
        } => catalog
            .find_district(province_id, district_id)
            .map(|district| AccessibleJurisdictions {
                provinces: Vec::new(),
                districts: vec![district],
                sectors: district.sectors.iter().collect(),
            }),
        Jurisdiction::Sector {
            province_id,
            district_id,
            sector_id,
        } => catalog
            .find_sector(province_id, district_id, sector_id)
            .map(|sector| AccessibleJurisdictions {
                provinces: Vec::new(),
                districts: Vec::new(),
                sectors: vec![sector],
            }),
    };

    found.unwrap_or_else(|| {
        tracing::warn!("Jurisdiction {} does not resolve in the catalog", scope);
        AccessibleJurisdictions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> GeographyCatalog {
        GeographyCatalog::embedded().unwrap()
    }

    #[test]
    fn test_national_sees_entire_catalog() {
        let catalog = catalog();
        let access = accessible_jurisdictions(&catalog, Some(&Jurisdiction::National));

        assert_eq!(access.provinces.len(), catalog.province_count());
        assert_eq!(access.districts.len(), catalog.district_count());
        assert_eq!(access.sectors.len(), catalog.sector_count());
        assert_eq!(access.sectors.len(), 142);
    }

    #[test]
    fn test_provincial_sees_province_subtree() {
        let catalog = catalog();
        let access =
            accessible_jurisdictions(&catalog, Some(&Jurisdiction::provincial("northern")));

        assert_eq!(access.provinces.len(), 1);
        assert_eq!(access.provinces[0].id, "northern");
        assert_eq!(access.districts.len(), 5);
        assert!(access.districts.iter().all(|d| d.province_id == "northern"));
        assert_eq!(access.sectors.len(), 16 + 19 + 18 + 9 + 13);
        assert!(access.sectors.iter().all(|s| s.province_id == "northern"));
    }

    #[test]
    fn test_district_sees_district_and_sectors_but_no_province() {
        let catalog = catalog();
        let access = accessible_jurisdictions(
            &catalog,
            Some(&Jurisdiction::district("kigali", "nyarugenge")),
        );

        assert!(access.provinces.is_empty());
        assert_eq!(access.districts.len(), 1);
        assert_eq!(access.districts[0].id, "nyarugenge");
        assert_eq!(access.sectors.len(), 10);
        assert!(access.sectors.iter().all(|s| s.district_id == "nyarugenge"));
    }

    #[test]
    fn test_sector_sees_exactly_one_sector() {
        let catalog = catalog();
        let access = accessible_jurisdictions(
            &catalog,
            Some(&Jurisdiction::sector("kigali", "gasabo", "gikondo")),
        );

        assert!(access.provinces.is_empty());
        assert!(access.districts.is_empty());
        assert_eq!(access.sectors.len(), 1);
        assert_eq!(access.sectors[0].id, "gikondo");
        assert_eq!(access.sectors[0].district_id, "gasabo");
    }

    #[test]
    fn test_stale_anchor_yields_nothing() {
        let catalog = catalog();

        for scope in [
            Jurisdiction::provincial("eastern"),
            Jurisdiction::district("northern", "nyarugenge"),
            Jurisdiction::sector("kigali", "nyarugenge", "remera"),
        ] {
            assert!(accessible_jurisdictions(&catalog, Some(&scope)).is_empty());
        }
        assert!(accessible_jurisdictions(&catalog, None).is_empty());
    }
}
