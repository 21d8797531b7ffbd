use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::features::admins::models::{
    AdminId, AdminLevel, AdminStatus, Administrator, Jurisdiction, ReplacementKey,
};

/// Current administrators at every level.
///
/// At most one national administrator; at most one record per jurisdiction
/// seat (as judged by the [`ReplacementKey`]) at the other levels. All
/// mutation goes through the methods below so the seat rule cannot be
/// bypassed.
#[derive(Debug, Clone, Default)]
pub struct AdminDirectory {
    replacement_key: ReplacementKey,
    national: Option<Administrator>,
    provincial: Vec<Administrator>,
    district: Vec<Administrator>,
    sector: Vec<Administrator>,
}

/// Per-level head counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelCount {
    pub total: usize,
    pub suspended: usize,
}

impl AdminDirectory {
    pub fn new(replacement_key: ReplacementKey) -> Self {
        Self {
            replacement_key,
            ..Self::default()
        }
    }

    pub fn replacement_key(&self) -> ReplacementKey {
        self.replacement_key
    }

    // ==================== Insert / Replace ====================

    /// Puts `admin` into the national slot, returning the previous holder.
    pub fn set_national_admin(&mut self, admin: Administrator) -> Result<Option<Administrator>> {
        expect_level(AdminLevel::National, &admin)?;
        Ok(self.national.replace(admin))
    }

    pub fn upsert_provincial_admin(
        &mut self,
        admin: Administrator,
    ) -> Result<Option<Administrator>> {
        expect_level(AdminLevel::Provincial, &admin)?;
        Ok(self.upsert(admin))
    }

    pub fn upsert_district_admin(&mut self, admin: Administrator) -> Result<Option<Administrator>> {
        expect_level(AdminLevel::District, &admin)?;
        Ok(self.upsert(admin))
    }

    pub fn upsert_sector_admin(&mut self, admin: Administrator) -> Result<Option<Administrator>> {
        expect_level(AdminLevel::Sector, &admin)?;
        Ok(self.upsert(admin))
    }

    /// Inserts `admin` into the store for its level, replacing the record
    /// holding the same seat. The new record goes to the end of the list.
    /// Returns the replaced record, if any.
    pub fn upsert(&mut self, admin: Administrator) -> Option<Administrator> {
        let key = self.replacement_key;
        let store = match admin.level() {
            AdminLevel::National => return self.national.replace(admin),
            AdminLevel::Provincial => &mut self.provincial,
            AdminLevel::District => &mut self.district,
            AdminLevel::Sector => &mut self.sector,
        };

        let replaced = store
            .iter()
            .position(|a| key.same_seat(&a.jurisdiction, &admin.jurisdiction))
            .map(|idx| store.remove(idx));
        store.push(admin);
        replaced
    }

    // ==================== Remove / Status ====================

    /// Deletes the record with `id` at `level`. No-op when absent.
    pub fn remove(&mut self, level: AdminLevel, id: &AdminId) -> Option<Administrator> {
        match level {
            AdminLevel::National => {
                if self.national.as_ref().is_some_and(|a| &a.id == id) {
                    self.national.take()
                } else {
                    None
                }
            }
            _ => {
                let store = self.store_mut(level)?;
                let idx = store.iter().position(|a| &a.id == id)?;
                Some(store.remove(idx))
            }
        }
    }

    /// Sets the status of the record with `id` at `level`.
    /// Returns whether a record was found; setting the current status again is a no-op.
    pub fn set_status(&mut self, level: AdminLevel, id: &AdminId, status: AdminStatus) -> bool {
        match self.find_mut(level, id) {
            Some(admin) => {
                admin.status = status;
                true
            }
            None => false,
        }
    }

    /// Flips active ↔ suspended and returns the new status. No-op when absent.
    pub fn toggle_suspension(&mut self, level: AdminLevel, id: &AdminId) -> Option<AdminStatus> {
        let admin = self.find_mut(level, id)?;
        admin.status = admin.status.toggled();
        Some(admin.status)
    }

    /// Empties every level.
    pub fn clear(&mut self) {
        self.national = None;
        self.provincial.clear();
        self.district.clear();
        self.sector.clear();
    }

    // ==================== Queries ====================

    /// Current records at `level`; the national level yields zero or one.
    pub fn list_by_level(&self, level: AdminLevel) -> &[Administrator] {
        match level {
            AdminLevel::National => self.national.as_slice(),
            AdminLevel::Provincial => &self.provincial,
            AdminLevel::District => &self.district,
            AdminLevel::Sector => &self.sector,
        }
    }

    pub fn national_admin(&self) -> Option<&Administrator> {
        self.national.as_ref()
    }

    pub fn find(&self, level: AdminLevel, id: &AdminId) -> Option<&Administrator> {
        self.list_by_level(level).iter().find(|a| &a.id == id)
    }

    /// Looks a record up by id across every level.
    pub fn find_any(&self, id: &AdminId) -> Option<&Administrator> {
        AdminLevel::ALL
            .into_iter()
            .find_map(|level| self.find(level, id))
    }

    /// The record holding `jurisdiction`'s seat, judged by the replacement key.
    pub fn find_by_jurisdiction(&self, jurisdiction: &Jurisdiction) -> Option<&Administrator> {
        self.list_by_level(jurisdiction.level())
            .iter()
            .find(|a| self.replacement_key.same_seat(&a.jurisdiction, jurisdiction))
    }

    /// Records at every level matching `query`, national first.
    pub fn search(&self, query: &str) -> Vec<&Administrator> {
        AdminLevel::ALL
            .into_iter()
            .flat_map(|level| self.list_by_level(level))
            .filter(|a| a.matches(query))
            .collect()
    }

    pub fn count(&self, level: AdminLevel) -> LevelCount {
        let admins = self.list_by_level(level);
        LevelCount {
            total: admins.len(),
            suspended: admins.iter().filter(|a| !a.is_active()).count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        AdminLevel::ALL
            .into_iter()
            .all(|level| self.list_by_level(level).is_empty())
    }

    /// Collection backing `level`; `None` for the national slot.
    fn store_mut(&mut self, level: AdminLevel) -> Option<&mut Vec<Administrator>> {
        match level {
            AdminLevel::National => None,
            AdminLevel::Provincial => Some(&mut self.provincial),
            AdminLevel::District => Some(&mut self.district),
            AdminLevel::Sector => Some(&mut self.sector),
        }
    }

    fn find_mut(&mut self, level: AdminLevel, id: &AdminId) -> Option<&mut Administrator> {
        match level {
            AdminLevel::National => self.national.as_mut().filter(|a| &a.id == id),
            _ => self.store_mut(level)?.iter_mut().find(|a| &a.id == id),
        }
    }
}

fn expect_level(expected: AdminLevel, admin: &Administrator) -> Result<()> {
    let actual = admin.level();
    if actual != expected {
        return Err(AppError::LevelMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::admin_at;

    #[test]
    fn test_national_slot_is_a_singleton() {
        let mut dir = AdminDirectory::default();
        let first = admin_at("n1", Jurisdiction::National);
        let second = admin_at("n2", Jurisdiction::National);

        assert!(dir.set_national_admin(first).unwrap().is_none());
        let replaced = dir.set_national_admin(second).unwrap();

        assert_eq!(replaced.map(|a| a.id), Some(AdminId::from("n1")));
        let national = dir.list_by_level(AdminLevel::National);
        assert_eq!(national.len(), 1);
        assert_eq!(national[0].id, AdminId::from("n2"));
    }

    #[test]
    fn test_vacant_national_lists_empty() {
        let dir = AdminDirectory::default();
        assert!(dir.list_by_level(AdminLevel::National).is_empty());
        assert!(dir.national_admin().is_none());
        assert!(dir.is_empty());
    }

    #[test]
    fn test_second_provincial_admin_replaces_first() {
        let mut dir = AdminDirectory::default();
        dir.upsert_provincial_admin(admin_at("p1", Jurisdiction::provincial("kigali")))
            .unwrap();
        dir.upsert_provincial_admin(admin_at("p2", Jurisdiction::provincial("northern")))
            .unwrap();
        let replaced = dir
            .upsert_provincial_admin(admin_at("p3", Jurisdiction::provincial("kigali")))
            .unwrap();

        assert_eq!(replaced.map(|a| a.id), Some(AdminId::from("p1")));

        let provincial = dir.list_by_level(AdminLevel::Provincial);
        let kigali: Vec<_> = provincial
            .iter()
            .filter(|a| a.jurisdiction.province_id() == Some("kigali"))
            .collect();
        assert_eq!(kigali.len(), 1);
        assert_eq!(kigali[0].id, AdminId::from("p3"));

        // Replacement lands at the insertion position
        let ids: Vec<_> = provincial.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3"]);
    }

    #[test]
    fn test_level_mismatch_is_rejected() {
        let mut dir = AdminDirectory::default();
        let err = dir
            .upsert_district_admin(admin_at("p1", Jurisdiction::provincial("kigali")))
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::LevelMismatch {
                expected: AdminLevel::District,
                actual: AdminLevel::Provincial
            }
        ));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_leaf_key_replaces_same_named_sector_in_other_district() {
        let mut dir = AdminDirectory::new(ReplacementKey::Leaf);
        dir.upsert_sector_admin(admin_at(
            "s1",
            Jurisdiction::sector("kigali", "nyarugenge", "gikondo"),
        ))
        .unwrap();
        let replaced = dir
            .upsert_sector_admin(admin_at(
                "s2",
                Jurisdiction::sector("kigali", "gasabo", "gikondo"),
            ))
            .unwrap();

        assert_eq!(replaced.map(|a| a.id), Some(AdminId::from("s1")));
        assert_eq!(dir.list_by_level(AdminLevel::Sector).len(), 1);
    }

    #[test]
    fn test_path_key_keeps_same_named_sectors_apart() {
        let mut dir = AdminDirectory::new(ReplacementKey::Path);
        dir.upsert_sector_admin(admin_at(
            "s1",
            Jurisdiction::sector("kigali", "nyarugenge", "gikondo"),
        ))
        .unwrap();
        let replaced = dir
            .upsert_sector_admin(admin_at(
                "s2",
                Jurisdiction::sector("kigali", "gasabo", "gikondo"),
            ))
            .unwrap();

        assert!(replaced.is_none());
        assert_eq!(dir.list_by_level(AdminLevel::Sector).len(), 2);

        let replaced = dir
            .upsert_sector_admin(admin_at(
                "s3",
                Jurisdiction::sector("kigali", "gasabo", "gikondo"),
            ))
            .unwrap();
        assert_eq!(replaced.map(|a| a.id), Some(AdminId::from("s2")));
    }

    #[test]
    fn test_path_key_keeps_same_named_districts_apart() {
        let mut dir = AdminDirectory::new(ReplacementKey::Path);
        dir.upsert(admin_at("d1", Jurisdiction::district("kigali", "nyarugenge")));
        dir.upsert(admin_at("d2", Jurisdiction::district("northern", "nyarugenge")));
        assert_eq!(dir.list_by_level(AdminLevel::District).len(), 2);

        let mut leaf = AdminDirectory::new(ReplacementKey::Leaf);
        leaf.upsert(admin_at("d1", Jurisdiction::district("kigali", "nyarugenge")));
        leaf.upsert(admin_at("d2", Jurisdiction::district("northern", "nyarugenge")));
        assert_eq!(leaf.list_by_level(AdminLevel::District).len(), 1);
    }

    #[test]
    fn test_remove_by_level_and_id() {
        let mut dir = AdminDirectory::default();
        dir.upsert(admin_at("p1", Jurisdiction::provincial("kigali")));
        dir.upsert(admin_at("d1", Jurisdiction::district("kigali", "nyarugenge")));

        // Wrong level is a no-op
        assert!(dir.remove(AdminLevel::District, &AdminId::from("p1")).is_none());
        assert!(dir.remove(AdminLevel::Provincial, &AdminId::from("missing")).is_none());

        let removed = dir.remove(AdminLevel::Provincial, &AdminId::from("p1"));
        assert_eq!(removed.map(|a| a.id), Some(AdminId::from("p1")));
        assert!(dir.list_by_level(AdminLevel::Provincial).is_empty());

        // No cascade to the district below
        assert_eq!(dir.list_by_level(AdminLevel::District).len(), 1);
    }

    #[test]
    fn test_remove_national_requires_matching_id() {
        let mut dir = AdminDirectory::default();
        dir.upsert(admin_at("n1", Jurisdiction::National));

        assert!(dir.remove(AdminLevel::National, &AdminId::from("n2")).is_none());
        assert!(dir.national_admin().is_some());
        assert!(dir.remove(AdminLevel::National, &AdminId::from("n1")).is_some());
        assert!(dir.national_admin().is_none());
    }

    #[test]
    fn test_set_status_is_idempotent() {
        let mut dir = AdminDirectory::default();
        let id = AdminId::from("d1");
        dir.upsert(admin_at("d1", Jurisdiction::district("kigali", "nyarugenge")));

        assert!(dir.set_status(AdminLevel::District, &id, AdminStatus::Suspended));
        assert!(dir.set_status(AdminLevel::District, &id, AdminStatus::Suspended));
        assert_eq!(
            dir.find(AdminLevel::District, &id).map(|a| a.status),
            Some(AdminStatus::Suspended)
        );
        assert!(!dir.set_status(AdminLevel::Sector, &id, AdminStatus::Active));
    }

    #[test]
    fn test_toggle_twice_restores_status_and_keeps_record() {
        let mut dir = AdminDirectory::default();
        let id = AdminId::from("s1");
        dir.upsert(admin_at("s1", Jurisdiction::sector("kigali", "nyarugenge", "nyabugogo")));
        let original = dir.find(AdminLevel::Sector, &id).cloned().unwrap();

        assert_eq!(
            dir.toggle_suspension(AdminLevel::Sector, &id),
            Some(AdminStatus::Suspended)
        );
        let suspended = dir.find(AdminLevel::Sector, &id).cloned().unwrap();
        assert_eq!(suspended.id, original.id);
        assert_eq!(suspended.jurisdiction, original.jurisdiction);
        assert_eq!(suspended.created_at, original.created_at);
        assert_eq!(suspended.status, AdminStatus::Suspended);

        assert_eq!(
            dir.toggle_suspension(AdminLevel::Sector, &id),
            Some(AdminStatus::Active)
        );
        assert_eq!(dir.find(AdminLevel::Sector, &id), Some(&original));
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut dir = AdminDirectory::default();
        assert!(dir
            .toggle_suspension(AdminLevel::National, &AdminId::from("n1"))
            .is_none());
    }

    #[test]
    fn test_find_by_jurisdiction_and_search() {
        let mut dir = AdminDirectory::default();
        dir.upsert(admin_at("p1", Jurisdiction::provincial("kigali")));
        dir.upsert(admin_at("d1", Jurisdiction::district("kigali", "nyarugenge")));

        assert_eq!(
            dir.find_by_jurisdiction(&Jurisdiction::provincial("kigali"))
                .map(|a| a.id.as_str()),
            Some("p1")
        );
        assert!(dir
            .find_by_jurisdiction(&Jurisdiction::provincial("southern"))
            .is_none());
        assert_eq!(dir.find_any(&AdminId::from("d1")).map(|a| a.level()), Some(AdminLevel::District));

        assert_eq!(dir.search("kigali").len(), 2);
        assert_eq!(dir.search("nyarugenge").len(), 1);
        assert_eq!(dir.search("").len(), 2);
    }

    #[test]
    fn test_counts_and_clear() {
        let mut dir = AdminDirectory::default();
        dir.upsert(admin_at("d1", Jurisdiction::district("kigali", "nyarugenge")));
        dir.upsert(admin_at("d2", Jurisdiction::district("kigali", "gasabo")));
        dir.toggle_suspension(AdminLevel::District, &AdminId::from("d2"));

        assert_eq!(
            dir.count(AdminLevel::District),
            LevelCount {
                total: 2,
                suspended: 1
            }
        );

        dir.clear();
        assert!(dir.is_empty());
    }
}
