use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::Serialize;

use crate::core::config::Config;
use crate::core::error::{AppError, Result};
use crate::features::access::{
    accessible_jurisdictions, guard, AccessDecision, AccessRequest, AccessibleJurisdictions,
    DenyReason,
};
use crate::features::admins::dtos::RegisterAdministratorDto;
use crate::features::admins::models::{
    AdminId, AdminLevel, AdminStatus, Administrator, Jurisdiction, ReplacementKey,
};
use crate::features::admins::services::admin_directory::{AdminDirectory, LevelCount};
use crate::features::admins::services::registration::{build_administrator, validate_registration};
use crate::features::geography::{GeographyCatalog, NodeKind};

/// Owns the admin directory and the geography catalog and exposes the
/// operations the portal calls into.
///
/// Every directory mutation holds the write lock for its whole
/// read-modify-write, so concurrent registrations for the same seat resolve
/// as last-write-wins.
pub struct AdminHierarchyService {
    catalog: Arc<GeographyCatalog>,
    directory: RwLock<AdminDirectory>,
}

/// Filled seats against catalog size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub assigned: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyStats {
    pub national: LevelCount,
    pub provincial: LevelCount,
    pub district: LevelCount,
    pub sector: LevelCount,
    pub province_coverage: Coverage,
    pub district_coverage: Coverage,
    pub sector_coverage: Coverage,
}

impl HierarchyStats {
    pub fn level(&self, level: AdminLevel) -> LevelCount {
        match level {
            AdminLevel::National => self.national,
            AdminLevel::Provincial => self.provincial,
            AdminLevel::District => self.district,
            AdminLevel::Sector => self.sector,
        }
    }
}

impl AdminHierarchyService {
    pub fn new(catalog: Arc<GeographyCatalog>, replacement_key: ReplacementKey) -> Self {
        Self {
            catalog,
            directory: RwLock::new(AdminDirectory::new(replacement_key)),
        }
    }

    /// Loads the catalog named by the config (or the embedded one) and
    /// seeds demo administrators when asked to.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => GeographyCatalog::from_path(path)?,
            None => GeographyCatalog::embedded()?,
        };

        let service = Self::new(Arc::new(catalog), config.directory.replacement_key);
        if config.directory.seed_demo_admins {
            service.seed_demo_data()?;
        }
        Ok(service)
    }

    pub fn catalog(&self) -> &GeographyCatalog {
        &self.catalog
    }

    // ==================== Access ====================

    /// Allow/deny for `target_id` of type `kind` (`"kigali-nyarugenge"` for a district).
    pub fn evaluate_access(
        &self,
        admin: Option<&Administrator>,
        kind: NodeKind,
        target_id: &str,
    ) -> AccessDecision {
        self.guard(admin, &AccessRequest::raw_target(kind, target_id))
    }

    /// Runs the route guard against the directory's current record for the
    /// presented identity. An identity whose record was removed, or whose
    /// seat now belongs to someone else, is denied as revoked; a suspension
    /// applies to identities issued before it.
    pub fn guard(&self, admin: Option<&Administrator>, request: &AccessRequest) -> AccessDecision {
        let current = match admin {
            None => None,
            Some(presented) => {
                let stored = self
                    .read()
                    .find(presented.level(), &presented.id)
                    .filter(|r| r.jurisdiction == presented.jurisdiction)
                    .cloned();
                if stored.is_none() {
                    tracing::debug!(
                        "Access denied for {}: {}",
                        presented.id,
                        DenyReason::Revoked
                    );
                    return AccessDecision::Deny(DenyReason::Revoked);
                }
                stored
            }
        };

        let decision = guard(current.as_ref(), request);
        if let AccessDecision::Deny(reason) = decision {
            tracing::debug!(
                "Access denied for {}: {}",
                current
                    .as_ref()
                    .map(|a| a.id.as_str())
                    .unwrap_or("<anonymous>"),
                reason
            );
        }
        decision
    }

    pub fn accessible_jurisdictions(
        &self,
        admin: Option<&Administrator>,
    ) -> AccessibleJurisdictions<'_> {
        accessible_jurisdictions(&self.catalog, admin.map(|a| &a.jurisdiction))
    }

    // ==================== Lifecycle ====================

    /// Validates the form and stores the new administrator.
    ///
    /// On any field error nothing is stored and `AppError::Validation`
    /// carries the full field → message mapping.
    pub fn register_administrator(&self, dto: &RegisterAdministratorDto) -> Result<Administrator> {
        let jurisdiction =
            validate_registration(dto, &self.catalog).map_err(AppError::Validation)?;
        let admin = build_administrator(dto, jurisdiction);

        let replaced = self.write().upsert(admin.clone());
        match replaced {
            Some(previous) => tracing::info!(
                "Registered {} administrator {} for {}, replacing {}",
                admin.level(),
                admin.id,
                admin.jurisdiction,
                previous.id
            ),
            None => tracing::info!(
                "Registered {} administrator {} for {}",
                admin.level(),
                admin.id,
                admin.jurisdiction
            ),
        }

        Ok(admin)
    }

    pub fn remove_administrator(&self, level: AdminLevel, id: &AdminId) -> Option<Administrator> {
        let removed = self.write().remove(level, id);
        if removed.is_some() {
            tracing::info!("Removed {} administrator {}", level, id);
        }
        removed
    }

    pub fn toggle_suspension(&self, level: AdminLevel, id: &AdminId) -> Option<AdminStatus> {
        let status = self.write().toggle_suspension(level, id);
        if let Some(status) = status {
            tracing::info!("{} administrator {} is now {}", level, id, status);
        }
        status
    }

    pub fn set_status(&self, level: AdminLevel, id: &AdminId, status: AdminStatus) -> bool {
        let found = self.write().set_status(level, id, status);
        if found {
            tracing::info!("{} administrator {} set to {}", level, id, status);
        }
        found
    }

    /// Removes every administrator at every level.
    pub fn clear_all(&self) {
        self.write().clear();
        tracing::info!("Cleared admin directory");
    }

    /// Seeds the portal's demo administrators (national, Kigali, Nyarugenge).
    pub fn seed_demo_data(&self) -> Result<()> {
        let now = Utc::now();
        let demo = |id: &str, name: &str, email: &str, phone: &str, jurisdiction| Administrator {
            id: AdminId::from(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            jurisdiction,
            status: AdminStatus::Active,
            created_at: now,
        };

        let mut directory = self.write();
        directory.set_national_admin(demo(
            "admin-national-001",
            "Jean Baptiste Nsengiyumva",
            "admin@rra.gov.rw",
            "+250788123456",
            Jurisdiction::National,
        ))?;
        directory.upsert_provincial_admin(demo(
            "admin-province-001",
            "Marie Uwimana",
            "kigali@rra.gov.rw",
            "+250788123457",
            Jurisdiction::provincial("kigali"),
        ))?;
        directory.upsert_district_admin(demo(
            "admin-district-001",
            "Eric Mugisha",
            "nyarugenge@rra.gov.rw",
            "+250788123458",
            Jurisdiction::district("kigali", "nyarugenge"),
        ))?;

        tracing::info!("Seeded demo administrators");
        Ok(())
    }

    // ==================== Queries ====================

    pub fn list_administrators(&self, level: AdminLevel) -> Vec<Administrator> {
        self.read().list_by_level(level).to_vec()
    }

    pub fn find_administrator(&self, level: AdminLevel, id: &AdminId) -> Option<Administrator> {
        self.read().find(level, id).cloned()
    }

    /// Like [`Self::find_administrator`] but absence is an error, for callers
    /// that need the record to exist.
    pub fn get_administrator(&self, level: AdminLevel, id: &AdminId) -> Result<Administrator> {
        self.find_administrator(level, id).ok_or_else(|| {
            AppError::NotFound(format!("{} administrator '{}' not found", level, id))
        })
    }

    pub fn find_by_jurisdiction(&self, jurisdiction: &Jurisdiction) -> Option<Administrator> {
        self.read().find_by_jurisdiction(jurisdiction).cloned()
    }

    pub fn search(&self, query: &str) -> Vec<Administrator> {
        self.read().search(query).into_iter().cloned().collect()
    }

    pub fn stats(&self) -> HierarchyStats {
        let directory = self.read();
        let count = |level| directory.count(level);

        HierarchyStats {
            national: count(AdminLevel::National),
            provincial: count(AdminLevel::Provincial),
            district: count(AdminLevel::District),
            sector: count(AdminLevel::Sector),
            province_coverage: Coverage {
                assigned: count(AdminLevel::Provincial).total,
                total: self.catalog.province_count(),
            },
            district_coverage: Coverage {
                assigned: count(AdminLevel::District).total,
                total: self.catalog.district_count(),
            },
            sector_coverage: Coverage {
                assigned: count(AdminLevel::Sector).total,
                total: self.catalog.sector_count(),
            },
        }
    }

    // Every critical section leaves the directory consistent, so a poisoned
    // lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, AdminDirectory> {
        self.directory.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AdminDirectory> {
        self.directory.write().unwrap_or_else(PoisonError::into_inner)
    }
}
