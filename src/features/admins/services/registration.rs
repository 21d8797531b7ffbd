use chrono::Utc;
use validator::Validate;

use crate::core::error::FieldErrors;
use crate::features::admins::dtos::RegisterAdministratorDto;
use crate::features::admins::models::{
    AdminId, AdminLevel, AdminStatus, Administrator, Jurisdiction,
};
use crate::features::geography::GeographyCatalog;
use crate::shared::validation::normalize_phone;

/// Error keys match the form's serialized field names
pub const FIELD_PROVINCE: &str = "provinceId";
pub const FIELD_DISTRICT: &str = "districtId";
pub const FIELD_SECTOR: &str = "sectorId";

/// Checks every field of a registration and resolves the requested seat.
///
/// All violations are collected; the jurisdiction is only returned when the
/// mapping is empty.
pub fn validate_registration(
    dto: &RegisterAdministratorDto,
    catalog: &GeographyCatalog,
) -> Result<Jurisdiction, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Err(e) = dto.validate() {
        for (field, field_errors) in e.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                errors.add(field.to_string(), message);
            }
        }
    }

    let jurisdiction = required_jurisdiction(dto, &mut errors);
    if let Some(jurisdiction) = &jurisdiction {
        check_known(jurisdiction, catalog, &mut errors);
    }

    match jurisdiction {
        Some(jurisdiction) if errors.is_empty() => Ok(jurisdiction),
        _ => Err(errors),
    }
}

/// Builds the record for a validated registration: fresh id, active, created now.
pub fn build_administrator(
    dto: &RegisterAdministratorDto,
    jurisdiction: Jurisdiction,
) -> Administrator {
    Administrator {
        id: AdminId::generate(jurisdiction.level()),
        name: dto.name.trim().to_string(),
        email: dto.email.trim().to_string(),
        phone: normalize_phone(&dto.phone),
        jurisdiction,
        status: AdminStatus::Active,
        created_at: Utc::now(),
    }
}

fn required_jurisdiction(
    dto: &RegisterAdministratorDto,
    errors: &mut FieldErrors,
) -> Option<Jurisdiction> {
    if dto.level == AdminLevel::National {
        return Some(Jurisdiction::National);
    }

    let needs_district = matches!(dto.level, AdminLevel::District | AdminLevel::Sector);
    let needs_sector = dto.level == AdminLevel::Sector;

    let province = dto.province_id();
    let district = dto.district_id();
    let sector = dto.sector_id();

    if province.is_none() {
        errors.add(FIELD_PROVINCE, "Province is required");
    }
    if needs_district && district.is_none() {
        errors.add(FIELD_DISTRICT, "District is required");
    }
    if needs_sector && sector.is_none() {
        errors.add(FIELD_SECTOR, "Sector is required");
    }

    match dto.level {
        AdminLevel::National => Some(Jurisdiction::National),
        AdminLevel::Provincial => Some(Jurisdiction::provincial(province?)),
        AdminLevel::District => Some(Jurisdiction::district(province?, district?)),
        AdminLevel::Sector => Some(Jurisdiction::sector(province?, district?, sector?)),
    }
}

/// Flags the first path segment that does not resolve under its parent.
fn check_known(jurisdiction: &Jurisdiction, catalog: &GeographyCatalog, errors: &mut FieldErrors) {
    let Some(province_id) = jurisdiction.province_id() else {
        return;
    };
    if catalog.find_province(province_id).is_none() {
        errors.add(FIELD_PROVINCE, "Unknown province");
        return;
    }

    let Some(district_id) = jurisdiction.district_id() else {
        return;
    };
    if catalog.find_district(province_id, district_id).is_none() {
        errors.add(FIELD_DISTRICT, "Unknown district for the selected province");
        return;
    }

    if let Some(sector_id) = jurisdiction.sector_id() {
        if catalog
            .find_sector(province_id, district_id, sector_id)
            .is_none()
        {
            errors.add(FIELD_SECTOR, "Unknown sector for the selected district");
        }
    }
}
