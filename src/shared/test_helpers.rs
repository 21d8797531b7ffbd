#[cfg(test)]
use chrono::Utc;

#[cfg(test)]
use fake::faker::internet::en::SafeEmail;
#[cfg(test)]
use fake::faker::name::en::Name;
#[cfg(test)]
use fake::Fake;

#[cfg(test)]
use crate::features::admins::dtos::RegisterAdministratorDto;
#[cfg(test)]
use crate::features::admins::models::{AdminId, AdminLevel, AdminStatus, Administrator, Jurisdiction};

/// Active administrator with fixed contact details at `jurisdiction`
#[cfg(test)]
pub fn admin_at(id: &str, jurisdiction: Jurisdiction) -> Administrator {
    Administrator {
        id: AdminId::from(id),
        name: format!("Admin {}", id),
        email: format!("{}@rra.gov.rw", id),
        phone: "+250788000000".to_string(),
        jurisdiction,
        status: AdminStatus::Active,
        created_at: Utc::now(),
    }
}

/// Valid contact details with the given jurisdiction fields
#[cfg(test)]
pub fn registration(
    level: AdminLevel,
    province_id: Option<&str>,
    district_id: Option<&str>,
    sector_id: Option<&str>,
) -> RegisterAdministratorDto {
    RegisterAdministratorDto {
        name: "Marie Uwimana".to_string(),
        email: "marie@rra.gov.rw".to_string(),
        phone: "+250788123457".to_string(),
        level,
        province_id: province_id.map(str::to_string),
        district_id: district_id.map(str::to_string),
        sector_id: sector_id.map(str::to_string),
    }
}

/// Random but valid registration anchored in Kigali / Nyarugenge / Nyabugogo
#[cfg(test)]
pub fn fake_registration(level: AdminLevel) -> RegisterAdministratorDto {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let subscriber: u32 = (700_000_000u32..800_000_000u32).fake();

    let (province_id, district_id, sector_id) = match level {
        AdminLevel::National => (None, None, None),
        AdminLevel::Provincial => (Some("kigali"), None, None),
        AdminLevel::District => (Some("kigali"), Some("nyarugenge"), None),
        AdminLevel::Sector => (Some("kigali"), Some("nyarugenge"), Some("nyabugogo")),
    };

    RegisterAdministratorDto {
        phone: format!("+250{}", subscriber),
        name,
        email,
        ..registration(level, province_id, district_id, sector_id)
    }
}
