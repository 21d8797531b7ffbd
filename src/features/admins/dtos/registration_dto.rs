use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::features::admins::models::AdminLevel;
use crate::shared::validation::{normalize_phone, EMAIL_REGEX, PHONE_REGEX};

/// Request DTO for registering an administrator
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAdministratorDto {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    /// Whitespace is ignored: "+250 788 123 456" is accepted
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    pub level: AdminLevel,

    /// Required for provincial, district and sector administrators
    #[serde(default)]
    pub province_id: Option<String>,

    /// Required for district and sector administrators
    #[serde(default)]
    pub district_id: Option<String>,

    /// Required for sector administrators
    #[serde(default)]
    pub sector_id: Option<String>,
}

impl RegisterAdministratorDto {
    pub fn province_id(&self) -> Option<&str> {
        present(&self.province_id)
    }

    pub fn district_id(&self) -> Option<&str> {
        present(&self.district_id)
    }

    pub fn sector_id(&self) -> Option<&str> {
        present(&self.sector_id)
    }
}

/// Trimmed value, or `None` when missing or blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(error("required", "Name is required"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(error("required", "Email is required"));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(error("invalid", "Email is invalid"));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(error("required", "Phone is required"));
    }
    if !PHONE_REGEX.is_match(&normalize_phone(phone)) {
        return Err(error(
            "invalid",
            "Phone must be in format +250 XXX XXX XXX",
        ));
    }
    Ok(())
}
