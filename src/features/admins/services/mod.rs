mod admin_directory;
mod hierarchy_service;
mod registration;

pub use admin_directory::{AdminDirectory, LevelCount};
pub use hierarchy_service::{AdminHierarchyService, Coverage, HierarchyStats};
pub use registration::{
    build_administrator, validate_registration, FIELD_DISTRICT, FIELD_PROVINCE, FIELD_SECTOR,
};
