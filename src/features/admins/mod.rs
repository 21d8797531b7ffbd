//! Tax administrator hierarchy.
//!
//! Four levels, each seat anchored in the geography catalog:
//!
//! | Level | Seat | Capacity |
//! |-------|------|----------|
//! | National | whole country | one |
//! | Provincial | one province | one per province |
//! | District | one district | one per district |
//! | Sector | one sector | one per sector |
//!
//! Registering into an occupied seat replaces the previous holder. Removing an
//! administrator never touches the levels below.

pub mod dtos;
pub mod models;
pub mod services;

pub use models::{AdminId, AdminLevel, AdminStatus, Administrator, Jurisdiction, ReplacementKey};
pub use services::{AdminDirectory, AdminHierarchyService};
