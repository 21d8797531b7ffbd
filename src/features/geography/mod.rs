//! Rwandan administrative geography (province → district → sector).
//!
//! The catalog is a static, read-only fixture loaded once at startup. District
//! ids are unique only within their province and sector ids only within their
//! district, so every lookup takes the full ancestor path.
//!
//! | Level | Kinyarwanda | Parent |
//! |-------|-------------|--------|
//! | Province | Intara | - |
//! | District | Akarere | Province |
//! | Sector | Umurenge | District |

pub mod models;
pub mod services;

pub use models::{District, JurisdictionPath, NodeKind, Province, Sector};
pub use services::GeographyCatalog;
