//! Jurisdiction-scoped access control.
//!
//! - [`services::can_access`]: pure seat-vs-target decision table
//! - [`services::accessible_jurisdictions`]: subtree an administrator may operate on
//! - [`guards::guard`]: status, level rank and jurisdiction checks for route guards

pub mod guards;
pub mod models;
pub mod services;

pub use guards::guard;
pub use models::{AccessDecision, AccessRequest, AccessTarget, DenyReason};
pub use services::{accessible_jurisdictions, can_access, can_access_path, AccessibleJurisdictions};
