//! Core of the SmartTax administrator portal: the Rwandan geography catalog,
//! the four-level administrator directory and jurisdiction-scoped access
//! control.

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::config::Config;
pub use crate::core::error::{AppError, FieldErrors, Result};
pub use crate::features::access::{AccessDecision, AccessRequest, DenyReason};
pub use crate::features::admins::AdminHierarchyService;
