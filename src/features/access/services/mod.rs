mod access_evaluator;
mod jurisdiction_query;

pub use access_evaluator::{can_access, can_access_path};
pub use jurisdiction_query::{accessible_jurisdictions, AccessibleJurisdictions};
