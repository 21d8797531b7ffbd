mod decision;

pub use decision::{AccessDecision, AccessRequest, AccessTarget, DenyReason};
