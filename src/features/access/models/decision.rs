use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::admins::models::AdminLevel;
use crate::features::geography::{JurisdictionPath, NodeKind};

/// What a route or action asks for before it runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    /// Minimum level; higher levels also pass
    pub required_level: Option<AdminLevel>,
    pub target: Option<AccessTarget>,
}

/// Target of a request, either already structured or in the joined route form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccessTarget {
    Path(JurisdictionPath),
    Raw {
        #[serde(rename = "type")]
        kind: NodeKind,
        id: String,
    },
}

impl AccessRequest {
    pub fn level(required_level: AdminLevel) -> Self {
        Self {
            required_level: Some(required_level),
            target: None,
        }
    }

    pub fn target(target: JurisdictionPath) -> Self {
        Self {
            required_level: None,
            target: Some(AccessTarget::Path(target)),
        }
    }

    /// Target given as `kind` plus a separator-joined id (`"kigali-nyarugenge"`)
    pub fn raw_target(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            required_level: None,
            target: Some(AccessTarget::Raw {
                kind,
                id: id.into(),
            }),
        }
    }

    pub fn with_level(mut self, required_level: AdminLevel) -> Self {
        self.required_level = Some(required_level);
        self
    }
}

impl AccessTarget {
    pub fn resolve(&self) -> Option<JurisdictionPath> {
        match self {
            AccessTarget::Path(path) => Some(path.clone()),
            AccessTarget::Raw { kind, id } => JurisdictionPath::parse(*kind, id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No administrator identity was presented
    Unauthenticated,
    Suspended,
    /// Identity no longer matches a record in the directory (removed or replaced)
    Revoked,
    InsufficientLevel,
    OutsideJurisdiction,
    /// Target id does not parse for its type
    MalformedTarget,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DenyReason::Unauthenticated => "administrator not authenticated",
            DenyReason::Suspended => "administrator is suspended",
            DenyReason::Revoked => "administrator record was removed or replaced",
            DenyReason::InsufficientLevel => "administrator level too low",
            DenyReason::OutsideJurisdiction => "target outside administrator jurisdiction",
            DenyReason::MalformedTarget => "malformed jurisdiction target",
        };
        f.write_str(msg)
    }
}

/// Allow or deny. A deny is never partial: the caller renders a redirect or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "reason", rename_all = "lowercase")]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        self == AccessDecision::Allow
    }

    pub fn deny_reason(self) -> Option<DenyReason> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::Deny(reason) => Some(reason),
        }
    }
}
