//! Emission policies.
//!
//! Both policies are explicit configuration rather than inferred behavior:
//! the generated artifact must not change shape because an input happened to
//! carry nullability metadata or adjacent shapes happened to share a
//! namespace.

use serde::{Deserialize, Serialize};

/// How column nullability shows up in emitted fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullabilityPolicy {
    /// Render every field as `name: type;` regardless of nullability.
    #[default]
    Ignore,
    /// Render nullable columns as optional fields (`name?: type;`).
    Optional,
}

impl NullabilityPolicy {
    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NullabilityPolicy::Ignore => "ignore",
            NullabilityPolicy::Optional => "optional",
        }
    }
}

/// How row shapes are grouped into namespace blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingPolicy {
    /// One namespace wrapper per declaration, even when consecutive
    /// declarations share a namespace.
    #[default]
    PerDeclaration,
    /// Consecutive declarations sharing a namespace render inside one
    /// wrapper. Non-adjacent repeats still get separate wrappers.
    AdjacentRuns,
}

impl GroupingPolicy {
    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingPolicy::PerDeclaration => "per-declaration",
            GroupingPolicy::AdjacentRuns => "adjacent-runs",
        }
    }
}

/// Bundle of emission policies threaded through the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    pub nullability: NullabilityPolicy,
    pub grouping: GroupingPolicy,
}
