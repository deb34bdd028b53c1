//! Environment snapshots evaluated against targeting rules

use crate::types::Gender;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Read-only snapshot of the context a rule is evaluated against
///
/// Built fresh per evaluation by the caller (typically from a user profile);
/// the evaluator only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Attributes of the user being targeted
    #[serde(default)]
    pub user: UserAttributes,
}

/// User attributes consumed by atomic predicates
///
/// Every attribute is optional: absence is distinct from every valid value
/// and is never defaulted to a sentinel. Attributes no predicate consumes
/// are preserved in `extra` so snapshots round-trip losslessly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment (no attributes known)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user's gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.user.gender = Some(gender);
        self
    }

    /// Set the user's age
    pub fn with_age(mut self, age: f64) -> Self {
        self.user.age = Some(age);
        self
    }

    /// The user's gender, if known
    pub fn gender(&self) -> Option<Gender> {
        self.user.gender
    }

    /// The user's age, if known
    pub fn age(&self) -> Option<f64> {
        self.user.age
    }
}
