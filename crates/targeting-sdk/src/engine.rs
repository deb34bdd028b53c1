//! Targeting engine: named audiences checked against environments

use crate::builder::TargetingEngineBuilder;
use crate::error::{Result, SdkError};
use targeting_core::{evaluate, Environment, Target, Verdict};

/// Checks environments against a set of named audience definitions
///
/// Built once via [`TargetingEngineBuilder`]; immutable afterwards, so a
/// shared engine can serve concurrent checks without synchronization.
pub struct TargetingEngine {
    // Insertion order is the iteration order of check_all
    audiences: Vec<(String, Target)>,
}

impl TargetingEngine {
    /// Start building an engine
    pub fn builder() -> TargetingEngineBuilder {
        TargetingEngineBuilder::new()
    }

    pub(crate) fn new(audiences: Vec<(String, Target)>) -> Self {
        Self { audiences }
    }

    /// Ids of the registered audiences, in registration order
    pub fn audience_ids(&self) -> impl Iterator<Item = &str> {
        self.audiences.iter().map(|(id, _)| id.as_str())
    }

    /// The definition registered under `id`, if any
    pub fn audience(&self, id: &str) -> Option<&Target> {
        self.audiences
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, target)| target)
    }

    /// Check one audience against an environment
    ///
    /// The verdict is exactly what `targeting_core::evaluate` returns for
    /// the registered definition; the only error is an unknown id.
    pub fn check(&self, id: &str, env: &Environment) -> Result<Verdict> {
        let target = self
            .audience(id)
            .ok_or_else(|| SdkError::UnknownAudience(id.to_string()))?;
        let verdict = evaluate(target, env);
        tracing::debug!(audience = %id, verdict = ?verdict, "audience checked");
        Ok(verdict)
    }

    /// Check every registered audience against an environment, in
    /// registration order
    pub fn check_all(&self, env: &Environment) -> Vec<(&str, Verdict)> {
        self.audiences
            .iter()
            .map(|(id, target)| (id.as_str(), evaluate(target, env)))
            .collect()
    }
}
