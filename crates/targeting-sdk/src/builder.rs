//! Builder pattern for TargetingEngine

use crate::engine::TargetingEngine;
use crate::error::{Result, SdkError};
use std::path::{Path, PathBuf};
use targeting_core::Target;

/// Builder for TargetingEngine
///
/// Audience definitions can be registered as already-constructed `Target`
/// trees, as inline JSON or YAML, or as paths to definition files. Sources
/// are parsed when `build` is called, so a malformed definition fails the
/// build rather than a later check.
///
/// # Example
///
/// ```rust,ignore
/// use targeting_sdk::TargetingEngineBuilder;
///
/// let engine = TargetingEngineBuilder::new()
///     .add_audience_json("young_women", definition_json)
///     .add_audience_file("seniors", "audiences/seniors.yaml")
///     .build()?;
/// ```
pub struct TargetingEngineBuilder {
    sources: Vec<(String, AudienceSource)>,
}

enum AudienceSource {
    Parsed(Target),
    Json(String),
    Yaml(String),
    File(PathBuf),
}

impl TargetingEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Register an already-constructed audience definition
    pub fn add_audience(mut self, id: impl Into<String>, target: Target) -> Self {
        self.sources
            .push((id.into(), AudienceSource::Parsed(target)));
        self
    }

    /// Register an audience definition from an inline JSON string
    pub fn add_audience_json(mut self, id: impl Into<String>, json: impl Into<String>) -> Self {
        self.sources
            .push((id.into(), AudienceSource::Json(json.into())));
        self
    }

    /// Register an audience definition from an inline YAML string
    pub fn add_audience_yaml(mut self, id: impl Into<String>, yaml: impl Into<String>) -> Self {
        self.sources
            .push((id.into(), AudienceSource::Yaml(yaml.into())));
        self
    }

    /// Register an audience definition file; the format is chosen by
    /// extension (`.json`, `.yaml`, `.yml`)
    pub fn add_audience_file(mut self, id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.sources
            .push((id.into(), AudienceSource::File(path.into())));
        self
    }

    /// Parse every registered source and build the engine
    ///
    /// Fails on the first malformed definition, on duplicate audience ids,
    /// and when no audiences were registered at all.
    pub fn build(self) -> Result<TargetingEngine> {
        if self.sources.is_empty() {
            return Err(SdkError::NoAudiences);
        }

        let mut audiences: Vec<(String, Target)> = Vec::with_capacity(self.sources.len());
        for (id, source) in self.sources {
            if audiences.iter().any(|(existing, _)| *existing == id) {
                return Err(SdkError::DuplicateAudience(id));
            }
            let target = match source {
                AudienceSource::Parsed(target) => target,
                AudienceSource::Json(json) => serde_json::from_str(&json)?,
                AudienceSource::Yaml(yaml) => serde_yaml::from_str(&yaml)?,
                AudienceSource::File(path) => load_definition_file(&path)?,
            };
            tracing::debug!(audience = %id, nodes = target.node_count(), "loaded audience definition");
            audiences.push((id, target));
        }

        Ok(TargetingEngine::new(audiences))
    }
}

impl Default for TargetingEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn load_definition_file(path: &Path) -> Result<Target> {
    // Resolve the format before touching the filesystem so an unsupported
    // extension is reported as such, not as a read error
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&std::fs::read_to_string(path)?)?),
        _ => Err(SdkError::UnsupportedFormat(path.display().to_string())),
    }
}
