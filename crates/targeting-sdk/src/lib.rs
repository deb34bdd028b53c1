//! Targeting SDK
//!
//! High-level API for loading audience definitions (JSON or YAML) and
//! checking user environments against them. Rule semantics live in
//! `targeting-core`; this crate adds named audiences, definition loading,
//! and build-time validation of definitions.

pub mod builder;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::TargetingEngineBuilder;
pub use engine::TargetingEngine;
pub use error::{Result, SdkError};

// Re-export commonly used types from the core
pub use targeting_core::{
    evaluate, BooleanOp, ComparisonOp, Environment, Gender, Target, UserAttributes, Verdict,
};
