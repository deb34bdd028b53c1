//! Targeting Core - Core types and evaluation for the audience targeting engine
//!
//! This crate provides the fundamental types used across the targeting stack:
//! - The rule model (`Target` trees) that audience definitions deserialize into
//! - `Environment` snapshots that rules are evaluated against
//! - The ternary `Verdict` result type
//! - The recursive evaluator

pub mod ast;
pub mod env;
pub mod error;
pub mod eval;
pub mod types;
pub mod verdict;

// Re-export commonly used types
pub use ast::{BooleanOp, ComparisonOp, Target};
pub use env::{Environment, UserAttributes};
pub use error::CoreError;
pub use eval::evaluate;
pub use types::Gender;
pub use verdict::Verdict;
