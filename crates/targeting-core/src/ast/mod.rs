//! Abstract Syntax Tree (AST) definitions for targeting rules
//!
//! This module contains the rule model:
//! - `Target` nodes (atomic predicates, groups, and the root wrapper)
//! - Comparison and boolean operators

pub mod operator;
pub mod target;

pub use operator::{BooleanOp, ComparisonOp};
pub use target::Target;
