//! Operators for targeting predicates and groups

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators for numeric predicates
///
/// The serde names match the symbols used in audience definitions, so an
/// unknown operator string is rejected when the definition is deserialized,
/// never during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Ge,
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    Le,
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Equal (==)
    #[serde(rename = "==")]
    Eq,
}

impl ComparisonOp {
    /// Apply the operator to left and right operands
    pub fn compare(&self, left: f64, right: f64) -> bool {
        match self {
            ComparisonOp::Ge => left >= right,
            ComparisonOp::Gt => left > right,
            ComparisonOp::Le => left <= right,
            ComparisonOp::Lt => left < right,
            ComparisonOp::Eq => left == right,
        }
    }

    /// The comparison rendered in words, used to build failure reasons
    /// ("Age is not `<phrase>` `<value>`")
    pub fn phrase(&self) -> &'static str {
        match self {
            ComparisonOp::Ge => "greater than or equal to",
            ComparisonOp::Gt => "greater than",
            ComparisonOp::Le => "less than or equal to",
            ComparisonOp::Lt => "less than",
            ComparisonOp::Eq => "equal to",
        }
    }

    /// The operator symbol as written in audience definitions
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Ge => ">=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Le => "<=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Eq => "==",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonOp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">=" => Ok(ComparisonOp::Ge),
            ">" => Ok(ComparisonOp::Gt),
            "<=" => Ok(ComparisonOp::Le),
            "<" => Ok(ComparisonOp::Lt),
            "==" => Ok(ComparisonOp::Eq),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }
}

/// Boolean combinators for group targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    /// All non-ignored children must succeed
    And,
    /// At least one child must succeed
    Or,
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BooleanOp::And => f.write_str("and"),
            BooleanOp::Or => f.write_str("or"),
        }
    }
}

impl FromStr for BooleanOp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(BooleanOp::And),
            "or" => Ok(BooleanOp::Or),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }
}
