//! Error types for the targeting core

use thiserror::Error;

/// Core error type
///
/// Every variant is a construction-time contract violation. Evaluation
/// itself never fails: missing attributes are a normal condition expressed
/// as `Verdict::Ignore`, not an error.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
