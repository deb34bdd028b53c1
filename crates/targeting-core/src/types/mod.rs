//! Attribute domain types
//!
//! This module contains the value types user attributes can take.

pub mod gender;

pub use gender::Gender;
