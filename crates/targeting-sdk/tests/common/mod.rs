//! Common test utilities for SDK integration tests

// Each integration test binary compiles this module separately and only
// uses a subset of the helpers
#![allow(dead_code)]

use targeting_sdk::{Environment, Gender, TargetingEngine, TargetingEngineBuilder, Verdict};

/// Test helper that builds a single-audience engine from an inline
/// JSON definition
pub struct TestAudience {
    engine: TargetingEngine,
}

pub const AUDIENCE_ID: &str = "test_audience";

impl TestAudience {
    /// Load the audience from a JSON definition string
    pub fn from_json(definition: &str) -> Self {
        let engine = TargetingEngineBuilder::new()
            .add_audience_json(AUDIENCE_ID, definition)
            .build()
            .expect("definition should parse");
        Self { engine }
    }

    /// Check the audience against an environment
    pub fn check(&self, env: &Environment) -> Verdict {
        self.engine
            .check(AUDIENCE_ID, env)
            .expect("audience is registered")
    }

    pub fn assert_success(&self, env: &Environment) {
        assert_eq!(self.check(env), Verdict::Success);
    }

    pub fn assert_failure(&self, env: &Environment, reason: &str) {
        assert_eq!(self.check(env), Verdict::failure(reason));
    }

    pub fn assert_ignore(&self, env: &Environment) {
        assert_eq!(self.check(env), Verdict::Ignore);
    }
}

/// Environment with both attributes set
pub fn user(gender: Gender, age: f64) -> Environment {
    Environment::new().with_gender(gender).with_age(age)
}

/// Environment with only the age attribute set
pub fn user_aged(age: f64) -> Environment {
    Environment::new().with_age(age)
}

/// Environment with no attributes at all
pub fn anonymous() -> Environment {
    Environment::new()
}
