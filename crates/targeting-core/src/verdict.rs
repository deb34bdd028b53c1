//! Ternary evaluation result

use serde::{Deserialize, Serialize};

/// Result of evaluating a target against an environment
///
/// `Ignore` is a first-class outcome, not an error: it means a required
/// attribute was absent from the environment, so the predicate does not
/// constrain the decision. Group combination treats it as vacuous (true for
/// AND, false for OR). This is deliberately distinct from `Failure`, which
/// means the predicate evaluated and did not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Verdict {
    /// The predicate or group matched
    Success,

    /// The predicate or group evaluated and did not match
    Failure { reason: String },

    /// A required attribute was absent; the node does not constrain the decision
    Ignore,
}

impl Verdict {
    /// Build a failure verdict from a reason
    pub fn failure(reason: impl Into<String>) -> Self {
        Verdict::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Verdict::Failure { .. })
    }

    pub fn is_ignore(&self) -> bool {
        matches!(self, Verdict::Ignore)
    }

    /// The failure reason, if this verdict is a failure
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Failure { reason } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_predicates() {
        assert!(Verdict::Success.is_success());
        assert!(Verdict::failure("nope").is_failure());
        assert!(Verdict::Ignore.is_ignore());
        assert!(!Verdict::Ignore.is_failure());
    }

    #[test]
    fn test_failure_reason_accessor() {
        let verdict = Verdict::failure("gender is not female");
        assert_eq!(verdict.reason(), Some("gender is not female"));
        assert_eq!(Verdict::Success.reason(), None);
        assert_eq!(Verdict::Ignore.reason(), None);
    }

    #[test]
    fn test_verdict_serde_shape() {
        assert_eq!(
            serde_json::to_string(&Verdict::Success).unwrap(),
            r#"{"type":"success"}"#
        );
        assert_eq!(
            serde_json::to_string(&Verdict::Ignore).unwrap(),
            r#"{"type":"ignore"}"#
        );
        assert_eq!(
            serde_json::to_string(&Verdict::failure("Age is not less than 20")).unwrap(),
            r#"{"type":"failure","reason":"Age is not less than 20"}"#
        );

        let parsed: Verdict =
            serde_json::from_str(r#"{"type":"failure","reason":"x"}"#).unwrap();
        assert_eq!(parsed, Verdict::failure("x"));
    }
}
