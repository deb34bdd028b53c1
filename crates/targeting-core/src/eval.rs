//! Recursive evaluation of targeting rules
//!
//! `evaluate` is a pure function: deterministic for fixed inputs, no shared
//! state, safe to call concurrently against shared or distinct trees and
//! environments. Recursion depth equals tree depth, which rule authoring
//! keeps small.

use crate::ast::{BooleanOp, ComparisonOp, Target};
use crate::env::Environment;
use crate::types::Gender;
use crate::verdict::Verdict;

/// Evaluate a targeting rule against an environment
///
/// Missing attributes never fail the rule; the affected predicate yields
/// `Verdict::Ignore` and group combination treats it as vacuous.
pub fn evaluate(target: &Target, env: &Environment) -> Verdict {
    match target {
        Target::Gender { value } => evaluate_gender(*value, env),
        Target::Age { operator, value } => evaluate_age(*operator, *value, env),
        Target::Group { operator, children } => evaluate_group(*operator, children, env),
        // Root is a transparent marker; its verdict is the child's
        Target::Root { child } => evaluate(child, env),
    }
}

fn evaluate_gender(expected: Gender, env: &Environment) -> Verdict {
    let Some(actual) = env.gender() else {
        log::trace!("gender attribute absent, predicate ignored");
        return Verdict::Ignore;
    };
    if actual == expected {
        Verdict::Success
    } else {
        Verdict::failure(format!("gender is not {}", expected))
    }
}

fn evaluate_age(operator: ComparisonOp, threshold: f64, env: &Environment) -> Verdict {
    let Some(age) = env.age() else {
        log::trace!("age attribute absent, predicate ignored");
        return Verdict::Ignore;
    };
    if operator.compare(age, threshold) {
        Verdict::Success
    } else {
        Verdict::failure(format!("Age is not {} {}", operator.phrase(), threshold))
    }
}

/// Merge child verdicts according to the group's boolean operator
///
/// Every child is evaluated; a group where all children were ignored
/// (vacuously including the empty group) is itself ignored. Failure reasons
/// from all failing children are aggregated in their original order, so
/// callers see every unmet condition rather than just the first.
fn evaluate_group(operator: BooleanOp, children: &[Target], env: &Environment) -> Verdict {
    let verdicts: Vec<Verdict> = children.iter().map(|child| evaluate(child, env)).collect();

    if verdicts.iter().all(Verdict::is_ignore) {
        return Verdict::Ignore;
    }

    let reasons: Vec<&str> = verdicts.iter().filter_map(Verdict::reason).collect();

    let verdict = match operator {
        BooleanOp::And => {
            if reasons.is_empty() {
                Verdict::Success
            } else {
                Verdict::failure(reasons.join(", "))
            }
        }
        BooleanOp::Or => {
            if verdicts.iter().any(Verdict::is_success) {
                Verdict::Success
            } else {
                Verdict::failure(reasons.join(", "))
            }
        }
    };
    log::debug!(
        "group {} over {} children -> {:?}",
        operator,
        children.len(),
        verdict
    );
    verdict
}
