//! Targeting rule AST definitions

use super::operator::{BooleanOp, ComparisonOp};
use crate::types::Gender;
use serde::{Deserialize, Serialize};

/// A node in a targeting rule tree
///
/// The variant set is closed and the evaluator dispatches on it
/// exhaustively, so adding a variant forces every branch to be revisited.
/// Nodes own their children outright (`Box`/`Vec`), which keeps trees
/// acyclic by construction.
///
/// The serde representation is tagged on `"type"` and matches the wire
/// shape of audience definitions:
///
/// ```json
/// { "type": "group", "operator": "and", "children": [
///     { "type": "age", "operator": ">=", "value": 20 },
///     { "type": "gender", "value": "female" }
/// ]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Target {
    /// Atomic predicate on the user's gender
    Gender { value: Gender },

    /// Atomic predicate comparing the user's age against a threshold
    Age { operator: ComparisonOp, value: f64 },

    /// Boolean combinator over an ordered list of children
    Group {
        operator: BooleanOp,
        children: Vec<Target>,
    },

    /// Transparent wrapper marking the top of a rule tree
    Root { child: Box<Target> },
}

impl Target {
    /// Create a gender predicate
    pub fn gender(value: Gender) -> Self {
        Target::Gender { value }
    }

    /// Create an age predicate
    pub fn age(operator: ComparisonOp, value: f64) -> Self {
        Target::Age { operator, value }
    }

    /// Create a group with the given boolean operator
    pub fn group(operator: BooleanOp, children: Vec<Target>) -> Self {
        Target::Group { operator, children }
    }

    /// Create an AND group
    pub fn all(children: Vec<Target>) -> Self {
        Target::group(BooleanOp::And, children)
    }

    /// Create an OR group
    pub fn any(children: Vec<Target>) -> Self {
        Target::group(BooleanOp::Or, children)
    }

    /// Wrap a sub-tree in a root marker
    pub fn root(child: Target) -> Self {
        Target::Root {
            child: Box::new(child),
        }
    }

    /// Returns true if this node is an atomic predicate (a leaf)
    pub fn is_leaf(&self) -> bool {
        matches!(self, Target::Gender { .. } | Target::Age { .. })
    }

    /// Number of nodes in this tree, the root wrapper included
    pub fn node_count(&self) -> usize {
        match self {
            Target::Gender { .. } | Target::Age { .. } => 1,
            Target::Group { children, .. } => {
                1 + children.iter().map(Target::node_count).sum::<usize>()
            }
            Target::Root { child } => 1 + child.node_count(),
        }
    }
}
