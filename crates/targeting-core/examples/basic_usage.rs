//! Basic usage example for targeting-core
//!
//! Run with: cargo run --example basic_usage

use targeting_core::{evaluate, ComparisonOp, Environment, Gender, Target};

fn main() {
    println!("=== Targeting Core Basic Usage Example ===\n");

    // Example 1: A simple predicate
    println!("1. Gender predicate:");
    let female_only = Target::gender(Gender::Female);
    let env = Environment::new().with_gender(Gender::Female);
    println!("   {:?}\n", evaluate(&female_only, &env));

    // Example 2: A root-wrapped AND group (women in their twenties)
    println!("2. Composite rule (age in [20, 30) and gender == female):");
    let audience = Target::root(Target::all(vec![
        Target::age(ComparisonOp::Ge, 20.0),
        Target::age(ComparisonOp::Lt, 30.0),
        Target::gender(Gender::Female),
    ]));

    let matching = Environment::new().with_age(25.0).with_gender(Gender::Female);
    println!("   age 25, female -> {:?}", evaluate(&audience, &matching));

    let too_young = Environment::new().with_age(19.0).with_gender(Gender::Female);
    println!("   age 19, female -> {:?}", evaluate(&audience, &too_young));

    // Example 3: Missing attributes do not fail the rule
    println!("\n3. Partial environment (only gender known):");
    let partial = Environment::new().with_gender(Gender::Female);
    println!("   -> {:?}", evaluate(&audience, &partial));

    // Example 4: Loading a definition from JSON
    println!("\n4. Definition from JSON:");
    let definition = r#"{
        "type": "group",
        "operator": "or",
        "children": [
            { "type": "age", "operator": "<", "value": 20 },
            { "type": "age", "operator": ">=", "value": 60 }
        ]
    }"#;
    let target: Target = serde_json::from_str(definition).expect("valid definition");
    let env = Environment::new().with_age(30.0);
    println!("   age 30 -> {:?}", evaluate(&target, &env));
}
