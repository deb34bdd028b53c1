//! Simple targeting example
//!
//! Loads two audience definitions and checks a few user environments
//! against them.
//!
//! Run with: cargo run --example simple_targeting

use targeting_sdk::{Environment, Gender, TargetingEngine, Verdict};

fn main() -> anyhow::Result<()> {
    let engine = TargetingEngine::builder()
        .add_audience_json(
            "young_women",
            r#"{
                "type": "root",
                "child": {
                    "type": "group",
                    "operator": "and",
                    "children": [
                        { "type": "age", "operator": ">=", "value": 20 },
                        { "type": "age", "operator": "<", "value": 30 },
                        { "type": "gender", "value": "female" }
                    ]
                }
            }"#,
        )
        .add_audience_yaml(
            "seniors",
            r#"
type: age
operator: ">="
value: 60
"#,
        )
        .build()?;

    let users = [
        ("25-year-old woman", Environment::new().with_age(25.0).with_gender(Gender::Female)),
        ("35-year-old man", Environment::new().with_age(35.0).with_gender(Gender::Male)),
        ("72-year-old, gender unknown", Environment::new().with_age(72.0)),
        ("anonymous visitor", Environment::new()),
    ];

    for (label, env) in &users {
        println!("{}:", label);
        for (audience, verdict) in engine.check_all(env) {
            match verdict {
                Verdict::Success => println!("  {} -> match", audience),
                Verdict::Failure { reason } => println!("  {} -> no match ({})", audience, reason),
                Verdict::Ignore => println!("  {} -> not applicable", audience),
            }
        }
        println!();
    }

    Ok(())
}
