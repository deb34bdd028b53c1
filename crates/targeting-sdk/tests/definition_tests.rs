//! Integration tests for definition loading and build-time validation

mod common;

use anyhow::Result;
use common::user_aged;
use std::io::Write;
use targeting_sdk::{SdkError, TargetingEngineBuilder, Verdict};

#[test]
fn test_json_and_yaml_definitions_are_equivalent() -> Result<()> {
    let engine = TargetingEngineBuilder::new()
        .add_audience_json(
            "from_json",
            r#"{
                "type": "group",
                "operator": "or",
                "children": [
                    { "type": "age", "operator": "<", "value": 20 },
                    { "type": "age", "operator": ">=", "value": 60 }
                ]
            }"#,
        )
        .add_audience_yaml(
            "from_yaml",
            r#"
type: group
operator: or
children:
  - type: age
    operator: "<"
    value: 20
  - type: age
    operator: ">="
    value: 60
"#,
        )
        .build()?;

    assert_eq!(engine.audience("from_json"), engine.audience("from_yaml"));

    let env = user_aged(30.0);
    assert_eq!(engine.check("from_json", &env)?, engine.check("from_yaml", &env)?);
    Ok(())
}

#[test]
fn test_definition_file_loading() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let json_path = dir.path().join("teens.json");
    writeln!(
        std::fs::File::create(&json_path)?,
        r#"{{ "type": "age", "operator": "<", "value": 20 }}"#
    )?;

    let yaml_path = dir.path().join("women.yaml");
    writeln!(
        std::fs::File::create(&yaml_path)?,
        "type: gender\nvalue: female"
    )?;

    let engine = TargetingEngineBuilder::new()
        .add_audience_file("teens", &json_path)
        .add_audience_file("women", &yaml_path)
        .build()?;

    assert_eq!(engine.check("teens", &user_aged(15.0))?, Verdict::Success);
    assert_eq!(engine.check("women", &user_aged(15.0))?, Verdict::Ignore);
    Ok(())
}

#[test]
fn test_missing_definition_file_fails_build() {
    let result = TargetingEngineBuilder::new()
        .add_audience_file("ghost", "does/not/exist.json")
        .build();
    assert!(matches!(result, Err(SdkError::IoError(_))));
}

#[test]
fn test_unknown_operator_rejected_at_build_time() {
    // Contract violations surface when the definition is loaded,
    // never during a check
    let result = TargetingEngineBuilder::new()
        .add_audience_json("bad", r#"{ "type": "age", "operator": "~=", "value": 20 }"#)
        .build();
    assert!(matches!(result, Err(SdkError::JsonError(_))));
}

#[test]
fn test_unknown_variant_rejected_at_build_time() {
    let result = TargetingEngineBuilder::new()
        .add_audience_json("bad", r#"{ "type": "country", "value": "KR" }"#)
        .build();
    assert!(matches!(result, Err(SdkError::JsonError(_))));
}

#[test]
fn test_check_matches_direct_evaluation() -> Result<()> {
    let definition = r#"{ "type": "age", "operator": ">=", "value": 20 }"#;

    let engine = TargetingEngineBuilder::new()
        .add_audience_json("adults", definition)
        .build()?;

    let target: targeting_sdk::Target = serde_json::from_str(definition)?;
    let env = user_aged(19.0);
    assert_eq!(
        engine.check("adults", &env)?,
        targeting_sdk::evaluate(&target, &env)
    );
    Ok(())
}
