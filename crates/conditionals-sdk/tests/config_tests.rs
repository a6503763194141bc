//! Integration tests for file-based engine configuration

use conditionals_sdk::{ConditionEngine, EngineConfig};
use std::fs;

#[test]
fn test_engine_from_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let definitions = dir.path().join("conditions.yaml");
    fs::write(
        &definitions,
        r#"
components:
  - id: region-routing
    conditions:
      - kind: enum
        declarations:
          - name: app.region
            enumType: Region
            havingValue: eu
      - kind: long
        declarations:
          - name: app.shards
            havingValue: 4
            matchType: GREATER_THAN_OR_EQUAL
"#,
    )?;

    let config_path = dir.path().join("engine.yaml");
    fs::write(
        &config_path,
        format!(
            r#"
definition_files:
  - {}
properties:
  app.region: EU
  app.shards: 8
enums:
  - name: Region
    members: [EU, US]
"#,
            definitions.display()
        ),
    )?;

    let config = EngineConfig::from_file(&config_path)?;
    let engine = ConditionEngine::new(config)?;
    let decision = engine.evaluate("region-routing")?;
    assert!(decision.active);
    assert_eq!(engine.component_ids().collect::<Vec<_>>(), vec!["region-routing"]);
    Ok(())
}

#[test]
fn test_decision_serializes() -> anyhow::Result<()> {
    let mut config = EngineConfig::new().with_property("app.enabled", "true");
    config.definition_contents.push((
        "inline".to_string(),
        r#"
components:
  - id: feature
    conditions:
      - kind: string
        declarations:
          - name: app.enabled
            havingValue: "true"
"#
        .to_string(),
    ));

    let engine = ConditionEngine::new(config)?;
    let json = serde_json::to_value(engine.evaluate("feature")?)?;
    assert_eq!(json["component"], "feature");
    assert_eq!(json["active"], true);
    assert_eq!(json["outcomes"][0]["instances"][0]["matched_keys"][0], "app.enabled");
    Ok(())
}
