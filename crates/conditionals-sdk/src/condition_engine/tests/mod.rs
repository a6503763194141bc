//! Unit tests for ConditionEngine

use super::*;
use crate::builder::ConditionEngineBuilder;
use crate::definition::ConditionKind;
use crate::error::SdkError;
use conditionals_core::{Declaration, EnumType};
use conditionals_runtime::MapPropertySource;

const DEFINITIONS: &str = r#"
components:
  - id: metrics-exporter
    conditions:
      - kind: integer
        declarations:
          - prefix: app.metrics
            name: port
            matchType: POSITIVE
      - kind: string
        declarations:
          - prefix: app.metrics
            name: format
            havingValue: prometheus
            ignoreCase: true
  - id: legacy-api
    conditions:
      - kind: enum
        declarations:
          - name: app.env
            enumType: Environment
            havingValue: DEV
  - id: always-on
"#;

fn create_engine(properties: MapPropertySource) -> ConditionEngine {
    ConditionEngineBuilder::new()
        .add_definition_content("definitions", DEFINITIONS)
        .register_enum(EnumType::new("Environment", ["DEV", "PROD"]))
        .with_property_source(properties)
        .build()
        .unwrap()
}

#[test]
fn test_active_component() {
    let engine = create_engine(
        MapPropertySource::new("props")
            .with_property("app.metrics.port", 9090)
            .with_property("app.metrics.format", "Prometheus"),
    );

    let decision = engine.evaluate("metrics-exporter").unwrap();
    assert!(decision.active);
    assert_eq!(decision.outcomes.len(), 2);
    assert_eq!(
        decision.message().to_string(),
        "OnIntegerProperty (app.metrics.port=0) matched; OnStringProperty (app.metrics.format=prometheus) matched"
    );
}

#[test]
fn test_short_circuit_stops_at_first_failing_group() {
    let engine = create_engine(MapPropertySource::new("props").with_property("app.metrics.port", -1));
    let decision = engine.evaluate("metrics-exporter").unwrap();
    assert!(!decision.active);
    assert_eq!(decision.outcomes.len(), 1);
}

#[test]
fn test_component_without_conditions_is_active() {
    let engine = create_engine(MapPropertySource::new("props"));
    assert!(engine.evaluate("always-on").unwrap().active);
}

#[test]
fn test_evaluate_all_in_definition_order() {
    let engine = create_engine(MapPropertySource::new("props").with_property("app.env", "dev"));
    let decisions = engine.evaluate_all();
    let ids: Vec<&str> = decisions.iter().map(|d| d.component.as_str()).collect();
    assert_eq!(ids, vec!["metrics-exporter", "legacy-api", "always-on"]);
    assert!(!decisions[0].active);
    assert!(decisions[1].active);
    assert!(decisions[2].active);
}

#[test]
fn test_unknown_component() {
    let engine = create_engine(MapPropertySource::new("props"));
    assert!(matches!(engine.evaluate("missing"), Err(SdkError::UnknownComponent(_))));
}

#[test]
fn test_evaluate_declarations_ad_hoc() {
    let engine = create_engine(MapPropertySource::new("props").with_property("os.name", "Linux"));
    let outcome = engine
        .evaluate_declarations(ConditionKind::Os, &[Declaration::new().with("value", "linux")])
        .unwrap();
    assert!(outcome.matched);

    let outcome = engine
        .evaluate_declarations(ConditionKind::String, &[Declaration::new().with("name", "absent")])
        .unwrap();
    assert!(!outcome.matched);
}

#[test]
fn test_duplicate_component_rejected() {
    let result = ConditionEngineBuilder::new()
        .add_definition_content("a", "components: [{id: dup}]")
        .add_definition_content("b", "components: [{id: dup}]")
        .build();
    assert!(matches!(result, Err(SdkError::InvalidDefinition(_))));
}

#[test]
fn test_malformed_declaration_fails_build() {
    let result = ConditionEngineBuilder::new()
        .add_definition_content(
            "broken",
            r#"
components:
  - id: broken
    conditions:
      - kind: long
        declarations:
          - havingValue: 5
"#,
        )
        .build();
    assert!(matches!(result, Err(SdkError::RuntimeError(_))));
}

#[test]
fn test_invalid_yaml_definition() {
    let result = ConditionEngineBuilder::new()
        .add_definition_content("garbage", "components: [")
        .build();
    match result {
        Err(SdkError::InvalidDefinition(message)) => assert!(message.starts_with("garbage:")),
        other => panic!("unexpected result {:?}", other),
    }
}
