//! Basic conditions example
//!
//! This example demonstrates:
//! - Defining components gated by property conditions
//! - Supplying properties inline and from the environment
//! - Inspecting activation decisions and their explanations
//!
//! Run with `RUST_LOG=debug` to see per-key resolution.

use conditionals_sdk::{ConditionEngineBuilder, ConditionKind, Declaration, EnumType};
use tracing_subscriber::EnvFilter;

const DEFINITIONS: &str = r#"
components:
  - id: metrics-exporter
    description: Prometheus endpoint
    conditions:
      - kind: integer
        declarations:
          - prefix: app.metrics
            name: port
            matchType: POSITIVE
      - kind: collection
        declarations:
          - prefix: app.metrics
            name: formats
            havingValue: [prometheus]
            matchType: CONTAINS_ALL
  - id: request-timeouts
    conditions:
      - kind: duration
        declarations:
          - name: app.http.timeout
            havingValue: 500ms
            matchType: GREATER_THAN
  - id: debug-console
    conditions:
      - kind: enum
        declarations:
          - name: app.env
            enumType: Environment
            havingValue: DEV
      - kind: os
        declarations:
          - value: [linux, mac, windows]
  - id: legacy-bridge
    conditions:
      - kind: string
        declarations:
          - name: app.legacy.mode
            havingValue: enabled
            ignoreCase: true
            trim: true
            matchIfMissing: false
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Basic Conditions Example ===\n");

    let engine = ConditionEngineBuilder::new()
        .add_definition_content("demo", DEFINITIONS)
        .register_enum(EnumType::new("Environment", ["DEV", "STAGING", "PROD"]))
        .with_property("app.metrics.port", 9090)
        .with_property("app.metrics.formats", "prometheus, otlp")
        .with_property("app.http.timeout", "PT1.5S")
        .with_property("app.env", "dev")
        .with_environment("DEMO_")
        .build()?;

    println!("Condition engine initialized\n");

    for decision in engine.evaluate_all() {
        println!(
            "  {:<18} {}",
            decision.component,
            if decision.active { "ACTIVE" } else { "inactive" }
        );
        println!("    {}", decision.message());
    }

    // Ad-hoc check outside any component
    let outcome = engine.evaluate_declarations(
        ConditionKind::Double,
        &[Declaration::new()
            .with("name", "app.sampling.ratio")
            .with("havingValue", 0.5)
            .with("matchIfMissing", true)],
    )?;
    println!("\nAd-hoc sampling check: {} ({})", outcome.matched, outcome.message);

    println!("\nFirst decision as JSON:");
    if let Some(decision) = engine.evaluate_all().first() {
        println!("{}", serde_json::to_string_pretty(decision)?);
    }

    Ok(())
}
