//! Core ConditionEngine implementation

use super::loader::{DefinitionLoader, PropertyLoader};
use super::types::ActivationDecision;
use crate::config::EngineConfig;
use crate::definition::{ComponentDefinition, ConditionKind};
use crate::error::{Result, SdkError};
use conditionals_core::{Declaration, EnumRegistry, EnumType, SpecParser};
use conditionals_runtime::{
    CompositePropertyResolver, ConditionEvaluator, ConditionGroup, ConditionOutcome, OsCondition, PropertyResolver,
};
use std::collections::HashMap;

/// A condition group parsed at build time
#[derive(Debug, Clone)]
enum CompiledCondition {
    Property(ConditionGroup),
    Os(Vec<OsCondition>),
}

#[derive(Debug, Clone)]
struct CompiledComponent {
    id: String,
    conditions: Vec<CompiledCondition>,
}

pub struct ConditionEngine {
    /// Components in definition order
    components: Vec<CompiledComponent>,

    /// Component id to position in `components`
    index: HashMap<String, usize>,

    /// Parser for ad-hoc declarations
    parser: SpecParser,

    /// Property sources in precedence order
    resolver: CompositePropertyResolver,

    evaluator: ConditionEvaluator,

    /// Configuration
    config: EngineConfig,
}

impl ConditionEngine {
    /// Create a new condition engine from configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_sources(config, Vec::new(), Vec::new())
    }

    /// Create a new engine with extra enum types and property sources
    ///
    /// Extra sources rank below every configured source.
    pub(crate) fn with_sources(
        config: EngineConfig,
        enums: Vec<EnumType>,
        sources: Vec<Box<dyn PropertyResolver>>,
    ) -> Result<Self> {
        let mut registry = EnumRegistry::new();
        for enum_config in &config.enums {
            registry.register(EnumType::from(enum_config));
        }
        for enum_type in enums {
            registry.register(enum_type);
        }
        let parser = SpecParser::with_enums(registry);

        let mut components = Vec::new();
        let mut index = HashMap::new();
        for definition in DefinitionLoader::load_all(&config)? {
            if index.contains_key(&definition.id) {
                return Err(SdkError::InvalidDefinition(format!(
                    "component '{}' is defined more than once",
                    definition.id
                )));
            }
            index.insert(definition.id.clone(), components.len());
            components.push(Self::compile(&parser, definition)?);
        }

        let mut resolver = PropertyLoader::load_all(&config)?;
        for source in sources {
            resolver.add_source(source);
        }

        let evaluator = ConditionEvaluator::new().with_short_circuit(config.short_circuit);

        tracing::info!(
            "Condition engine ready: {} component(s), {} property source(s)",
            components.len(),
            resolver.len()
        );

        Ok(Self {
            components,
            index,
            parser,
            resolver,
            evaluator,
            config,
        })
    }

    /// Parse every declaration of a component; the first error fails the build
    fn compile(parser: &SpecParser, definition: ComponentDefinition) -> Result<CompiledComponent> {
        let mut conditions = Vec::with_capacity(definition.conditions.len());
        for condition in &definition.conditions {
            conditions.push(Self::compile_condition(parser, condition.kind, &condition.declarations)?);
        }
        tracing::debug!("Compiled component '{}' with {} condition(s)", definition.id, conditions.len());
        Ok(CompiledComponent {
            id: definition.id,
            conditions,
        })
    }

    fn compile_condition(
        parser: &SpecParser,
        kind: ConditionKind,
        declarations: &[Declaration],
    ) -> Result<CompiledCondition> {
        match kind.value_kind() {
            Some(value_kind) => Ok(CompiledCondition::Property(ConditionGroup::parse(
                parser,
                value_kind,
                declarations,
            )?)),
            None => {
                let conditions = declarations
                    .iter()
                    .map(OsCondition::parse)
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(CompiledCondition::Os(conditions))
            }
        }
    }

    /// Decide whether a component is active
    pub fn evaluate(&self, component_id: &str) -> Result<ActivationDecision> {
        let position = self
            .index
            .get(component_id)
            .ok_or_else(|| SdkError::UnknownComponent(component_id.to_string()))?;
        Ok(self.evaluate_component(&self.components[*position]))
    }

    /// Decide every component, in definition order
    pub fn evaluate_all(&self) -> Vec<ActivationDecision> {
        self.components
            .iter()
            .map(|component| self.evaluate_component(component))
            .collect()
    }

    /// Evaluate declarations that are not part of any component
    pub fn evaluate_declarations(&self, kind: ConditionKind, declarations: &[Declaration]) -> Result<ConditionOutcome> {
        let condition = Self::compile_condition(&self.parser, kind, declarations)?;
        Ok(self.evaluate_condition(&condition))
    }

    /// Ids of all defined components, in definition order
    pub fn component_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.components.iter().map(|component| component.id.as_str())
    }

    /// Property sources used for evaluation
    pub fn resolver(&self) -> &CompositePropertyResolver {
        &self.resolver
    }

    /// Get configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn evaluate_component(&self, component: &CompiledComponent) -> ActivationDecision {
        let mut outcomes = Vec::with_capacity(component.conditions.len());
        for condition in &component.conditions {
            let outcome = self.evaluate_condition(condition);
            let failed = !outcome.matched;
            outcomes.push(outcome);
            if failed && self.config.short_circuit {
                break;
            }
        }

        let decision = ActivationDecision::new(component.id.clone(), outcomes);
        tracing::debug!(
            "Component '{}' is {}: {}",
            decision.component,
            if decision.active { "active" } else { "inactive" },
            decision.message()
        );
        decision
    }

    fn evaluate_condition(&self, condition: &CompiledCondition) -> ConditionOutcome {
        match condition {
            CompiledCondition::Property(group) => self.evaluator.evaluate_group(group, &self.resolver),
            CompiledCondition::Os(conditions) => {
                OsCondition::evaluate_all(conditions, &self.resolver, self.config.short_circuit)
            }
        }
    }
}

impl std::fmt::Debug for ConditionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionEngine")
            .field("components", &self.components.len())
            .field("resolver", &self.resolver)
            .field("short_circuit", &self.config.short_circuit)
            .finish()
    }
}
