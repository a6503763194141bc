//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use conditionals_sdk::{ActivationDecision, ConditionEngine, ConditionEngineBuilder};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test helper that writes definitions and property documents to a
/// temporary directory and builds an engine from them
pub struct TestEngine {
    dir: TempDir,
    definition_files: Vec<PathBuf>,
    property_files: Vec<PathBuf>,
}

impl TestEngine {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            definition_files: Vec::new(),
            property_files: Vec::new(),
        }
    }

    /// Add a definition document
    pub fn with_definitions(mut self, yaml: &str) -> Self {
        let name = format!("definitions_{}.yaml", self.definition_files.len());
        let path = self.write(&name, yaml);
        self.definition_files.push(path);
        self
    }

    /// Add a property document; the file name decides YAML or JSON
    pub fn with_properties(mut self, file_name: &str, content: &str) -> Self {
        let path = self.write(file_name, content);
        self.property_files.push(path);
        self
    }

    /// Builder preloaded with the written files
    pub fn builder(&self) -> ConditionEngineBuilder {
        let mut builder = ConditionEngineBuilder::new();
        for path in &self.definition_files {
            builder = builder.add_definition_file(path);
        }
        for path in &self.property_files {
            builder = builder.add_property_file(path);
        }
        builder
    }

    pub fn build(&self) -> ConditionEngine {
        self.builder().build().expect("build engine")
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(content.trim_start().as_bytes()).expect("write file");
        path
    }
}

/// Assertion helpers for activation decisions
pub trait DecisionAssertions {
    fn assert_active(&self);
    fn assert_inactive(&self);
    fn assert_message_contains(&self, expected: &str);
}

impl DecisionAssertions for ActivationDecision {
    fn assert_active(&self) {
        assert!(self.active, "Expected '{}' to be active: {}", self.component, self.message());
    }

    fn assert_inactive(&self) {
        assert!(!self.active, "Expected '{}' to be inactive: {}", self.component, self.message());
    }

    fn assert_message_contains(&self, expected: &str) {
        let message = self.message().to_string();
        assert!(
            message.contains(expected),
            "Expected message to contain '{}', got '{}'",
            expected,
            message
        );
    }
}
