//! Pipeline definition (`bitrise.yml`) model

use crate::core::step::{Input, StepListItem};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_FORMAT_VERSION: &str = "1.3.1";
pub const DEFAULT_STEP_LIB_SOURCE: &str = "https://github.com/bitrise-io/bitrise-steplib.git";

/// An ordered list of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub steps: Vec<StepListItem>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn push(&mut self, step: StepListItem) {
        self.steps.push(step);
    }

    /// Builder-style append
    pub fn with_step(mut self, step: StepListItem) -> Self {
        self.push(step);
        self
    }

    /// Composite keys in execution order
    pub fn step_keys(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.key()).collect()
    }
}

impl FromIterator<StepListItem> for Workflow {
    fn from_iter<I: IntoIterator<Item = StepListItem>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// App-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// App environment variables, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envs: Vec<Input>,
}

impl App {
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }
}

/// Top-level pipeline definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitriseConfig {
    pub format_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_step_lib_source: Option<String>,

    #[serde(default, skip_serializing_if = "App::is_empty")]
    pub app: App,

    /// Workflows keyed by name
    #[serde(default)]
    pub workflows: BTreeMap<String, Workflow>,
}

impl Default for BitriseConfig {
    fn default() -> Self {
        Self {
            format_version: DEFAULT_FORMAT_VERSION.to_string(),
            default_step_lib_source: Some(DEFAULT_STEP_LIB_SOURCE.to_string()),
            app: App::default(),
            workflows: BTreeMap::new(),
        }
    }
}

impl BitriseConfig {
    /// Load a pipeline definition from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse a pipeline definition from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: BitriseConfig =
            serde_yaml::from_str(yaml).context("Invalid pipeline definition")?;
        Ok(config)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize pipeline definition")
    }

    /// Add or replace a workflow
    pub fn add_workflow(&mut self, name: impl Into<String>, workflow: Workflow) {
        self.workflows.insert(name.into(), workflow);
    }

    pub fn workflow(&self, name: &str) -> Option<&Workflow> {
        self.workflows.get(name)
    }
}
