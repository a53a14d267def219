//! Project configuration from YAML

use crate::core::catalog;
use crate::core::step::{Input, StepRef};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Project platform, selects the default workflow layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Fastlane,
    Ios,
    Xamarin,
    /// Common steps only
    Other,
}

impl Platform {
    /// Steps accepting inputs that this platform's workflows use
    pub fn input_steps(&self) -> &'static [StepRef] {
        match self {
            Platform::Android => &[catalog::GRADLE_RUNNER],
            Platform::Fastlane => &[catalog::FASTLANE],
            Platform::Ios => &[catalog::XCODE_TEST, catalog::XCODE_ARCHIVE],
            Platform::Xamarin => &[catalog::XAMARIN_USER_MANAGEMENT, catalog::XAMARIN_BUILDER],
            Platform::Other => &[],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Android => "android",
            Platform::Fastlane => "fastlane",
            Platform::Ios => "ios",
            Platform::Xamarin => "xamarin",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

/// Project description used to scaffold a pipeline definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (optional)
    #[serde(default)]
    pub name: Option<String>,

    /// Project platform
    pub platform: Platform,

    /// Whether the iOS project installs pods
    #[serde(default)]
    pub cocoapods: bool,

    /// Step inputs keyed by step id
    #[serde(default)]
    pub inputs: BTreeMap<String, Vec<Input>>,
}

impl ProjectConfig {
    /// A config with no inputs for the given platform
    pub fn new(platform: Platform) -> Self {
        Self {
            name: None,
            platform,
            cocoapods: false,
            inputs: BTreeMap::new(),
        }
    }

    /// Load project configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse project configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ProjectConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> Result<()> {
        if self.cocoapods && self.platform != Platform::Ios {
            anyhow::bail!(
                "'cocoapods' is only supported for ios projects, not {}",
                self.platform
            );
        }

        let allowed = self.platform.input_steps();
        for step_id in self.inputs.keys() {
            let entry = match catalog::find(step_id) {
                Some(entry) => entry,
                None => anyhow::bail!("Inputs reference unknown step '{}'", step_id),
            };

            if !entry.accepts_inputs {
                anyhow::bail!("Step '{}' does not take inputs", step_id);
            }

            if !allowed.iter().any(|s| s.id == step_id.as_str()) {
                anyhow::bail!(
                    "Step '{}' is not used by {} workflows",
                    step_id,
                    self.platform
                );
            }
        }

        Ok(())
    }

    /// Inputs configured for a step, empty when none
    pub fn inputs_for(&self, step_id: &str) -> Vec<Input> {
        self.inputs.get(step_id).cloned().unwrap_or_default()
    }

    /// Builder-style input assignment
    pub fn with_inputs(mut self, step_id: impl Into<String>, inputs: Vec<Input>) -> Self {
        self.inputs.insert(step_id.into(), inputs);
        self
    }
}
