//! Compare step references in a pipeline definition against the catalog

use crate::core::catalog;
use crate::core::pipeline::{BitriseConfig, DEFAULT_STEP_LIB_SOURCE};
use crate::core::step::{StepKey, StepRefError, StepSource};
use serde::Serialize;
use std::fmt;

/// What is wrong with a step reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    /// Step id is not in the catalog
    Unknown,
    /// Version differs from the pinned one
    Outdated { pinned: String },
    /// No version given
    Unpinned { pinned: String },
    /// Step comes from git, a local path or another step library
    External { source: String },
    /// Key could not be parsed
    Invalid { error: String },
}

/// A single audit finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub workflow: String,

    /// Zero-based position within the workflow
    pub position: usize,

    pub key: String,

    #[serde(flatten)]
    pub kind: FindingKind,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}: ", self.workflow, self.position, self.key)?;
        match &self.kind {
            FindingKind::Unknown => write!(f, "not in catalog"),
            FindingKind::Outdated { pinned } => write!(f, "catalog pins {}", pinned),
            FindingKind::Unpinned { pinned } => write!(f, "no version, catalog pins {}", pinned),
            FindingKind::External { source } => write!(f, "outside catalog ({})", source),
            FindingKind::Invalid { error } => write!(f, "{}", error),
        }
    }
}

/// Classify a single composite key, `None` when it matches the catalog.
///
/// `step_lib` is the definition's `default_step_lib_source`; keys prefixed
/// with it or with the public step library are looked up like bare keys.
pub fn classify(key: &str, step_lib: Option<&str>) -> Option<FindingKind> {
    let parsed = match StepKey::parse(key) {
        Ok(parsed) => parsed,
        Err(e) => return Some(invalid(e)),
    };

    let external = match &parsed.source {
        StepSource::Default => None,
        StepSource::StepLib(url) if url == DEFAULT_STEP_LIB_SOURCE => None,
        StepSource::StepLib(url) if Some(url.as_str()) == step_lib => None,
        StepSource::StepLib(url) => Some(url.clone()),
        StepSource::Git => Some("git".to_string()),
        StepSource::Path => Some("path".to_string()),
    };
    if let Some(source) = external {
        return Some(FindingKind::External { source });
    }

    let entry = match catalog::find(&parsed.id) {
        Some(entry) => entry,
        None => return Some(FindingKind::Unknown),
    };

    let pinned = entry.step.composite();
    match parsed.version {
        None => Some(FindingKind::Unpinned { pinned }),
        Some(version) if version != entry.step.version => Some(FindingKind::Outdated { pinned }),
        Some(_) => None,
    }
}

fn invalid(error: StepRefError) -> FindingKind {
    FindingKind::Invalid {
        error: error.to_string(),
    }
}

/// Audit every workflow; findings are ordered by workflow name then position
pub fn check(config: &BitriseConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    let step_lib = config.default_step_lib_source.as_deref();

    for (name, workflow) in &config.workflows {
        for (position, step) in workflow.steps.iter().enumerate() {
            if let Some(kind) = classify(step.key(), step_lib) {
                tracing::debug!(
                    workflow = %name,
                    position,
                    key = step.key(),
                    ?kind,
                    "Audit finding"
                );
                findings.push(Finding {
                    workflow: name.clone(),
                    position,
                    key: step.key().to_string(),
                    kind,
                });
            }
        }
    }

    findings
}
