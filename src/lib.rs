//! steplist - Bitrise step catalog and step list builder

pub mod cli;
pub mod core;
pub mod scaffold;
pub mod steps;

// Re-export commonly used types
pub use crate::core::{
    BitriseConfig, Input, Platform, ProjectConfig, StepListItem, StepRef, Workflow,
};
pub use crate::core::audit::{Finding, FindingKind};
