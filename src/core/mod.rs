//! Core domain models for step lists
//!
//! This module defines the step catalog, the step list item record and
//! the pipeline definition that aggregates items into workflows.

pub mod audit;
pub mod catalog;
pub mod config;
pub mod pipeline;
pub mod step;

pub use config::{Platform, ProjectConfig};
pub use pipeline::*;
pub use step::*;
