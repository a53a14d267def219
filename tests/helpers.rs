//! Test utility functions for steplist

#![allow(dead_code)]

use serde_yaml::Value;
use steplist::core::catalog::{self, CatalogEntry};
use steplist::{steps, Input, StepListItem};

/// Every constructor paired with the catalog entry it must use,
/// built with the given inputs where the constructor accepts them
pub fn all_items_with(inputs: &[Input]) -> Vec<(StepListItem, &'static CatalogEntry)> {
    let entry = |id: &str| catalog::find(id).expect("constructor step must be in catalog");
    let inputs = || inputs.to_vec();

    vec![
        (steps::activate_ssh_key(), entry("activate-ssh-key")),
        (steps::git_clone(), entry("git-clone")),
        (
            steps::certificate_and_profile_installer(),
            entry("certificate-and-profile-installer"),
        ),
        (steps::deploy_to_bitrise_io(), entry("deploy-to-bitrise-io")),
        (steps::script(), entry("script")),
        (steps::gradle_runner(inputs()), entry("gradle-runner")),
        (steps::fastlane(inputs()), entry("fastlane")),
        (steps::cocoapods_install(), entry("cocoapods-install")),
        (steps::xcode_archive(inputs()), entry("xcode-archive")),
        (steps::xcode_test(inputs()), entry("xcode-test")),
        (
            steps::xamarin_user_management(inputs()),
            entry("xamarin-user-management"),
        ),
        (steps::nuget_restore(), entry("nuget-restore")),
        (
            steps::xamarin_components_restore(),
            entry("xamarin-components-restore"),
        ),
        (steps::xamarin_builder(inputs()), entry("xamarin-builder")),
    ]
}

/// The serialized body under an item's composite key
pub fn body(item: &StepListItem) -> Value {
    let value = serde_yaml::to_value(item).expect("item should serialize");
    let mapping = value.as_mapping().expect("item should be a mapping");
    assert_eq!(mapping.len(), 1, "item should have exactly one key");
    value[item.key()].clone()
}

/// Inputs used across tests
pub fn sample_inputs() -> Vec<Input> {
    vec![
        Input::new("project_path", "$BITRISE_PROJECT_PATH"),
        Input::new("scheme", "$BITRISE_SCHEME"),
        Input::new("export_method", "development"),
    ]
}

/// Step keys of a workflow in a rendered YAML document
pub fn workflow_keys(yaml: &Value, workflow: &str) -> Vec<String> {
    yaml["workflows"][workflow]["steps"]
        .as_sequence()
        .expect("workflow should have steps")
        .iter()
        .map(|step| {
            step.as_mapping()
                .and_then(|m| m.keys().next())
                .and_then(|k| k.as_str())
                .expect("step should be keyed by a string")
                .to_string()
        })
        .collect()
}
