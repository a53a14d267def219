//! Steps shared by every platform

use crate::core::catalog::{
    ACTIVATE_SSH_KEY, CERTIFICATE_AND_PROFILE_INSTALLER, DEPLOY_TO_BITRISE_IO, GIT_CLONE, SCRIPT,
};
use crate::core::step::{step_list_item, StepListItem};

/// Guard that skips the step when no SSH key is configured
pub const SSH_KEY_RUN_IF: &str = r#"{{getenv "SSH_RSA_PRIVATE_KEY" | ne ""}}"#;

/// Title given to the placeholder script step
pub const SCRIPT_TITLE: &str = "Do anything with Script step";

/// Activate the SSH key, skipped when none is configured
pub fn activate_ssh_key() -> StepListItem {
    step_list_item(ACTIVATE_SSH_KEY, None, Some(SSH_KEY_RUN_IF), Vec::new())
}

/// Clone the app repository
pub fn git_clone() -> StepListItem {
    step_list_item(GIT_CLONE, None, None, Vec::new())
}

/// Install code signing certificates and provisioning profiles
pub fn certificate_and_profile_installer() -> StepListItem {
    step_list_item(CERTIFICATE_AND_PROFILE_INSTALLER, None, None, Vec::new())
}

/// Upload build artifacts to Bitrise.io
pub fn deploy_to_bitrise_io() -> StepListItem {
    step_list_item(DEPLOY_TO_BITRISE_IO, None, None, Vec::new())
}

/// Placeholder script step with a fixed title
pub fn script() -> StepListItem {
    step_list_item(SCRIPT, Some(SCRIPT_TITLE), None, Vec::new())
}
