//! iOS steps

use crate::core::catalog::{COCOAPODS_INSTALL, XCODE_ARCHIVE, XCODE_TEST};
use crate::core::step::{step_list_item, Input, StepListItem};

/// Install CocoaPods dependencies
pub fn cocoapods_install() -> StepListItem {
    step_list_item(COCOAPODS_INSTALL, None, None, Vec::new())
}

/// Archive and export the iOS app
pub fn xcode_archive(inputs: Vec<Input>) -> StepListItem {
    step_list_item(XCODE_ARCHIVE, None, None, inputs)
}

/// Run Xcode tests
pub fn xcode_test(inputs: Vec<Input>) -> StepListItem {
    step_list_item(XCODE_TEST, None, None, inputs)
}
