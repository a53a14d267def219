//! Fastlane steps

use crate::core::catalog::FASTLANE;
use crate::core::step::{step_list_item, Input, StepListItem};

/// Run a fastlane lane
pub fn fastlane(inputs: Vec<Input>) -> StepListItem {
    step_list_item(FASTLANE, None, None, inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastlane() {
        let item = fastlane(vec![Input::new("lane", "ios test")]);
        assert_eq!(item.key(), "fastlane@2.2.0");
        assert_eq!(item.inputs(), &[Input::new("lane", "ios test")]);
        assert_eq!(item.run_if(), None);
    }
}
