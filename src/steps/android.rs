//! Android steps

use crate::core::catalog::GRADLE_RUNNER;
use crate::core::step::{step_list_item, Input, StepListItem};

/// Run a Gradle task
pub fn gradle_runner(inputs: Vec<Input>) -> StepListItem {
    step_list_item(GRADLE_RUNNER, None, None, inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradle_runner_forwards_inputs_in_order() {
        let inputs = vec![
            Input::new("gradle_file", "$GRADLE_BUILD_FILE_PATH"),
            Input::new("gradle_task", "assembleRelease"),
            Input::new("gradlew_path", "$GRADLEW_PATH"),
        ];

        let item = gradle_runner(inputs.clone());
        assert_eq!(item.key(), "gradle-runner@1.3.1");
        assert_eq!(item.inputs(), inputs.as_slice());
    }

    #[test]
    fn test_gradle_runner_without_inputs() {
        let item = gradle_runner(Vec::new());
        assert!(item.inputs().is_empty());

        let value = serde_yaml::to_value(&item).unwrap();
        assert!(value["gradle-runner@1.3.1"].get("inputs").is_none());
    }
}
