//! Xamarin steps

use crate::core::catalog::{
    NUGET_RESTORE, XAMARIN_BUILDER, XAMARIN_COMPONENTS_RESTORE, XAMARIN_USER_MANAGEMENT,
};
use crate::core::step::{step_list_item, Input, StepListItem};

/// Guard restricting user management to CI builds
pub const IS_CI_RUN_IF: &str = ".IsCI";

/// Log in to Xamarin, CI builds only
pub fn xamarin_user_management(inputs: Vec<Input>) -> StepListItem {
    step_list_item(XAMARIN_USER_MANAGEMENT, None, Some(IS_CI_RUN_IF), inputs)
}

/// Restore NuGet packages
pub fn nuget_restore() -> StepListItem {
    step_list_item(NUGET_RESTORE, None, None, Vec::new())
}

/// Restore Xamarin components
pub fn xamarin_components_restore() -> StepListItem {
    step_list_item(XAMARIN_COMPONENTS_RESTORE, None, None, Vec::new())
}

/// Build the Xamarin solution
pub fn xamarin_builder(inputs: Vec<Input>) -> StepListItem {
    step_list_item(XAMARIN_BUILDER, None, None, inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_management_is_guarded() {
        let item = xamarin_user_management(Vec::new());
        assert_eq!(item.key(), "xamarin-user-management@1.0.2");
        assert_eq!(item.run_if(), Some(".IsCI"));
        assert_eq!(item.title(), None);
    }

    #[test]
    fn test_restore_steps() {
        assert_eq!(nuget_restore().key(), "nuget-restore@0.9.2");
        assert_eq!(
            xamarin_components_restore().key(),
            "xamarin-components-restore@0.9.0"
        );
    }

    #[test]
    fn test_xamarin_builder() {
        let inputs = vec![
            Input::new("xamarin_solution", "$BITRISE_PROJECT_PATH"),
            Input::new("xamarin_configuration", "$BITRISE_XAMARIN_CONFIGURATION"),
        ];
        let item = xamarin_builder(inputs.clone());
        assert_eq!(item.key(), "xamarin-builder@1.3.5");
        assert_eq!(item.inputs(), inputs.as_slice());
    }
}
