//! Default workflow layouts per platform

use crate::core::catalog;
use crate::core::config::{Platform, ProjectConfig};
use crate::core::pipeline::{BitriseConfig, Workflow};
use crate::core::step::{Input, StepListItem};
use crate::steps;
use tracing::{debug, info};

pub const PRIMARY_WORKFLOW: &str = "primary";
pub const DEPLOY_WORKFLOW: &str = "deploy";

/// App env carrying the project name
pub const APP_TITLE_ENV: &str = "BITRISE_APP_TITLE";

/// Wrap platform steps with the common prelude and the deploy step
fn workflow_with(platform_steps: Vec<StepListItem>) -> Workflow {
    let mut workflow = Workflow::new()
        .with_step(steps::activate_ssh_key())
        .with_step(steps::git_clone())
        .with_step(steps::script());

    for step in platform_steps {
        workflow.push(step);
    }

    workflow.with_step(steps::deploy_to_bitrise_io())
}

fn ios_steps(project: &ProjectConfig, archive: bool) -> Vec<StepListItem> {
    let mut items = vec![steps::certificate_and_profile_installer()];
    if project.cocoapods {
        items.push(steps::cocoapods_install());
    }
    items.push(steps::xcode_test(project.inputs_for(catalog::XCODE_TEST.id)));
    if archive {
        items.push(steps::xcode_archive(
            project.inputs_for(catalog::XCODE_ARCHIVE.id),
        ));
    }
    items
}

/// Build the default workflows for a project
pub fn default_workflows(project: &ProjectConfig) -> Vec<(&'static str, Workflow)> {
    match project.platform {
        Platform::Android => vec![(
            PRIMARY_WORKFLOW,
            workflow_with(vec![steps::gradle_runner(
                project.inputs_for(catalog::GRADLE_RUNNER.id),
            )]),
        )],
        Platform::Fastlane => vec![(
            PRIMARY_WORKFLOW,
            workflow_with(vec![
                steps::certificate_and_profile_installer(),
                steps::fastlane(project.inputs_for(catalog::FASTLANE.id)),
            ]),
        )],
        Platform::Ios => vec![
            (PRIMARY_WORKFLOW, workflow_with(ios_steps(project, false))),
            (DEPLOY_WORKFLOW, workflow_with(ios_steps(project, true))),
        ],
        Platform::Xamarin => vec![(
            PRIMARY_WORKFLOW,
            workflow_with(vec![
                steps::certificate_and_profile_installer(),
                steps::xamarin_user_management(
                    project.inputs_for(catalog::XAMARIN_USER_MANAGEMENT.id),
                ),
                steps::nuget_restore(),
                steps::xamarin_components_restore(),
                steps::xamarin_builder(project.inputs_for(catalog::XAMARIN_BUILDER.id)),
            ]),
        )],
        Platform::Other => vec![(PRIMARY_WORKFLOW, workflow_with(Vec::new()))],
    }
}

/// Scaffold a complete pipeline definition for a project
pub fn default_config(project: &ProjectConfig) -> BitriseConfig {
    let mut config = BitriseConfig::default();

    if let Some(name) = project.name.as_deref().filter(|n| !n.is_empty()) {
        config.app.envs.push(Input::new(APP_TITLE_ENV, name));
    }

    for (name, workflow) in default_workflows(project) {
        debug!(workflow = name, steps = workflow.steps.len(), "Scaffolded workflow");
        config.add_workflow(name, workflow);
    }

    info!(
        platform = %project.platform,
        workflows = config.workflows.len(),
        "Scaffolded pipeline definition"
    );

    config
}
