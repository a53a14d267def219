//! Pinned step library catalog

use crate::core::step::StepRef;
use serde::Serialize;
use std::fmt;

// Common
pub const ACTIVATE_SSH_KEY: StepRef = StepRef::new("activate-ssh-key", "3.1.0");
pub const GIT_CLONE: StepRef = StepRef::new("git-clone", "3.2.0");
pub const CERTIFICATE_AND_PROFILE_INSTALLER: StepRef =
    StepRef::new("certificate-and-profile-installer", "1.6.0");
pub const DEPLOY_TO_BITRISE_IO: StepRef = StepRef::new("deploy-to-bitrise-io", "1.2.4");
pub const SCRIPT: StepRef = StepRef::new("script", "1.1.1");

// Android
pub const GRADLE_RUNNER: StepRef = StepRef::new("gradle-runner", "1.3.1");

// Fastlane
pub const FASTLANE: StepRef = StepRef::new("fastlane", "2.2.0");

// iOS
pub const COCOAPODS_INSTALL: StepRef = StepRef::new("cocoapods-install", "1.5.3");
pub const XCODE_ARCHIVE: StepRef = StepRef::new("xcode-archive", "1.8.3");
pub const XCODE_TEST: StepRef = StepRef::new("xcode-test", "1.13.8");

// Xamarin
pub const XAMARIN_USER_MANAGEMENT: StepRef = StepRef::new("xamarin-user-management", "1.0.2");
pub const NUGET_RESTORE: StepRef = StepRef::new("nuget-restore", "0.9.2");
pub const XAMARIN_COMPONENTS_RESTORE: StepRef =
    StepRef::new("xamarin-components-restore", "0.9.0");
pub const XAMARIN_BUILDER: StepRef = StepRef::new("xamarin-builder", "1.3.5");

/// Grouping used to organise the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Common,
    Android,
    Fastlane,
    Ios,
    Xamarin,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Common => "common",
            Category::Android => "android",
            Category::Fastlane => "fastlane",
            Category::Ios => "ios",
            Category::Xamarin => "xamarin",
        };
        f.write_str(name)
    }
}

/// A catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub step: StepRef,
    pub category: Category,

    /// Whether the step's constructor forwards caller inputs
    pub accepts_inputs: bool,
}

const fn entry(step: StepRef, category: Category, accepts_inputs: bool) -> CatalogEntry {
    CatalogEntry {
        step,
        category,
        accepts_inputs,
    }
}

static CATALOG: [CatalogEntry; 14] = [
    entry(ACTIVATE_SSH_KEY, Category::Common, false),
    entry(GIT_CLONE, Category::Common, false),
    entry(CERTIFICATE_AND_PROFILE_INSTALLER, Category::Common, false),
    entry(DEPLOY_TO_BITRISE_IO, Category::Common, false),
    entry(SCRIPT, Category::Common, false),
    entry(GRADLE_RUNNER, Category::Android, true),
    entry(FASTLANE, Category::Fastlane, true),
    entry(COCOAPODS_INSTALL, Category::Ios, false),
    entry(XCODE_ARCHIVE, Category::Ios, true),
    entry(XCODE_TEST, Category::Ios, true),
    entry(XAMARIN_USER_MANAGEMENT, Category::Xamarin, true),
    entry(NUGET_RESTORE, Category::Xamarin, false),
    entry(XAMARIN_COMPONENTS_RESTORE, Category::Xamarin, false),
    entry(XAMARIN_BUILDER, Category::Xamarin, true),
];

/// All catalog entries, grouped by category
pub fn all() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Look up a catalog entry by step id
pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.step.id == id)
}

/// Entries belonging to one category
pub fn by_category(category: Category) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |e| e.category == category)
}
