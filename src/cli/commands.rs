//! CLI command definitions

use crate::core::catalog::Category;
use crate::core::Platform;
use clap::Args;

/// List pinned catalog steps
#[derive(Debug, Args, Clone)]
pub struct CatalogCommand {
    /// Only show one category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Scaffold a bitrise.yml for a project
#[derive(Debug, Args, Clone)]
pub struct InitCommand {
    /// Path to project YAML file
    #[arg(short, long, conflicts_with = "platform")]
    pub file: Option<String>,

    /// Project platform (when no project file is given)
    #[arg(short, long, value_enum, required_unless_present = "file")]
    pub platform: Option<PlatformArg>,

    /// Project name (when no project file is given)
    #[arg(long, conflicts_with = "file")]
    pub name: Option<String>,

    /// Write the definition here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Check step references in a bitrise.yml
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Path to bitrise.yml
    #[arg(short, long, default_value = "bitrise.yml")]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Platform argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlatformArg {
    Android,
    Fastlane,
    Ios,
    Xamarin,
    Other,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Android => Platform::Android,
            PlatformArg::Fastlane => Platform::Fastlane,
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Xamarin => Platform::Xamarin,
            PlatformArg::Other => Platform::Other,
        }
    }
}

/// Catalog category argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CategoryArg {
    Common,
    Android,
    Fastlane,
    Ios,
    Xamarin,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Common => Category::Common,
            CategoryArg::Android => Category::Android,
            CategoryArg::Fastlane => Category::Fastlane,
            CategoryArg::Ios => Category::Ios,
            CategoryArg::Xamarin => Category::Xamarin,
        }
    }
}
