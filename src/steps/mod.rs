//! Step list item constructors, one per catalog step

#![warn(missing_docs)]

pub mod android;
pub mod common;
pub mod fastlane;
pub mod ios;
pub mod xamarin;

pub use android::*;
pub use common::*;
pub use fastlane::*;
pub use ios::*;
pub use xamarin::*;
