//! CLI output formatting

use crate::core::audit::{Finding, FindingKind};
use crate::core::catalog::CatalogEntry;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");

/// Format a catalog row for display
pub fn format_catalog_entry(entry: &CatalogEntry) -> String {
    let inputs = if entry.accepts_inputs {
        style("inputs").dim().to_string()
    } else {
        String::new()
    };

    format!(
        "  {} {} {}",
        style(format!("{:<10}", entry.category)).cyan(),
        style(entry.step.composite()).bold(),
        inputs
    )
    .trim_end()
    .to_string()
}

/// Format an audit finding for display
pub fn format_finding(finding: &Finding) -> String {
    let icon = match finding.kind {
        FindingKind::Outdated { .. }
        | FindingKind::Unpinned { .. }
        | FindingKind::External { .. } => WARN,
        FindingKind::Unknown | FindingKind::Invalid { .. } => CROSS,
    };

    format!("{} {}", icon, finding)
}
