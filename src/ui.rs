//! Pure formatting functions for CLI output.
//!
//! All display logic lives here so command code stays free of escape
//! codes. Functions only print; they never prompt or abort.

use crate::config::{ConfigReport, ResolvedConfig};
use crate::version::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Format and print a non-fatal warning in yellow.
pub fn display_warning(message: &str) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", message);
}

/// Display the resolved configuration with per-field provenance and the
/// list of consulted sources.
pub fn display_resolved_config(report: &ConfigReport) {
    let ResolvedConfig { config, provenance } = &report.resolved;

    println!("\x1b[1mResolved configuration:\x1b[0m");
    let rows: Vec<(&str, String, &str)> = vec![
        ("debug", config.debug.to_string(), provenance.debug.as_str()),
        (
            "devBaseBranch",
            config.dev_base_branch.clone(),
            provenance.dev_base_branch.as_str(),
        ),
        (
            "productionBranch",
            config.production_branch.clone(),
            provenance.production_branch.as_str(),
        ),
        ("nickname", config.nickname.clone(), provenance.nickname.as_str()),
        (
            "featurePrefix",
            config.feature_prefix.clone(),
            provenance.feature_prefix.as_str(),
        ),
        ("fixPrefix", config.fix_prefix.clone(), provenance.fix_prefix.as_str()),
        (
            "hotfixPrefix",
            config.hotfix_prefix.clone(),
            provenance.hotfix_prefix.as_str(),
        ),
        (
            "branchCaseFormat",
            config.branch_case_format.clone(),
            provenance.branch_case_format.as_str(),
        ),
    ];

    for (key, value, source) in rows {
        println!(
            "  {:<18} \x1b[32m{:<12}\x1b[0m \x1b[36m({})\x1b[0m",
            key, value, source
        );
    }

    println!("\n\x1b[1mConfig sources (lowest to highest priority):\x1b[0m");
    println!("  - default (built-in)");
    for source in &report.sources {
        let state = if source.parse_error.is_some() {
            "unparseable"
        } else if source.exists {
            "loaded"
        } else {
            "not found"
        };
        println!("  - {}: {} ({})", source.name, source.path.display(), state);
    }
}

/// Display a version transition (or the initial version).
pub fn display_version_change(current: Option<&Version>, next: &Version) {
    match current {
        Some(current) => {
            println!("\n\x1b[1mProposed version change:\x1b[0m");
            println!("  From: \x1b[31m{}\x1b[0m", current);
            println!("  To:   \x1b[32m{}\x1b[0m", next);
        }
        None => {
            println!("\n\x1b[1mInitial version:\x1b[0m");
            println!("  New version: \x1b[32m{}\x1b[0m", next);
        }
    }
}
