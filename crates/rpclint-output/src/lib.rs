//! Output formatters for rpclint command results.
//!
//! Provides two output modes:
//! - **JSON** (`--json`): Machine-readable structured output
//! - **Human** (default): Plain terminal output, one line per diagnostic

pub mod human;
pub mod json;

use rpclint_enforce::types::{RuleInfo, ValidationReport};

pub trait OutputFormatter {
    fn format_report(&self, report: &ValidationReport) -> String;
    fn format_rules(&self, rules: &[RuleInfo]) -> String;
}
