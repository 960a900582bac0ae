use crate::OutputFormatter;
use rpclint_enforce::types::{RuleInfo, ValidationReport};
use serde::Serialize;

pub struct JsonFormatter;

/// Envelope for `rpclint rules --json`.
#[derive(Serialize)]
struct RulesListing<'a> {
    version: &'static str,
    command: &'static str,
    rules: &'a [RuleInfo],
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ValidationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        let listing = RulesListing {
            version: env!("CARGO_PKG_VERSION"),
            command: "rules",
            rules,
        };
        serde_json::to_string_pretty(&listing).unwrap_or_default()
    }
}
