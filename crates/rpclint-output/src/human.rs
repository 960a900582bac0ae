use crate::OutputFormatter;
use rpclint_enforce::types::{Diagnostic, RuleInfo, Severity, ValidationReport};

pub struct HumanFormatter;

fn format_diagnostic_human(d: &Diagnostic) -> String {
    let label = match d.severity {
        Severity::Error => "error",
        Severity::Suppressed => "suppressed",
    };
    let mut out = format!("{}[{}]: {}\n  --> {}\n", label, d.code, d.message, d.shape);
    if let Some(reason) = &d.suppress_reason {
        out.push_str(&format!("   = {}\n", reason));
    }
    out
}

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &ValidationReport) -> String {
        if report.diagnostics.is_empty() {
            return String::new(); // Clean model = empty stdout
        }

        let mut out = String::new();
        for d in &report.diagnostics {
            out.push_str(&format_diagnostic_human(d));
        }

        out.push_str(&format!(
            "\n{} error(s), {} suppressed in {} shape(s)\n",
            report.summary.errors, report.summary.suppressed, report.shapes_checked,
        ));
        out
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> String {
        let mut out = String::new();
        for rule in rules {
            let state = if rule.enabled { "" } else { " (disabled)" };
            out.push_str(&format!(
                "{}  {}{}\n      {}\n",
                rule.code, rule.name, state, rule.description,
            ));
        }
        out
    }
}
