use rpclint_core::shape::ShapeId;
use rpclint_core::types::ModelError;
use serde::{Deserialize, Serialize};

/// Diagnostic severity. Every rule reports `Error`; a matching suppression
/// turns it into `Suppressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    Suppressed,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Suppressed => "SUPPRESSED",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub rule: String,
    pub severity: Severity,
    pub shape: ShapeId,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suppress_reason: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &str, rule: &str, shape: &ShapeId, message: String) -> Self {
        Self {
            code: code.to_string(),
            rule: rule.to_string(),
            severity: Severity::Error,
            shape: shape.clone(),
            message,
            suppress_reason: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Total order used for the final merge: rule code, then shape, then message.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|a, b| {
        a.code
            .cmp(&b.code)
            .then_with(|| a.shape.cmp(&b.shape))
            .then_with(|| a.message.cmp(&b.message))
    });
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error"
    pub shapes_checked: usize,
    pub rules_run: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub errors: u32,
    pub suppressed: u32,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }
}

/// Static description of a rule, for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub code: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

/// Errors raised while turning a [`LintConfig`](rpclint_core::config::LintConfig)
/// into an engine.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid trait id in config: {0}")]
    InvalidTraitId(#[from] ModelError),

    #[error("invalid ignore_shapes pattern {pattern:?}: {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("unknown rule code {0:?}")]
    UnknownRule(String),
}
