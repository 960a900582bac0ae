use globset::{Glob, GlobSet, GlobSetBuilder};
use rpclint_core::config::SuppressionConfig;

use crate::types::{ConfigError, Diagnostic, Severity};

/// Manages suppressed rule codes and ignored shapes.
///
/// When a diagnostic is suppressed it keeps its code and message, its severity
/// becomes `SUPPRESSED`, and `suppress_reason` explains why.
#[derive(Debug)]
pub struct SuppressionManager {
    suppressions: Vec<SuppressionConfig>,
    ignore_patterns: Vec<String>,
    ignored_shapes: GlobSet,
}

impl Default for SuppressionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self {
            suppressions: Vec::new(),
            ignore_patterns: Vec::new(),
            ignored_shapes: GlobSet::empty(),
        }
    }

    /// Build from configured suppressions and `ignore_shapes` globs.
    pub fn from_config(
        suppressions: &[SuppressionConfig],
        ignore_patterns: &[String],
    ) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        for suppression in suppressions {
            manager.add(suppression.clone());
        }
        for pattern in ignore_patterns {
            manager.ignore_shapes(pattern)?;
        }
        Ok(manager)
    }

    /// Suppress a rule code everywhere (e.g. "J003").
    pub fn suppress(&mut self, code: &str) {
        self.add(SuppressionConfig {
            id: code.to_string(),
            namespace: "*".to_string(),
            reason: None,
        });
    }

    pub fn add(&mut self, suppression: SuppressionConfig) {
        self.suppressions.push(suppression);
    }

    /// Suppress every diagnostic whose shape id matches `pattern`.
    pub fn ignore_shapes(&mut self, pattern: &str) -> Result<(), ConfigError> {
        let invalid = |source| ConfigError::InvalidIgnorePattern {
            pattern: pattern.to_string(),
            source,
        };
        let glob = Glob::new(pattern).map_err(invalid)?;
        let mut builder = GlobSetBuilder::new();
        for p in &self.ignore_patterns {
            builder.add(Glob::new(p).map_err(invalid)?);
        }
        builder.add(glob);
        self.ignored_shapes = builder.build().map_err(invalid)?;
        self.ignore_patterns.push(pattern.to_string());
        Ok(())
    }

    /// Apply suppression to a diagnostic, returning the modified diagnostic.
    /// If nothing matches, returns the diagnostic unchanged.
    pub fn apply(&self, mut diagnostic: Diagnostic) -> Diagnostic {
        let reason = self.reason_for(&diagnostic);
        if let Some(reason) = reason {
            diagnostic.severity = Severity::Suppressed;
            diagnostic.suppress_reason = Some(reason);
        }
        diagnostic
    }

    fn reason_for(&self, diagnostic: &Diagnostic) -> Option<String> {
        let namespace = diagnostic.shape.namespace();
        if let Some(s) = self
            .suppressions
            .iter()
            .find(|s| s.id == diagnostic.code && (s.namespace == "*" || s.namespace == namespace))
        {
            return Some(
                s.reason
                    .clone()
                    .unwrap_or_else(|| format!("Suppressed {} in namespace {}", s.id, s.namespace)),
            );
        }
        if self.ignored_shapes.is_match(diagnostic.shape.to_string()) {
            return Some(format!("Shape {} matches ignore_shapes", diagnostic.shape));
        }
        None
    }

    /// Number of active suppressions, counting each ignore pattern.
    pub fn count(&self) -> usize {
        self.suppressions.len() + self.ignore_patterns.len()
    }
}
