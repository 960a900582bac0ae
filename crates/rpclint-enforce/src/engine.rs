use rayon::prelude::*;
use rpclint_core::config::LintConfig;
use rpclint_core::graph::ShapeGraph;
use rpclint_core::traits::JsonRpcTraits;
use rpclint_core::types::ModelError;

use crate::rules::{self, Rule, ValidationContext};
use crate::suppress::SuppressionManager;
use crate::types::{
    sort_diagnostics, ConfigError, Diagnostic, ReportSummary, RuleInfo, Severity, ValidationReport,
};

/// Core validation engine. Owns the rule set and orchestrates a pass.
pub struct ValidationEngine {
    pub(crate) rules: Vec<Box<dyn Rule>>,
    pub(crate) disabled: Vec<Box<dyn Rule>>,
    pub(crate) traits: JsonRpcTraits,
    pub(crate) suppressions: SuppressionManager,
    pub(crate) parallel: bool,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(JsonRpcTraits::default())
    }
}

impl ValidationEngine {
    /// All rules enabled, evaluated in parallel.
    pub fn new(traits: JsonRpcTraits) -> Self {
        Self {
            rules: rules::all_rules(),
            disabled: Vec::new(),
            traits,
            suppressions: SuppressionManager::new(),
            parallel: true,
        }
    }

    /// Create an engine configured from a `LintConfig`.
    pub fn with_config(config: &LintConfig) -> Result<Self, ConfigError> {
        let traits = JsonRpcTraits::from_config(&config.traits)?;
        let enabled: Vec<&'static str> = rules::rules_from_config(&config.rules)
            .iter()
            .map(|r| r.code())
            .collect();
        let (rules, disabled): (Vec<Box<dyn Rule>>, Vec<Box<dyn Rule>>) = rules::all_rules()
            .into_iter()
            .partition(|rule| enabled.contains(&rule.code()));
        let suppressions =
            SuppressionManager::from_config(&config.suppressions, &config.ignore_shapes)?;
        tracing::debug!(
            enabled = rules.len(),
            disabled = disabled.len(),
            suppressions = suppressions.count(),
            "engine configured"
        );
        Ok(Self {
            rules,
            disabled,
            traits,
            suppressions,
            parallel: config.parallel,
        })
    }

    /// Suppress a specific rule code.
    pub fn suppress(&mut self, code: &str) -> Result<(), ConfigError> {
        if !rules::is_known_rule(code) {
            return Err(ConfigError::UnknownRule(code.to_string()));
        }
        self.suppressions.suppress(code);
        Ok(())
    }

    /// Stop evaluating a rule.
    pub fn disable(&mut self, code: &str) -> Result<(), ConfigError> {
        if !rules::is_known_rule(code) {
            return Err(ConfigError::UnknownRule(code.to_string()));
        }
        if let Some(pos) = self.rules.iter().position(|r| r.code() == code) {
            let rule = self.rules.remove(pos);
            self.disabled.push(rule);
        }
        Ok(())
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn traits(&self) -> &JsonRpcTraits {
        &self.traits
    }

    /// Enabled and disabled rules, in code order.
    pub fn rule_infos(&self) -> Vec<RuleInfo> {
        let mut infos: Vec<RuleInfo> = self
            .rules
            .iter()
            .map(|r| r.info(true))
            .chain(self.disabled.iter().map(|r| r.info(false)))
            .collect();
        infos.sort_by(|a, b| a.code.cmp(&b.code));
        infos
    }

    /// Run every enabled rule over the graph.
    ///
    /// Either the full diagnostic list is produced or the first model error
    /// (in rule order) is returned; there is no partial report.
    #[tracing::instrument(skip_all, fields(shapes = graph.len(), parallel = self.parallel))]
    pub fn validate(&self, graph: &ShapeGraph) -> Result<ValidationReport, ModelError> {
        let ctx = ValidationContext::new(graph, &self.traits);

        // Each rule fills its own buffer; buffers keep rule order either way.
        let outcomes: Vec<Result<Vec<Diagnostic>, ModelError>> = if self.parallel {
            self.rules
                .par_iter()
                .map(|rule| run_rule(rule.as_ref(), &ctx))
                .collect()
        } else {
            self.rules
                .iter()
                .map(|rule| run_rule(rule.as_ref(), &ctx))
                .collect()
        };

        let mut diagnostics = Vec::new();
        for outcome in outcomes {
            diagnostics.extend(outcome?);
        }

        let mut diagnostics: Vec<Diagnostic> = diagnostics
            .into_iter()
            .map(|d| self.suppressions.apply(d))
            .collect();
        sort_diagnostics(&mut diagnostics);

        let summary = summarize(&diagnostics);
        let status = if summary.errors > 0 { "error" } else { "ok" };
        tracing::debug!(
            errors = summary.errors,
            suppressed = summary.suppressed,
            "validation finished"
        );

        Ok(ValidationReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "validate".to_string(),
            status: status.to_string(),
            shapes_checked: graph.len(),
            rules_run: self.rules.iter().map(|r| r.code().to_string()).collect(),
            diagnostics,
            summary,
        })
    }
}

fn run_rule(rule: &dyn Rule, ctx: &ValidationContext<'_>) -> Result<Vec<Diagnostic>, ModelError> {
    let result = rule.validate(ctx);
    match &result {
        Ok(diagnostics) => {
            tracing::debug!(rule = rule.code(), diagnostics = diagnostics.len(), "rule evaluated")
        }
        Err(e) => tracing::debug!(rule = rule.code(), error = %e, "rule aborted"),
    }
    result
}

fn summarize(diagnostics: &[Diagnostic]) -> ReportSummary {
    let mut summary = ReportSummary::default();
    for d in diagnostics {
        match d.severity {
            Severity::Error => summary.errors += 1,
            Severity::Suppressed => summary.suppressed += 1,
        }
    }
    summary
}

/// Validate a graph with default trait ids and every rule enabled.
pub fn validate(graph: &ShapeGraph) -> Result<Vec<Diagnostic>, ModelError> {
    Ok(ValidationEngine::default().validate(graph)?.diagnostics)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
