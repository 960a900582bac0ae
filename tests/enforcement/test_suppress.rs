// Suppressions and ignore_shapes from config.
use rpclint_core::config::{LintConfig, SuppressionConfig};
use rpclint_enforce::{Severity, ValidationEngine};
use serde_json::json;

use super::common::*;

fn two_namespaces() -> rpclint_core::graph::ShapeGraph {
    graph(json!({
        "legacy#Svc": json_rpc_service(&["legacy#Bare"]),
        "legacy#Bare": bare_operation(),
        "current#Svc": json_rpc_service(&["current#Bare"]),
        "current#Bare": bare_operation(),
    }))
}

#[test]
fn test_namespace_suppression_keeps_other_namespaces() {
    let mut config = LintConfig::default();
    config.suppressions.push(SuppressionConfig {
        id: "J003".to_string(),
        namespace: "legacy".to_string(),
        reason: Some("migrating".to_string()),
    });
    let report = ValidationEngine::with_config(&config)
        .unwrap()
        .validate(&two_namespaces())
        .unwrap();

    assert_eq!(report.diagnostics.len(), 2);
    let current = &report.diagnostics[0];
    let legacy = &report.diagnostics[1];
    assert_eq!(current.shape.to_string(), "current#Bare");
    assert_eq!(current.severity, Severity::Error);
    assert_eq!(legacy.severity, Severity::Suppressed);
    assert_eq!(legacy.suppress_reason.as_deref(), Some("migrating"));
    assert_eq!(report.summary.errors, 1);
    assert_eq!(report.summary.suppressed, 1);
}

#[test]
fn test_ignore_shapes_glob() {
    let mut config = LintConfig::default();
    config.ignore_shapes.push("legacy#*".to_string());
    let report = ValidationEngine::with_config(&config)
        .unwrap()
        .validate(&two_namespaces())
        .unwrap();
    let suppressed: Vec<String> = report
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Suppressed)
        .map(|d| d.shape.to_string())
        .collect();
    assert_eq!(suppressed, vec!["legacy#Bare"]);
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("rpclint.json"),
        r#"{ "suppressions": [{ "id": "J003" }], "parallel": false }"#,
    )
    .unwrap();
    let config = LintConfig::load_from_dir(dir.path());
    assert!(!config.parallel);
    let report = ValidationEngine::with_config(&config)
        .unwrap()
        .validate(&two_namespaces())
        .unwrap();
    assert_eq!(report.status, "ok");
    assert_eq!(report.summary.suppressed, 2);
}
