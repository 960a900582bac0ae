// Parallel and sequential evaluation agree on large generated models.
use rpclint_core::graph::ShapeGraph;
use rpclint_core::loader::parse_model;
use rpclint_enforce::ValidationEngine;

use super::common::document;
use super::common::generators::generate_model;

const SERVICES: usize = 8;
const OPS: usize = 40;

fn generated() -> ShapeGraph {
    parse_model(&document(generate_model(SERVICES, OPS)).to_string()).unwrap()
}

fn count(code: &str, report: &rpclint_enforce::ValidationReport) -> usize {
    report.diagnostics.iter().filter(|d| d.code == code).count()
}

#[test]
fn test_parallel_matches_sequential() {
    let graph = generated();
    let parallel = ValidationEngine::default().validate(&graph).unwrap();
    let mut engine = ValidationEngine::default();
    engine.set_parallel(false);
    let sequential = engine.validate(&graph).unwrap();
    assert_eq!(parallel.diagnostics, sequential.diagnostics);
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = generated();
    let engine = ValidationEngine::default();
    let first = engine.validate(&graph).unwrap();
    for _ in 0..3 {
        assert_eq!(engine.validate(&graph).unwrap().diagnostics, first.diagnostics);
    }
}

#[test]
fn test_generated_counts() {
    let report = ValidationEngine::default().validate(&generated()).unwrap();

    let bare = (0..OPS).filter(|o| o % 7 == 6).count();
    let noisy_notifications = (0..OPS).filter(|o| o % 7 != 6 && o % 5 == 4).count();
    let reused = (0..OPS).filter(|o| o % 7 != 6 && o % 11 == 10).count();

    assert_eq!(count("J001", &report), SERVICES * noisy_notifications);
    assert_eq!(count("J002", &report), SERVICES);
    assert_eq!(count("J003", &report), SERVICES * bare);
    // Each collision group is Op0 plus every operation reusing its name.
    assert_eq!(count("J004", &report), SERVICES * (reused + 1));
}
