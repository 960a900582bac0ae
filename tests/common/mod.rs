
use std::fs;
use std::path::PathBuf;

use rpclint_core::graph::ShapeGraph;
use rpclint_core::loader::parse_model;
use rpclint_enforce::types::ValidationReport;
use rpclint_enforce::ValidationEngine;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

/// Wrap a `shapes` object into a Smithy 2.0 JSON AST document.
#[allow(dead_code)]
pub fn document(shapes: Value) -> Value {
    json!({ "smithy": "2.0", "shapes": shapes })
}

/// Parse a `shapes` object into a graph, panicking on load errors.
#[allow(dead_code)]
pub fn graph(shapes: Value) -> ShapeGraph {
    parse_model(&document(shapes).to_string()).expect("model should load")
}

/// Validate with default traits and every rule enabled.
#[allow(dead_code)]
pub fn validate(shapes: Value) -> ValidationReport {
    ValidationEngine::default()
        .validate(&graph(shapes))
        .expect("validation should not hit a model error")
}

/// `(code, shape)` pairs of a report, in report order.
#[allow(dead_code)]
pub fn findings(report: &ValidationReport) -> Vec<(String, String)> {
    report
        .diagnostics
        .iter()
        .map(|d| (d.code.clone(), d.shape.to_string()))
        .collect()
}

/// A service carrying `@jsonRPC` and binding the given operations.
#[allow(dead_code)]
pub fn json_rpc_service(ops: &[&str]) -> Value {
    json!({
        "type": "service",
        "version": "1.0",
        "operations": targets(ops),
        "traits": { "jsonrpclib#jsonRPC": {} }
    })
}

/// A service without any JSON-RPC trait.
#[allow(dead_code)]
pub fn plain_service(ops: &[&str]) -> Value {
    json!({ "type": "service", "operations": targets(ops) })
}

/// A resource binding the given operations.
#[allow(dead_code)]
pub fn resource(ops: &[&str]) -> Value {
    json!({ "type": "resource", "operations": targets(ops) })
}

/// Bind child resources to a service or resource value.
#[allow(dead_code)]
pub fn with_resources(mut container: Value, resources: &[&str]) -> Value {
    container["resources"] = targets(resources);
    container
}

#[allow(dead_code)]
pub fn request(method: &str) -> Value {
    json!({ "type": "operation", "traits": { "jsonrpclib#jsonRequest": method } })
}

#[allow(dead_code)]
pub fn notification(method: &str) -> Value {
    json!({ "type": "operation", "traits": { "jsonrpclib#jsonNotification": method } })
}

#[allow(dead_code)]
pub fn bare_operation() -> Value {
    json!({ "type": "operation" })
}

/// Set an operation's output target.
#[allow(dead_code)]
pub fn with_output(mut op: Value, output: &str) -> Value {
    op["output"] = json!({ "target": output });
    op
}

/// Set an operation's input target.
#[allow(dead_code)]
pub fn with_input(mut op: Value, input: &str) -> Value {
    op["input"] = json!({ "target": input });
    op
}

/// Structure whose members target `smithy.api#String` unless given a target.
#[allow(dead_code)]
pub fn structure(members: &[(&str, &str)]) -> Value {
    let mut map = Map::new();
    for (name, target) in members {
        map.insert(name.to_string(), json!({ "target": target }));
    }
    json!({ "type": "structure", "members": map })
}

/// Mark one member of a structure value with `@jsonPayload`.
#[allow(dead_code)]
pub fn payload(mut structure: Value, member: &str) -> Value {
    structure["members"][member]["traits"] = json!({ "jsonrpclib#jsonPayload": {} });
    structure
}

fn targets(ops: &[&str]) -> Value {
    Value::Array(ops.iter().map(|op| json!({ "target": op })).collect())
}

/// Write a model document into a fresh temp dir.
///
/// Returns (TempDir, path). Hold the TempDir to keep the file alive.
#[allow(dead_code)]
pub fn write_model(shapes: Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, serde_json::to_string_pretty(&document(shapes)).unwrap()).unwrap();
    (dir, path)
}
