// Loading JSON AST model files into a shape graph.
use std::fs;

use rpclint_core::loader::{load_model, LoadError, ModelLoader};
use rpclint_core::shape::ShapeId;
use rpclint_core::types::ShapeKind;
use serde_json::json;
use tempfile::TempDir;

use super::common::*;

fn id(s: &str) -> ShapeId {
    s.parse().unwrap()
}

#[test]
fn test_load_model_from_file() {
    let (_dir, path) = write_model(json!({
        "ex#Svc": json_rpc_service(&["ex#Ping"]),
        "ex#Ping": with_input(request("ping"), "ex#PingInput"),
        "ex#PingInput": structure(&[("name", "smithy.api#String")]),
    }));
    let graph = load_model(&path).unwrap();

    assert_eq!(graph.expect_shape(&id("ex#Svc")).unwrap().kind(), ShapeKind::Service);
    assert_eq!(graph.expect_operation(&id("ex#Ping")).unwrap().kind(), ShapeKind::Operation);
    assert!(graph.contains(&id("ex#PingInput$name")));
    assert!(graph.contains(&id("smithy.api#Unit")));
}

#[test]
fn test_documents_merge_into_one_graph() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, document(json!({ "ex#Svc": json_rpc_service(&["ex#Ping"]) })).to_string()).unwrap();
    fs::write(&b, document(json!({ "ex#Ping": request("ping") })).to_string()).unwrap();

    let mut loader = ModelLoader::new();
    loader.load_path(&a).unwrap().load_path(&b).unwrap();
    assert_eq!(loader.documents(), 2);
    let graph = loader.assemble().unwrap();

    let svc = graph.expect_shape(&id("ex#Svc")).unwrap();
    let ops = graph.service_operations(svc).unwrap();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].id(), &id("ex#Ping"));
}

#[test]
fn test_duplicate_shape_across_documents() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, document(json!({ "ex#Ping": request("ping") })).to_string()).unwrap();
    fs::write(&b, document(json!({ "ex#Ping": request("pong") })).to_string()).unwrap();

    let mut loader = ModelLoader::new();
    loader.load_path(&a).unwrap().load_path(&b).unwrap();
    assert!(matches!(loader.assemble(), Err(LoadError::Model(_))));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_model(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"smithy\": ").unwrap();
    assert!(matches!(load_model(&path), Err(LoadError::Json { .. })));
}

#[test]
fn test_unsupported_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("old.json");
    fs::write(&path, r#"{ "smithy": "0.4", "shapes": {} }"#).unwrap();
    assert!(matches!(load_model(&path), Err(LoadError::UnsupportedVersion { .. })));
}

#[test]
fn test_resource_model_loads_and_binds_operations() {
    let (_dir, path) = write_model(json!({
        "ex#Svc": {
            "type": "service",
            "resources": [{ "target": "ex#Thing" }],
            "traits": { "jsonrpclib#jsonRPC": {} }
        },
        "ex#Thing": { "type": "resource", "operations": [{ "target": "ex#Bare" }] },
        "ex#Bare": { "type": "operation" },
    }));
    let graph = load_model(&path).unwrap();

    assert_eq!(graph.expect_shape(&id("ex#Thing")).unwrap().kind(), ShapeKind::Resource);
    let svc = graph.expect_shape(&id("ex#Svc")).unwrap();
    let ops = graph.service_operations(svc).unwrap();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].id(), &id("ex#Bare"));
}

#[test]
fn test_structure_members_keep_file_order() {
    let (_dir, path) = write_model(json!({
        "ex#S": {
            "type": "structure",
            "members": {
                "z": { "target": "smithy.api#String" },
                "a": { "target": "smithy.api#String" }
            }
        },
    }));
    let graph = load_model(&path).unwrap();
    assert_eq!(
        graph.expect_shape(&id("ex#S")).unwrap().members(),
        &[id("ex#S$z"), id("ex#S$a")]
    );
}
