// J002: @jsonPayload only on top-level members of operation structures.
use serde_json::json;

use super::common::*;

const MESSAGE: &str =
    "'@jsonPayload' can only be used on top-level members of operation input/output/error structures.";

#[test]
fn test_payload_on_input_output_and_error_members_is_clean() {
    let mut op = with_output(with_input(request("get"), "ex#In"), "ex#Out");
    op["errors"] = json!([{ "target": "ex#Oops" }]);
    let report = validate(json!({
        "ex#Get": op,
        "ex#In": payload(structure(&[("body", "smithy.api#Document")]), "body"),
        "ex#Out": payload(structure(&[("body", "smithy.api#Document")]), "body"),
        "ex#Oops": payload(structure(&[("detail", "smithy.api#String")]), "detail"),
    }));
    assert!(report.diagnostics.is_empty(), "{:?}", report.diagnostics);
}

#[test]
fn test_nested_payload_fires() {
    let report = validate(json!({
        "ex#Get": with_input(request("get"), "ex#In"),
        "ex#In": structure(&[("wrapper", "ex#Wrapper")]),
        "ex#Wrapper": payload(structure(&[("inner", "smithy.api#String")]), "inner"),
    }));
    assert_eq!(findings(&report), vec![("J002".to_string(), "ex#Wrapper$inner".to_string())]);
    assert_eq!(report.diagnostics[0].message, MESSAGE);
}

#[test]
fn test_payload_on_unrelated_structure_fires() {
    let report = validate(json!({
        "ex#Loose": payload(structure(&[("body", "smithy.api#String")]), "body"),
    }));
    assert_eq!(findings(&report), vec![("J002".to_string(), "ex#Loose$body".to_string())]);
}

#[test]
fn test_every_misplaced_payload_is_reported() {
    let report = validate(json!({
        "ex#A": payload(structure(&[("x", "smithy.api#String")]), "x"),
        "ex#B": payload(structure(&[("y", "smithy.api#String")]), "y"),
    }));
    assert_eq!(
        findings(&report),
        vec![
            ("J002".to_string(), "ex#A$x".to_string()),
            ("J002".to_string(), "ex#B$y".to_string()),
        ]
    );
}

#[test]
fn test_shared_structure_is_allowed_if_any_operation_uses_it() {
    let report = validate(json!({
        "ex#Get": with_input(request("get"), "ex#Shared"),
        "ex#Shared": payload(structure(&[("body", "smithy.api#String")]), "body"),
        "ex#Holder": structure(&[("shared", "ex#Shared")]),
    }));
    assert!(report.diagnostics.is_empty());
}
