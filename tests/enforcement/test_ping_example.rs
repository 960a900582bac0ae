// Service S with Op1 (request "ping") and Op2 (notification "ping", one output member).
use serde_json::json;

use super::common::*;

#[test]
fn test_request_alone_is_clean() {
    let report = validate(json!({
        "ex#S": json_rpc_service(&["ex#Op1"]),
        "ex#Op1": with_output(request("ping"), "ex#Op1Output"),
        "ex#Op1Output": structure(&[]),
    }));
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.status, "ok");
}

#[test]
fn test_notification_collision_reports_j001_and_j004() {
    let report = validate(json!({
        "ex#S": json_rpc_service(&["ex#Op1", "ex#Op2"]),
        "ex#Op1": with_output(request("ping"), "ex#Op1Output"),
        "ex#Op1Output": structure(&[]),
        "ex#Op2": with_output(notification("ping"), "ex#Op2Output"),
        "ex#Op2Output": structure(&[("x", "smithy.api#String")]),
    }));
    assert_eq!(report.status, "error");

    let on_op2: Vec<&str> = report
        .diagnostics
        .iter()
        .filter(|d| d.shape.to_string() == "ex#Op2")
        .map(|d| d.code.as_str())
        .collect();
    assert_eq!(on_op2, vec!["J001", "J004"]);

    let j004: Vec<String> = report
        .diagnostics
        .iter()
        .filter(|d| d.code == "J004")
        .map(|d| d.shape.to_string())
        .collect();
    assert_eq!(j004, vec!["ex#Op1", "ex#Op2"]);
    assert!(report.diagnostics.iter().all(|d| d.severity.as_str() == "ERROR"));
}
