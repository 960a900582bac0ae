/// Contract tests for `rpclint rules --json` output.
use rpclint_enforce::ValidationEngine;
use rpclint_output::json::JsonFormatter;
use rpclint_output::OutputFormatter;

use super::test_schema_helpers::validate_against_schema;

#[test]
fn rules_listing_matches_schema() {
    let mut engine = ValidationEngine::default();
    engine.disable("J002").unwrap();
    let out = JsonFormatter.format_rules(&engine.rule_infos());
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    validate_against_schema(&value, include_str!("../schemas/rules_output.schema.json"));

    let rules = value["rules"].as_array().unwrap();
    let names: Vec<&str> = rules.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "JsonNotificationOutput",
            "JsonPayload",
            "JsonRpcOperation",
            "UniqueJsonRpcMethodNames"
        ]
    );
    assert_eq!(rules[1]["enabled"], false);
}
