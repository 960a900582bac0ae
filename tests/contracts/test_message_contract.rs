/// The diagnostic wording is surfaced verbatim to users; pin each template.
use rpclint_core::loader::parse_model;
use rpclint_enforce::validate;
use serde_json::json;

fn messages(shapes: serde_json::Value) -> Vec<String> {
    let model = json!({ "smithy": "2.0", "shapes": shapes }).to_string();
    validate(&parse_model(&model).unwrap())
        .unwrap()
        .into_iter()
        .map(|d| d.message)
        .collect()
}

#[test]
fn notification_output_message() {
    let got = messages(json!({
        "acme.rpc#Notify": {
            "type": "operation",
            "output": { "target": "acme.rpc#NotifyOutput" },
            "traits": { "jsonrpclib#jsonNotification": "notify" }
        },
        "acme.rpc#NotifyOutput": {
            "type": "structure",
            "members": { "x": { "target": "smithy.api#String" } }
        }
    }));
    assert_eq!(
        got,
        vec!["Operation marked as @jsonNotification must not return anything, but found 'acme.rpc#NotifyOutput'."]
    );
}

#[test]
fn payload_message() {
    let got = messages(json!({
        "acme.rpc#Loose": {
            "type": "structure",
            "members": {
                "body": { "target": "smithy.api#String", "traits": { "jsonrpclib#jsonPayload": {} } }
            }
        }
    }));
    assert_eq!(
        got,
        vec!["'@jsonPayload' can only be used on top-level members of operation input/output/error structures."]
    );
}

#[test]
fn method_presence_message() {
    let got = messages(json!({
        "acme.rpc#Api": {
            "type": "service",
            "operations": [{ "target": "acme.rpc#Bare" }],
            "traits": { "jsonrpclib#jsonRPC": {} }
        },
        "acme.rpc#Bare": { "type": "operation" }
    }));
    assert_eq!(
        got,
        vec!["Operation is part of service 'acme.rpc#Api' marked with @jsonRPC but is missing @jsonRequest or @jsonNotification."]
    );
}

#[test]
fn unique_method_names_message() {
    let got = messages(json!({
        "acme.rpc#Api": {
            "type": "service",
            "operations": [{ "target": "acme.rpc#Second" }, { "target": "acme.rpc#First" }],
            "traits": { "jsonrpclib#jsonRPC": {} }
        },
        "acme.rpc#First": { "type": "operation", "traits": { "jsonrpclib#jsonRequest": "same" } },
        "acme.rpc#Second": { "type": "operation", "traits": { "jsonrpclib#jsonNotification": "same" } }
    }));
    let expected =
        "Duplicate JSON-RPC method name 'same' in service 'acme.rpc#Api'. It is used by: acme.rpc#First, acme.rpc#Second.";
    assert_eq!(got, vec![expected, expected]);
}
