use std::collections::BTreeMap;

use rpclint_core::shape::{Shape, ShapeId};
use rpclint_core::traits::JsonRpcTraits;
use rpclint_core::types::ModelError;

use super::{Rule, ValidationContext, UNIQUE_METHOD_NAMES};
use crate::types::Diagnostic;

/// J004: method names must be unique within a JSON-RPC service.
///
/// Every operation in a collision gets its own diagnostic. Names are compared
/// byte for byte and scoped to one service.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueMethodNamesRule;

/// The request name if present, otherwise the notification name.
fn method_name<'a>(op: &'a Shape, traits: &JsonRpcTraits) -> Result<Option<&'a str>, ModelError> {
    match op.string_trait(&traits.request)? {
        Some(name) => Ok(Some(name)),
        None => op.string_trait(&traits.notification),
    }
}

impl Rule for UniqueMethodNamesRule {
    fn code(&self) -> &'static str {
        UNIQUE_METHOD_NAMES
    }

    fn name(&self) -> &'static str {
        "UniqueJsonRpcMethodNames"
    }

    fn description(&self) -> &'static str {
        "JSON-RPC method names must be unique within a service"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<Diagnostic>, ModelError> {
        let mut diagnostics = Vec::new();

        for service in ctx.json_rpc_services() {
            let mut by_name: BTreeMap<&str, Vec<&ShapeId>> = BTreeMap::new();
            for op in ctx.graph.service_operations(service)? {
                if let Some(name) = method_name(op, ctx.traits)? {
                    by_name.entry(name).or_default().push(op.id());
                }
            }

            for (name, mut ops) in by_name {
                if ops.len() < 2 {
                    continue;
                }
                ops.sort();
                let used_by = ops
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let message = format!(
                    "Duplicate JSON-RPC method name '{}' in service '{}'. It is used by: {}.",
                    name,
                    service.id(),
                    used_by
                );
                for op in ops {
                    diagnostics.push(self.error(op, message.clone()));
                }
            }
        }

        Ok(diagnostics)
    }
}
