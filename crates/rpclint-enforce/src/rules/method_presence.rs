use rpclint_core::types::ModelError;

use super::{Rule, ValidationContext, METHOD_PRESENCE};
use crate::types::Diagnostic;

/// J003: every operation of a JSON-RPC service must be a request or a
/// notification. Checked per service, so an operation bound to two JSON-RPC
/// services is reported once for each.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodPresenceRule;

impl Rule for MethodPresenceRule {
    fn code(&self) -> &'static str {
        METHOD_PRESENCE
    }

    fn name(&self) -> &'static str {
        "JsonRpcOperation"
    }

    fn description(&self) -> &'static str {
        "Operations of a @jsonRPC service need @jsonRequest or @jsonNotification"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<Diagnostic>, ModelError> {
        let mut diagnostics = Vec::new();

        for service in ctx.json_rpc_services() {
            for op in ctx.graph.service_operations(service)? {
                if op.has_trait(&ctx.traits.request) || op.has_trait(&ctx.traits.notification) {
                    continue;
                }
                diagnostics.push(self.error(
                    op.id(),
                    format!(
                        "Operation is part of service '{}' marked with @jsonRPC but is missing @jsonRequest or @jsonNotification.",
                        service.id()
                    ),
                ));
            }
        }

        Ok(diagnostics)
    }
}
