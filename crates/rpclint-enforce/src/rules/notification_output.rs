use rpclint_core::shape::ShapeLinks;
use rpclint_core::types::{ModelError, ShapeKind};

use super::{Rule, ValidationContext, NOTIFICATION_OUTPUT};
use crate::types::Diagnostic;

/// J001: an operation marked as a notification must not return data.
///
/// The output may be the unit sentinel, a unit-kind shape, or a structure
/// with no members.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationOutputRule;

impl Rule for NotificationOutputRule {
    fn code(&self) -> &'static str {
        NOTIFICATION_OUTPUT
    }

    fn name(&self) -> &'static str {
        "JsonNotificationOutput"
    }

    fn description(&self) -> &'static str {
        "Operations marked @jsonNotification must have an empty output"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<Diagnostic>, ModelError> {
        let mut diagnostics = Vec::new();

        for op in ctx.graph.shapes_with_trait(&ctx.traits.notification) {
            // Placing the trait on a non-operation is for the trait schema to reject.
            let ShapeLinks::Operation { output, .. } = op.links() else {
                continue;
            };
            if *output == ctx.traits.unit {
                continue;
            }

            let resolved = ctx.graph.expect_shape(output)?;
            let empty = match resolved.kind() {
                ShapeKind::Unit => true,
                ShapeKind::Structure => ctx.graph.expect_aggregate_members(output)?.1.is_empty(),
                found => {
                    return Err(ModelError::UnexpectedKind {
                        id: output.clone(),
                        expected: "structure",
                        found,
                    })
                }
            };

            if !empty {
                diagnostics.push(self.error(
                    op.id(),
                    format!(
                        "Operation marked as @jsonNotification must not return anything, but found '{}'.",
                        output
                    ),
                ));
            }
        }

        Ok(diagnostics)
    }
}
