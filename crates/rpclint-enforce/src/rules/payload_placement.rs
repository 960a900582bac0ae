use rpclint_core::selector::Selector;
use rpclint_core::types::ModelError;

use super::{Rule, ValidationContext, PAYLOAD_PLACEMENT};
use crate::types::Diagnostic;

/// J002: the payload trait is only valid on a top-level member of an
/// operation's input, output or error structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadPlacementRule;

impl Rule for PayloadPlacementRule {
    fn code(&self) -> &'static str {
        PAYLOAD_PLACEMENT
    }

    fn name(&self) -> &'static str {
        "JsonPayload"
    }

    fn description(&self) -> &'static str {
        "@jsonPayload is only allowed on top-level members of operation input/output/error structures"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<Diagnostic>, ModelError> {
        let allowed = Selector::operation_io_members().select(ctx.graph);
        let marked = Selector::new()
            .with_trait(ctx.traits.payload.clone())
            .select(ctx.graph);

        Ok(marked
            .difference(&allowed)
            .map(|shape| {
                self.error(
                    shape,
                    "'@jsonPayload' can only be used on top-level members of operation input/output/error structures."
                        .to_string(),
                )
            })
            .collect())
    }
}
