//! JSON-RPC validation rules.
//!
//! Each rule is a pure function of the shape graph and the injected trait ids.
//! Rules never see each other's output and never mutate the graph.

mod method_presence;
mod notification_output;
mod payload_placement;
mod unique_method_names;

pub use method_presence::MethodPresenceRule;
pub use notification_output::NotificationOutputRule;
pub use payload_placement::PayloadPlacementRule;
pub use unique_method_names::UniqueMethodNamesRule;

use rpclint_core::config::RulesConfig;
use rpclint_core::graph::ShapeGraph;
use rpclint_core::shape::{Shape, ShapeId};
use rpclint_core::traits::JsonRpcTraits;
use rpclint_core::types::{ModelError, ShapeKind};

use crate::types::{Diagnostic, RuleInfo};

pub const NOTIFICATION_OUTPUT: &str = "J001";
pub const PAYLOAD_PLACEMENT: &str = "J002";
pub const METHOD_PRESENCE: &str = "J003";
pub const UNIQUE_METHOD_NAMES: &str = "J004";

/// What a rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub graph: &'a ShapeGraph,
    pub traits: &'a JsonRpcTraits,
}

impl<'a> ValidationContext<'a> {
    pub fn new(graph: &'a ShapeGraph, traits: &'a JsonRpcTraits) -> Self {
        Self { graph, traits }
    }

    /// Services carrying the JSON-RPC service trait, sorted by id.
    pub fn json_rpc_services(&self) -> Vec<&'a Shape> {
        self.graph
            .shapes_of_kind(ShapeKind::Service)
            .into_iter()
            .filter(|s| s.has_trait(&self.traits.service))
            .collect()
    }
}

/// A validation rule.
pub trait Rule: Send + Sync {
    /// Stable code, e.g. `J001`.
    fn code(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Report every violation in the graph. A `ModelError` aborts the pass.
    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<Diagnostic>, ModelError>;

    fn error(&self, shape: &ShapeId, message: String) -> Diagnostic {
        Diagnostic::error(self.code(), self.name(), shape, message)
    }

    fn info(&self, enabled: bool) -> RuleInfo {
        RuleInfo {
            code: self.code().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            enabled,
        }
    }
}

/// Every rule, in code order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NotificationOutputRule),
        Box::new(PayloadPlacementRule),
        Box::new(MethodPresenceRule),
        Box::new(UniqueMethodNamesRule),
    ]
}

/// Rules left enabled by configuration.
pub fn rules_from_config(config: &RulesConfig) -> Vec<Box<dyn Rule>> {
    all_rules()
        .into_iter()
        .filter(|rule| match rule.code() {
            NOTIFICATION_OUTPUT => config.notification_output,
            PAYLOAD_PLACEMENT => config.payload_placement,
            METHOD_PRESENCE => config.method_presence,
            UNIQUE_METHOD_NAMES => config.unique_method_names,
            _ => true,
        })
        .collect()
}

pub fn is_known_rule(code: &str) -> bool {
    matches!(
        code,
        NOTIFICATION_OUTPUT | PAYLOAD_PLACEMENT | METHOD_PRESENCE | UNIQUE_METHOD_NAMES
    )
}
