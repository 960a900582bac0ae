//! Trait values and the injected JSON-RPC trait ids.

use serde::{Deserialize, Serialize};

use crate::config::TraitConfig;
use crate::shape::ShapeId;
use crate::types::ModelError;

/// Value attached to a shape under a trait id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitValue {
    /// Presence-only marker, written `{}` in a JSON model.
    Annotation,
    String(String),
    /// Any other structured payload.
    Document(serde_json::Value),
}

impl TraitValue {
    /// Classify a raw JSON trait value.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) if map.is_empty() => TraitValue::Annotation,
            serde_json::Value::String(s) => TraitValue::String(s),
            other => TraitValue::Document(other),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TraitValue::String(s) => Some(s),
            _ => None,
        }
    }
}

pub const DEFAULT_TRAIT_NAMESPACE: &str = "jsonrpclib";
pub const PRELUDE_NAMESPACE: &str = "smithy.api";

/// Trait ids the JSON-RPC rules look up. Passed into a validation pass
/// rather than resolved from a global registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRpcTraits {
    /// Marks a service as a JSON-RPC service.
    pub service: ShapeId,
    /// Request method marker; string value is the method name.
    pub request: ShapeId,
    /// Notification method marker; string value is the method name.
    pub notification: ShapeId,
    /// Marks a member as the whole message body.
    pub payload: ShapeId,
    /// The "no data" sentinel used as an operation's input or output.
    pub unit: ShapeId,
}

impl Default for JsonRpcTraits {
    fn default() -> Self {
        Self {
            service: ShapeId::from_parts(DEFAULT_TRAIT_NAMESPACE, "jsonRPC"),
            request: ShapeId::from_parts(DEFAULT_TRAIT_NAMESPACE, "jsonRequest"),
            notification: ShapeId::from_parts(DEFAULT_TRAIT_NAMESPACE, "jsonNotification"),
            payload: ShapeId::from_parts(DEFAULT_TRAIT_NAMESPACE, "jsonPayload"),
            unit: ShapeId::from_parts(PRELUDE_NAMESPACE, "Unit"),
        }
    }
}

impl JsonRpcTraits {
    /// Apply overrides from configuration on top of the defaults.
    pub fn from_config(config: &TraitConfig) -> Result<Self, ModelError> {
        let mut traits = Self::default();
        let overrides = [
            (&config.service, &mut traits.service),
            (&config.request, &mut traits.request),
            (&config.notification, &mut traits.notification),
            (&config.payload, &mut traits.payload),
            (&config.unit, &mut traits.unit),
        ];
        for (value, slot) in overrides {
            if let Some(text) = value {
                *slot = ShapeId::parse(text)?;
            }
        }
        Ok(traits)
    }
}
