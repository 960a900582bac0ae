use serde::{Deserialize, Serialize};

use crate::shape::ShapeId;

/// Shape types in the interface model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Service,
    Resource,
    Operation,
    Structure,
    Union,
    List,
    Map,
    Member,
    Unit,
    Blob,
    Boolean,
    String,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Timestamp,
    Document,
    Enum,
    IntEnum,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Service => "service",
            ShapeKind::Resource => "resource",
            ShapeKind::Operation => "operation",
            ShapeKind::Structure => "structure",
            ShapeKind::Union => "union",
            ShapeKind::List => "list",
            ShapeKind::Map => "map",
            ShapeKind::Member => "member",
            ShapeKind::Unit => "unit",
            ShapeKind::Blob => "blob",
            ShapeKind::Boolean => "boolean",
            ShapeKind::String => "string",
            ShapeKind::Byte => "byte",
            ShapeKind::Short => "short",
            ShapeKind::Integer => "integer",
            ShapeKind::Long => "long",
            ShapeKind::Float => "float",
            ShapeKind::Double => "double",
            ShapeKind::BigInteger => "bigInteger",
            ShapeKind::BigDecimal => "bigDecimal",
            ShapeKind::Timestamp => "timestamp",
            ShapeKind::Document => "document",
            ShapeKind::Enum => "enum",
            ShapeKind::IntEnum => "intEnum",
        }
    }

    /// Parse the `type` field of a JSON AST shape. Member and unit shapes are
    /// never declared directly, so they are not accepted here.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let kind = match name {
            "service" => ShapeKind::Service,
            "resource" => ShapeKind::Resource,
            "operation" => ShapeKind::Operation,
            "structure" => ShapeKind::Structure,
            "union" => ShapeKind::Union,
            "list" | "set" => ShapeKind::List,
            "map" => ShapeKind::Map,
            "blob" => ShapeKind::Blob,
            "boolean" => ShapeKind::Boolean,
            "string" => ShapeKind::String,
            "byte" => ShapeKind::Byte,
            "short" => ShapeKind::Short,
            "integer" => ShapeKind::Integer,
            "long" => ShapeKind::Long,
            "float" => ShapeKind::Float,
            "double" => ShapeKind::Double,
            "bigInteger" => ShapeKind::BigInteger,
            "bigDecimal" => ShapeKind::BigDecimal,
            "timestamp" => ShapeKind::Timestamp,
            "document" => ShapeKind::Document,
            "enum" => ShapeKind::Enum,
            "intEnum" => ShapeKind::IntEnum,
            _ => return None,
        };
        Some(kind)
    }

    /// Kinds whose members are separate shapes in the graph.
    pub fn has_members(&self) -> bool {
        matches!(
            self,
            ShapeKind::Structure
                | ShapeKind::Union
                | ShapeKind::List
                | ShapeKind::Map
                | ShapeKind::Enum
                | ShapeKind::IntEnum
        )
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge types between shapes in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// service or resource -> operation
    Operation,
    /// service or resource -> resource
    Resource,
    /// operation -> input structure
    Input,
    /// operation -> output structure
    Output,
    /// operation -> error structure
    Error,
    /// aggregate -> member
    Member,
    /// member -> target shape
    Target,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Operation => "operation",
            RelationshipKind::Resource => "resource",
            RelationshipKind::Input => "input",
            RelationshipKind::Output => "output",
            RelationshipKind::Error => "error",
            RelationshipKind::Member => "member",
            RelationshipKind::Target => "target",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model errors. These mean the graph broke a precondition the validation
/// rules rely on; they abort a validation pass instead of becoming diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Shape not found: {0}")]
    UnknownShape(ShapeId),

    #[error("Shape {id} is a {found}, expected {expected}")]
    UnexpectedKind {
        id: ShapeId,
        expected: &'static str,
        found: ShapeKind,
    },

    #[error("Trait {trait_id} on {shape} must have a {expected} value")]
    InvalidTraitValue {
        shape: ShapeId,
        trait_id: ShapeId,
        expected: &'static str,
    },

    #[error("Invalid shape id: {0:?}")]
    InvalidShapeId(String),

    #[error("Duplicate shape: {0}")]
    DuplicateShape(ShapeId),

    #[error("Service {service} binds operation {operation} more than once")]
    DuplicateOperation { service: ShapeId, operation: ShapeId },
}
