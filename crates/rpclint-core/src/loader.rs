//! Loading shape graphs from JSON AST model documents.
//!
//! A model document looks like
//!
//! ```json
//! {
//!   "smithy": "2.0",
//!   "shapes": {
//!     "example#Ping": {
//!       "type": "operation",
//!       "input": { "target": "example#PingInput" },
//!       "traits": { "jsonrpclib#jsonRequest": "ping" }
//!     }
//!   }
//! }
//! ```
//!
//! Several documents can be assembled into one graph.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::graph::{ShapeGraph, ShapeGraphBuilder};
use crate::shape::{Shape, ShapeId};
use crate::traits::{TraitValue, PRELUDE_NAMESPACE};
use crate::types::{ModelError, ShapeKind};

/// Errors raised while reading a model document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}: invalid model JSON: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin}: unsupported model version {version:?}")]
    UnsupportedVersion { origin: String, version: String },

    #[error("{origin}: shape {id} has unsupported type {kind:?}")]
    UnsupportedShapeType {
        origin: String,
        id: String,
        kind: String,
    },

    #[error("{origin}: {kind} shape {id} is missing its {field}")]
    MissingField {
        origin: String,
        id: String,
        kind: ShapeKind,
        field: &'static str,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Deserialize)]
struct ModelDocument {
    smithy: String,
    #[serde(default)]
    shapes: BTreeMap<String, ShapeDocument>,
}

#[derive(Debug, Deserialize)]
struct ShapeDocument {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    traits: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    operations: Vec<TargetRef>,
    #[serde(default)]
    resources: Vec<TargetRef>,
    #[serde(default, rename = "collectionOperations")]
    collection_operations: Vec<TargetRef>,
    #[serde(default)]
    create: Option<TargetRef>,
    #[serde(default)]
    put: Option<TargetRef>,
    #[serde(default)]
    read: Option<TargetRef>,
    #[serde(default)]
    update: Option<TargetRef>,
    #[serde(default)]
    delete: Option<TargetRef>,
    #[serde(default)]
    list: Option<TargetRef>,
    #[serde(default)]
    input: Option<TargetRef>,
    #[serde(default)]
    output: Option<TargetRef>,
    #[serde(default)]
    errors: Vec<TargetRef>,
    /// Kept as raw JSON so members come out in declared order.
    #[serde(default)]
    members: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    member: Option<MemberDocument>,
    #[serde(default)]
    key: Option<MemberDocument>,
    #[serde(default)]
    value: Option<MemberDocument>,
}

#[derive(Debug, Deserialize)]
struct TargetRef {
    target: String,
}

#[derive(Debug, Deserialize)]
struct MemberDocument {
    target: String,
    #[serde(default)]
    traits: BTreeMap<String, serde_json::Value>,
}

/// Accumulates shapes from one or more model documents.
#[derive(Debug, Default)]
pub struct ModelLoader {
    builder: ShapeGraphBuilder,
    documents: usize,
}

impl ModelLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and add a model file.
    pub fn load_path(&mut self, path: &Path) -> Result<&mut Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&content, &path.display().to_string())
    }

    /// Parse and add a model document. `origin` names it in errors.
    pub fn load_str(&mut self, content: &str, origin: &str) -> Result<&mut Self, LoadError> {
        let document: ModelDocument =
            serde_json::from_str(content).map_err(|source| LoadError::Json {
                origin: origin.to_string(),
                source,
            })?;

        if !is_supported_version(&document.smithy) {
            return Err(LoadError::UnsupportedVersion {
                origin: origin.to_string(),
                version: document.smithy,
            });
        }

        let count = document.shapes.len();
        for (raw_id, shape_doc) in document.shapes {
            let shapes = convert_shape(origin, &raw_id, shape_doc)?;
            self.builder.add_shapes(shapes);
        }
        self.documents += 1;
        tracing::debug!(origin, shapes = count, "model document loaded");
        Ok(self)
    }

    /// Number of documents added so far.
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Freeze everything loaded so far into a graph.
    pub fn assemble(self) -> Result<ShapeGraph, LoadError> {
        Ok(self.builder.build()?)
    }
}

/// Load a single model file.
pub fn load_model(path: &Path) -> Result<ShapeGraph, LoadError> {
    let mut loader = ModelLoader::new();
    loader.load_path(path)?;
    loader.assemble()
}

/// Parse a single model document held in memory.
pub fn parse_model(content: &str) -> Result<ShapeGraph, LoadError> {
    let mut loader = ModelLoader::new();
    loader.load_str(content, "<memory>")?;
    loader.assemble()
}

fn is_supported_version(version: &str) -> bool {
    matches!(version.split('.').next(), Some("1") | Some("2"))
}

fn convert_traits(raw: BTreeMap<String, serde_json::Value>) -> Result<Vec<(ShapeId, TraitValue)>, LoadError> {
    let mut traits = Vec::with_capacity(raw.len());
    for (trait_id, value) in raw {
        traits.push((ShapeId::parse(&trait_id)?, TraitValue::from_json(value)));
    }
    Ok(traits)
}

fn with_traits(mut shape: Shape, traits: Vec<(ShapeId, TraitValue)>) -> Shape {
    for (trait_id, value) in traits {
        shape = shape.with_trait(trait_id, value);
    }
    shape
}

fn unit() -> ShapeId {
    ShapeId::from_parts(PRELUDE_NAMESPACE, "Unit")
}

/// Turn one document entry into its shape plus any member shapes.
fn convert_shape(origin: &str, raw_id: &str, doc: ShapeDocument) -> Result<Vec<Shape>, LoadError> {
    let id = ShapeId::parse(raw_id)?;
    let kind = ShapeKind::from_type_name(&doc.kind).ok_or_else(|| LoadError::UnsupportedShapeType {
        origin: origin.to_string(),
        id: raw_id.to_string(),
        kind: doc.kind.clone(),
    })?;
    let traits = convert_traits(doc.traits)?;
    let target = |r: TargetRef| ShapeId::parse(&r.target);

    let mut shapes = Vec::new();
    let shape = match kind {
        ShapeKind::Service => {
            let operations = doc
                .operations
                .into_iter()
                .map(target)
                .collect::<Result<Vec<_>, _>>()?;
            let resources = doc
                .resources
                .into_iter()
                .map(target)
                .collect::<Result<Vec<_>, _>>()?;
            Shape::service(id, operations).with_resources(resources)
        }
        ShapeKind::Resource => {
            // Lifecycle operations first, then the plain and collection lists.
            let lifecycle = [doc.create, doc.put, doc.read, doc.update, doc.delete, doc.list];
            let operations = lifecycle
                .into_iter()
                .flatten()
                .chain(doc.operations)
                .chain(doc.collection_operations)
                .map(target)
                .collect::<Result<Vec<_>, _>>()?;
            let resources = doc
                .resources
                .into_iter()
                .map(target)
                .collect::<Result<Vec<_>, _>>()?;
            Shape::resource(id, operations).with_resources(resources)
        }
        ShapeKind::Operation => {
            let input = doc.input.map(target).transpose()?.unwrap_or_else(unit);
            let output = doc.output.map(target).transpose()?.unwrap_or_else(unit);
            let errors = doc
                .errors
                .into_iter()
                .map(target)
                .collect::<Result<Vec<_>, _>>()?;
            Shape::operation(id, input, output, errors)
        }
        ShapeKind::List => {
            let member = doc.member.ok_or_else(|| LoadError::MissingField {
                origin: origin.to_string(),
                id: raw_id.to_string(),
                kind,
                field: "member",
            })?;
            let members = vec![("member".to_string(), member)];
            aggregate(id, kind, members, &mut shapes)?
        }
        ShapeKind::Map => {
            let missing = |field| LoadError::MissingField {
                origin: origin.to_string(),
                id: raw_id.to_string(),
                kind,
                field,
            };
            let key = doc.key.ok_or_else(|| missing("key"))?;
            let value = doc.value.ok_or_else(|| missing("value"))?;
            let members = vec![("key".to_string(), key), ("value".to_string(), value)];
            aggregate(id, kind, members, &mut shapes)?
        }
        k if k.has_members() => {
            let mut members = Vec::with_capacity(doc.members.len());
            for (name, raw) in doc.members {
                let member = serde_json::from_value(raw).map_err(|source| LoadError::Json {
                    origin: format!("{origin}: member {raw_id}${name}"),
                    source,
                })?;
                members.push((name, member));
            }
            aggregate(id, kind, members, &mut shapes)?
        }
        _ => Shape::simple(id, kind),
    };

    shapes.insert(0, with_traits(shape, traits));
    Ok(shapes)
}

fn aggregate(
    id: ShapeId,
    kind: ShapeKind,
    members: Vec<(String, MemberDocument)>,
    out: &mut Vec<Shape>,
) -> Result<Shape, LoadError> {
    let mut member_ids = Vec::with_capacity(members.len());
    for (name, doc) in members {
        let member_id = id.with_member(&name);
        // Re-parse so member names get the same validation as root ids.
        ShapeId::parse(&member_id.to_string())?;
        let target = ShapeId::parse(&doc.target)?;
        let traits = convert_traits(doc.traits)?;
        out.push(with_traits(Shape::member(&id, &name, target), traits));
        member_ids.push(member_id);
    }
    Ok(Shape::aggregate(id, kind, member_ids))
}
