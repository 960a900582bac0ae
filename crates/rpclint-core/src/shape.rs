//! Shape identities and shape nodes.
//!
//! A [`ShapeId`] has the form `namespace#Name` or, for members,
//! `namespace#Name$member`. A [`Shape`] carries its id, kind, traits and the
//! links that tie it to other shapes by id.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::traits::TraitValue;
use crate::types::{ModelError, RelationshipKind, ShapeKind};

/// Absolute shape identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: String,
    name: String,
    member: Option<String>,
}

impl ShapeId {
    /// Parse and validate `namespace#Name` / `namespace#Name$member`.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidShapeId(text.to_string());

        let (namespace, rest) = text.split_once('#').ok_or_else(invalid)?;
        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (rest, None),
        };

        let namespace_ok = !namespace.is_empty()
            && namespace.split('.').all(is_identifier);
        if !namespace_ok || !is_identifier(name) || !member.map_or(true, is_identifier) {
            return Err(invalid());
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: member.map(str::to_string),
        })
    }

    /// Build a root shape id from parts that are already known to be valid.
    pub fn from_parts(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member: None,
        }
    }

    /// The id of a member of this shape.
    pub fn with_member(&self, member: &str) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(member.to_string()),
        }
    }

    /// This id without its member part.
    pub fn root(&self) -> Self {
        Self::from_parts(&self.namespace, &self.name)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }
}

fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${}", member)?;
        }
        Ok(())
    }
}

impl FromStr for ShapeId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShapeId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}

/// Kind-specific links from a shape to other shapes, by id.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeLinks {
    None,
    /// Services and resources: bound operations and child resources.
    Bindings {
        operations: Vec<ShapeId>,
        resources: Vec<ShapeId>,
    },
    Operation {
        input: ShapeId,
        output: ShapeId,
        errors: Vec<ShapeId>,
    },
    Aggregate {
        members: Vec<ShapeId>,
    },
    Member {
        container: ShapeId,
        target: ShapeId,
    },
}

/// A node in the shape graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    traits: BTreeMap<ShapeId, TraitValue>,
    links: ShapeLinks,
}

impl Shape {
    fn new(id: ShapeId, kind: ShapeKind, links: ShapeLinks) -> Self {
        Self {
            id,
            kind,
            traits: BTreeMap::new(),
            links,
        }
    }

    pub fn service(id: ShapeId, operations: impl IntoIterator<Item = ShapeId>) -> Self {
        Self::bindings(id, ShapeKind::Service, operations)
    }

    /// A resource binding `operations`, lifecycle operations included.
    pub fn resource(id: ShapeId, operations: impl IntoIterator<Item = ShapeId>) -> Self {
        Self::bindings(id, ShapeKind::Resource, operations)
    }

    fn bindings(id: ShapeId, kind: ShapeKind, operations: impl IntoIterator<Item = ShapeId>) -> Self {
        Self::new(
            id,
            kind,
            ShapeLinks::Bindings {
                operations: operations.into_iter().collect(),
                resources: Vec::new(),
            },
        )
    }

    /// Bind child resources to a service or resource. Other kinds are
    /// returned unchanged.
    pub fn with_resources(mut self, children: impl IntoIterator<Item = ShapeId>) -> Self {
        if let ShapeLinks::Bindings { resources, .. } = &mut self.links {
            resources.extend(children);
        }
        self
    }

    pub fn operation(
        id: ShapeId,
        input: ShapeId,
        output: ShapeId,
        errors: impl IntoIterator<Item = ShapeId>,
    ) -> Self {
        let errors = errors.into_iter().collect();
        Self::new(
            id,
            ShapeKind::Operation,
            ShapeLinks::Operation {
                input,
                output,
                errors,
            },
        )
    }

    pub fn structure(id: ShapeId, members: impl IntoIterator<Item = ShapeId>) -> Self {
        Self::aggregate(id, ShapeKind::Structure, members)
    }

    /// A structure, union, list, map or enum whose members are listed by id.
    pub fn aggregate(
        id: ShapeId,
        kind: ShapeKind,
        members: impl IntoIterator<Item = ShapeId>,
    ) -> Self {
        let members = members.into_iter().collect();
        Self::new(id, kind, ShapeLinks::Aggregate { members })
    }

    /// A member named `name` of `container` that targets `target`.
    pub fn member(container: &ShapeId, name: &str, target: ShapeId) -> Self {
        Self::new(
            container.with_member(name),
            ShapeKind::Member,
            ShapeLinks::Member {
                container: container.clone(),
                target,
            },
        )
    }

    /// A shape with no links (unit, primitives).
    pub fn simple(id: ShapeId, kind: ShapeKind) -> Self {
        Self::new(id, kind, ShapeLinks::None)
    }

    pub fn with_trait(mut self, trait_id: ShapeId, value: TraitValue) -> Self {
        self.traits.insert(trait_id, value);
        self
    }

    pub fn with_annotation(self, trait_id: ShapeId) -> Self {
        self.with_trait(trait_id, TraitValue::Annotation)
    }

    pub fn with_string_trait(self, trait_id: ShapeId, value: &str) -> Self {
        self.with_trait(trait_id, TraitValue::String(value.to_string()))
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn links(&self) -> &ShapeLinks {
        &self.links
    }

    pub fn traits(&self) -> &BTreeMap<ShapeId, TraitValue> {
        &self.traits
    }

    pub fn has_trait(&self, trait_id: &ShapeId) -> bool {
        self.traits.contains_key(trait_id)
    }

    pub fn get_trait(&self, trait_id: &ShapeId) -> Option<&TraitValue> {
        self.traits.get(trait_id)
    }

    /// Read a trait whose value must be a string.
    ///
    /// Returns `Ok(None)` when the trait is absent and an error when it is
    /// present with a non-string value.
    pub fn string_trait(&self, trait_id: &ShapeId) -> Result<Option<&str>, ModelError> {
        match self.traits.get(trait_id) {
            None => Ok(None),
            Some(TraitValue::String(s)) => Ok(Some(s)),
            Some(_) => Err(ModelError::InvalidTraitValue {
                shape: self.id.clone(),
                trait_id: trait_id.clone(),
                expected: "string",
            }),
        }
    }

    /// Operations bound directly to a service or resource. Empty for other kinds.
    pub fn operations(&self) -> &[ShapeId] {
        match &self.links {
            ShapeLinks::Bindings { operations, .. } => operations,
            _ => &[],
        }
    }

    /// Resources bound directly to a service or resource.
    pub fn resources(&self) -> &[ShapeId] {
        match &self.links {
            ShapeLinks::Bindings { resources, .. } => resources,
            _ => &[],
        }
    }

    /// Members of an aggregate shape. Empty for other kinds.
    pub fn members(&self) -> &[ShapeId] {
        match &self.links {
            ShapeLinks::Aggregate { members } => members,
            _ => &[],
        }
    }

    /// Every outgoing link of this shape, labelled with its relationship.
    pub fn relationships(&self) -> Vec<(RelationshipKind, &ShapeId)> {
        match &self.links {
            ShapeLinks::None => vec![],
            ShapeLinks::Bindings {
                operations,
                resources,
            } => operations
                .iter()
                .map(|op| (RelationshipKind::Operation, op))
                .chain(resources.iter().map(|r| (RelationshipKind::Resource, r)))
                .collect(),
            ShapeLinks::Operation {
                input,
                output,
                errors,
            } => {
                let mut rels = vec![
                    (RelationshipKind::Input, input),
                    (RelationshipKind::Output, output),
                ];
                rels.extend(errors.iter().map(|e| (RelationshipKind::Error, e)));
                rels
            }
            ShapeLinks::Aggregate { members } => members
                .iter()
                .map(|m| (RelationshipKind::Member, m))
                .collect(),
            ShapeLinks::Member { target, .. } => vec![(RelationshipKind::Target, target)],
        }
    }
}
