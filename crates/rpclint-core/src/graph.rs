//! The shape graph: an immutable, queryable view of a whole model.
//!
//! Shapes are stored as nodes of a `petgraph` directed graph; every link
//! whose target exists becomes an edge labelled with its [`RelationshipKind`].
//! Links to absent shapes are kept on the shape and surface as
//! [`ModelError::UnknownShape`] when a caller resolves them.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::shape::{Shape, ShapeId};
use crate::traits::PRELUDE_NAMESPACE;
use crate::types::{ModelError, RelationshipKind, ShapeKind};

/// Simple shapes every model can target without declaring them.
const PRELUDE: &[(&str, ShapeKind)] = &[
    ("Unit", ShapeKind::Unit),
    ("String", ShapeKind::String),
    ("Blob", ShapeKind::Blob),
    ("Boolean", ShapeKind::Boolean),
    ("Byte", ShapeKind::Byte),
    ("Short", ShapeKind::Short),
    ("Integer", ShapeKind::Integer),
    ("Long", ShapeKind::Long),
    ("Float", ShapeKind::Float),
    ("Double", ShapeKind::Double),
    ("BigInteger", ShapeKind::BigInteger),
    ("BigDecimal", ShapeKind::BigDecimal),
    ("Timestamp", ShapeKind::Timestamp),
    ("Document", ShapeKind::Document),
    ("PrimitiveBoolean", ShapeKind::Boolean),
    ("PrimitiveInteger", ShapeKind::Integer),
    ("PrimitiveLong", ShapeKind::Long),
    ("PrimitiveDouble", ShapeKind::Double),
];

/// Collects shapes and freezes them into a [`ShapeGraph`].
#[derive(Debug)]
pub struct ShapeGraphBuilder {
    shapes: Vec<Shape>,
}

impl Default for ShapeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeGraphBuilder {
    /// A builder pre-populated with the prelude shapes.
    pub fn new() -> Self {
        let shapes = PRELUDE
            .iter()
            .map(|(name, kind)| Shape::simple(ShapeId::from_parts(PRELUDE_NAMESPACE, name), *kind))
            .collect();
        Self { shapes }
    }

    /// A builder with no shapes at all, not even the prelude.
    pub fn empty() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn add_shape(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    pub fn add_shapes(&mut self, shapes: impl IntoIterator<Item = Shape>) -> &mut Self {
        self.shapes.extend(shapes);
        self
    }

    /// Freeze the collected shapes.
    ///
    /// Fails on duplicate shape ids and on services that bind the same
    /// operation twice. Dangling links are not an error here.
    pub fn build(self) -> Result<ShapeGraph, ModelError> {
        let mut graph = DiGraph::with_capacity(self.shapes.len(), self.shapes.len());
        let mut index = HashMap::with_capacity(self.shapes.len());

        for shape in self.shapes {
            if index.contains_key(shape.id()) {
                return Err(ModelError::DuplicateShape(shape.id().clone()));
            }
            check_service_operations(&shape)?;
            let id = shape.id().clone();
            let ix = graph.add_node(shape);
            index.insert(id, ix);
        }

        let mut edges = Vec::new();
        for ix in graph.node_indices() {
            for (rel, target) in graph[ix].relationships() {
                if let Some(&target_ix) = index.get(target) {
                    edges.push((ix, target_ix, rel));
                }
            }
        }
        for (from, to, rel) in edges {
            graph.add_edge(from, to, rel);
        }

        tracing::debug!(
            shapes = graph.node_count(),
            relationships = graph.edge_count(),
            "shape graph built"
        );
        Ok(ShapeGraph { graph, index })
    }
}

fn check_service_operations(shape: &Shape) -> Result<(), ModelError> {
    if shape.kind() != ShapeKind::Service {
        return Ok(());
    }
    let operations = shape.operations();
    let mut seen = HashSet::with_capacity(operations.len());
    for op in operations {
        if !seen.insert(op) {
            return Err(ModelError::DuplicateOperation {
                service: shape.id().clone(),
                operation: op.clone(),
            });
        }
    }
    Ok(())
}

/// Immutable shape graph. All queries are pure reads.
#[derive(Debug)]
pub struct ShapeGraph {
    graph: DiGraph<Shape, RelationshipKind>,
    index: HashMap<ShapeId, NodeIndex>,
}

impl ShapeGraph {
    pub fn builder() -> ShapeGraphBuilder {
        ShapeGraphBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get_shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.index.get(id).map(|&ix| &self.graph[ix])
    }

    /// Resolve a shape that must exist.
    pub fn expect_shape(&self, id: &ShapeId) -> Result<&Shape, ModelError> {
        self.get_shape(id)
            .ok_or_else(|| ModelError::UnknownShape(id.clone()))
    }

    /// Resolve a shape that must exist and be an operation.
    pub fn expect_operation(&self, id: &ShapeId) -> Result<&Shape, ModelError> {
        let shape = self.expect_shape(id)?;
        if shape.kind() != ShapeKind::Operation {
            return Err(ModelError::UnexpectedKind {
                id: id.clone(),
                expected: "operation",
                found: shape.kind(),
            });
        }
        Ok(shape)
    }

    /// All shapes, in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.graph.node_weights()
    }

    /// Shapes of one kind, sorted by id.
    pub fn shapes_of_kind(&self, kind: ShapeKind) -> Vec<&Shape> {
        sorted(self.shapes().filter(|s| s.kind() == kind))
    }

    /// Every shape carrying `trait_id`, sorted by id.
    pub fn shapes_with_trait(&self, trait_id: &ShapeId) -> Vec<&Shape> {
        sorted(self.shapes().filter(|s| s.has_trait(trait_id)))
    }

    /// Resolve a shape that must exist and be a resource.
    pub fn expect_resource(&self, id: &ShapeId) -> Result<&Shape, ModelError> {
        let shape = self.expect_shape(id)?;
        if shape.kind() != ShapeKind::Resource {
            return Err(ModelError::UnexpectedKind {
                id: id.clone(),
                expected: "resource",
                found: shape.kind(),
            });
        }
        Ok(shape)
    }

    /// Resolve an aggregate (structure, union, list, map, enum) together
    /// with its member shapes, in declared order.
    pub fn expect_aggregate_members(&self, id: &ShapeId) -> Result<(&Shape, Vec<&Shape>), ModelError> {
        let shape = self.expect_shape(id)?;
        if !shape.kind().has_members() {
            return Err(ModelError::UnexpectedKind {
                id: id.clone(),
                expected: "aggregate",
                found: shape.kind(),
            });
        }
        let members = shape
            .members()
            .iter()
            .map(|m| self.expect_shape(m))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((shape, members))
    }

    /// Every operation reachable from a service, directly or through its
    /// resources and their child resources.
    ///
    /// Direct operations come first in declared order, then each resource's
    /// operations depth-first. An operation reachable twice is listed once.
    pub fn service_operations<'a>(&'a self, service: &'a Shape) -> Result<Vec<&'a Shape>, ModelError> {
        let mut seen_ops = HashSet::new();
        let mut seen_resources = HashSet::new();
        let mut operations = Vec::new();
        self.collect_operations(service, &mut seen_ops, &mut seen_resources, &mut operations)?;
        Ok(operations)
    }

    fn collect_operations<'a>(
        &'a self,
        container: &'a Shape,
        seen_ops: &mut HashSet<&'a ShapeId>,
        seen_resources: &mut HashSet<&'a ShapeId>,
        out: &mut Vec<&'a Shape>,
    ) -> Result<(), ModelError> {
        for op in container.operations() {
            if seen_ops.insert(op) {
                out.push(self.expect_operation(op)?);
            }
        }
        for resource in container.resources() {
            // A resource bound twice, or in a cycle, is walked once.
            if !seen_resources.insert(resource) {
                continue;
            }
            let resource = self.expect_resource(resource)?;
            self.collect_operations(resource, seen_ops, seen_resources, out)?;
        }
        Ok(())
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn node(&self, ix: NodeIndex) -> &Shape {
        &self.graph[ix]
    }

    /// Outgoing neighbours over edges whose kind is in `rels`. petgraph walks
    /// edges newest-first, so the result is reversed back into link order.
    pub(crate) fn neighbors<'a>(
        &'a self,
        ix: NodeIndex,
        rels: &'a [RelationshipKind],
    ) -> impl Iterator<Item = NodeIndex> + 'a {
        let mut targets: Vec<NodeIndex> = self
            .graph
            .edges_directed(ix, Direction::Outgoing)
            .filter(|e| rels.contains(e.weight()))
            .map(|e| e.target())
            .collect();
        targets.reverse();
        targets.into_iter()
    }
}

fn sorted<'a>(shapes: impl Iterator<Item = &'a Shape>) -> Vec<&'a Shape> {
    let mut shapes: Vec<&Shape> = shapes.collect();
    shapes.sort_by(|a, b| a.id().cmp(b.id()));
    shapes
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
