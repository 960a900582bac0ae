//! Declarative structural patterns over the shape graph.
//!
//! A [`Selector`] starts from every shape in the graph and applies its steps
//! in order: filter by kind, filter by trait, or move along relationships.
//! Selecting `operation -[input, output, error]-> structure > member` looks like
//!
//! ```
//! use rpclint_core::selector::Selector;
//! use rpclint_core::types::{RelationshipKind, ShapeKind};
//!
//! let top_level_members = Selector::new()
//!     .kind(ShapeKind::Operation)
//!     .follow(&[RelationshipKind::Input, RelationshipKind::Output, RelationshipKind::Error])
//!     .kind(ShapeKind::Structure)
//!     .follow(&[RelationshipKind::Member]);
//! # let _ = top_level_members;
//! ```

use std::collections::{BTreeSet, HashSet};

use petgraph::graph::NodeIndex;

use crate::graph::ShapeGraph;
use crate::shape::ShapeId;
use crate::types::{RelationshipKind, ShapeKind};

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Kind(ShapeKind),
    WithTrait(ShapeId),
    Follow(Vec<RelationshipKind>),
}

/// A chain of kind/trait filters and relationship hops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level members of any operation's input, output or error structure.
    pub fn operation_io_members() -> Self {
        Self::new()
            .kind(ShapeKind::Operation)
            .follow(&[
                RelationshipKind::Input,
                RelationshipKind::Output,
                RelationshipKind::Error,
            ])
            .kind(ShapeKind::Structure)
            .follow(&[RelationshipKind::Member])
    }

    /// Keep only shapes of `kind`.
    pub fn kind(mut self, kind: ShapeKind) -> Self {
        self.steps.push(Step::Kind(kind));
        self
    }

    /// Keep only shapes carrying `trait_id`.
    pub fn with_trait(mut self, trait_id: ShapeId) -> Self {
        self.steps.push(Step::WithTrait(trait_id));
        self
    }

    /// Replace the current set with shapes one edge away over any of `rels`.
    pub fn follow(mut self, rels: &[RelationshipKind]) -> Self {
        self.steps.push(Step::Follow(rels.to_vec()));
        self
    }

    /// Evaluate against a graph, returning matching shape ids in sorted order.
    pub fn select(&self, graph: &ShapeGraph) -> BTreeSet<ShapeId> {
        let mut current: Vec<NodeIndex> = graph.node_indices().collect();

        for step in &self.steps {
            current = match step {
                Step::Kind(kind) => current
                    .into_iter()
                    .filter(|&ix| graph.node(ix).kind() == *kind)
                    .collect(),
                Step::WithTrait(trait_id) => current
                    .into_iter()
                    .filter(|&ix| graph.node(ix).has_trait(trait_id))
                    .collect(),
                Step::Follow(rels) => {
                    let mut seen = HashSet::new();
                    current
                        .into_iter()
                        .flat_map(|ix| graph.neighbors(ix, rels))
                        .filter(|ix| seen.insert(*ix))
                        .collect()
                }
            };
            if current.is_empty() {
                break;
            }
        }

        current
            .into_iter()
            .map(|ix| graph.node(ix).id().clone())
            .collect()
    }
}
