//! Core types, shape graph, and configuration for rpclint.
//!
//! This crate provides the foundational data structures used across all rpclint crates:
//! - [`types`]: Shape kinds, relationship kinds, and [`ModelError`](types::ModelError)
//! - [`shape`]: Shape ids and shape nodes
//! - [`traits`]: Trait values and the injected JSON-RPC trait ids
//! - [`graph`]: The immutable [`ShapeGraph`](graph::ShapeGraph) and its builder
//! - [`selector`]: Declarative structural patterns over the graph
//! - [`loader`]: JSON AST model loading
//! - [`config`]: Configuration loading from `rpclint.json`

pub mod config;
pub mod graph;
pub mod loader;
pub mod selector;
pub mod shape;
pub mod traits;
pub mod types;
