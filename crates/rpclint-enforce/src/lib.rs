//! Validation engine for JSON-RPC bindings over a shape graph.
//!
//! Runs the binding rules against an immutable [`ShapeGraph`](rpclint_core::graph::ShapeGraph)
//! and produces diagnostics:
//! - J001: notification returns data (output structure has members)
//! - J002: payload trait outside the top-level members of an operation's input, output or error
//! - J003: operation of a JSON-RPC service is neither a request nor a notification
//! - J004: duplicate method name within a JSON-RPC service

pub mod types;
pub mod suppress;
pub mod rules;
pub mod engine;

pub use engine::{validate, ValidationEngine};
pub use types::{Diagnostic, Severity, ValidationReport};
