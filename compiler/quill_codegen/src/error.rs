//! Generation errors.
//!
//! Every variant is a compile-time failure visible to the driver. None of
//! them is ever turned into a runtime error of the generated program.

use std::io;

use quill_ir::{Location, NodeKind};
use thiserror::Error;

use crate::EmitContext;

#[derive(Debug, Error)]
pub enum EmitError {
    /// A node was asked for a context it cannot produce (driver bug).
    #[error("{location}: {kind} node cannot be emitted in {context} context")]
    Unsupported {
        kind: NodeKind,
        context: EmitContext,
        location: Location,
    },

    /// No generator is registered for the node's kind.
    #[error("{location}: no generator registered for {kind} nodes")]
    DispatchMiss { kind: NodeKind, location: Location },

    /// The node's payload or operands do not match its generator.
    #[error("{location}: {kind} node does not have the shape its generator expects")]
    ShapeMismatch { kind: NodeKind, location: Location },

    /// The sink rejected a write. Output written so far is invalid.
    #[error("failed to write generated source: {0}")]
    Sink(#[from] io::Error),
}

impl EmitError {
    /// Source location of the node that failed, if the error has one.
    pub fn location(&self) -> Option<Location> {
        match self {
            EmitError::Unsupported { location, .. }
            | EmitError::DispatchMiss { location, .. }
            | EmitError::ShapeMismatch { location, .. } => Some(*location),
            EmitError::Sink(_) => None,
        }
    }
}

/// Result type for emission operations.
pub type EmitResult<T = ()> = Result<T, EmitError>;
