//! Node kind to generator dispatch.

use std::fmt;

use quill_ir::{ExprArena, ExprId, ExprRef, NodeKind};
use rustc_hash::FxHashMap;

use crate::generators;
use crate::{Bound, EmitError, EmitResult, Generator};

/// Builds the generator for one node.
pub type GeneratorFactory = for<'a> fn(Bound<'a>) -> Box<dyn Generator + 'a>;

/// Lookup table from [`NodeKind`] to [`GeneratorFactory`].
///
/// Resolution is a pure function of the node: nothing is cached on the tree.
/// A kind with no factory is grammar/generator drift and is reported as
/// [`EmitError::DispatchMiss`].
#[derive(Clone)]
pub struct Registry {
    factories: FxHashMap<NodeKind, GeneratorFactory>,
}

impl Registry {
    /// A registry with no generators.
    pub fn empty() -> Self {
        Registry {
            factories: FxHashMap::default(),
        }
    }

    /// A registry covering every kind in [`NodeKind::ALL`].
    pub fn standard() -> Self {
        let mut registry = Registry::empty();
        for (kind, factory) in generators::standard_factories() {
            registry.register(kind, factory);
        }
        registry
    }

    /// Install `factory` for `kind`, returning the one it replaces.
    pub fn register(&mut self, kind: NodeKind, factory: GeneratorFactory) -> Option<GeneratorFactory> {
        self.factories.insert(kind, factory)
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Grammar kinds with no registered factory, in declaration order.
    pub fn missing_kinds(&self) -> Vec<NodeKind> {
        NodeKind::ALL
            .into_iter()
            .filter(|kind| !self.contains(*kind))
            .collect()
    }

    /// Whether every grammar kind resolves.
    pub fn is_total(&self) -> bool {
        self.missing_kinds().is_empty()
    }

    /// Generator for node `id` of `arena`.
    pub fn resolve<'a>(
        &'a self,
        arena: &'a ExprArena,
        id: ExprId,
    ) -> EmitResult<Box<dyn Generator + 'a>> {
        self.resolve_node(arena.node(id))
    }

    /// Generator for an already borrowed node.
    pub fn resolve_node<'a>(&'a self, node: ExprRef<'a>) -> EmitResult<Box<dyn Generator + 'a>> {
        let kind = node.kind();
        let Some(factory) = self.factories.get(&kind) else {
            tracing::debug!(?kind, id = ?node.id(), "no generator registered");
            return Err(EmitError::DispatchMiss {
                kind,
                location: node.location(),
            });
        };
        tracing::trace!(?kind, id = ?node.id(), "resolved generator");
        Ok(factory(Bound::new(self, node)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::standard()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.factories.keys().copied().collect();
        kinds.sort();
        f.debug_struct("Registry").field("kinds", &kinds).finish()
    }
}
