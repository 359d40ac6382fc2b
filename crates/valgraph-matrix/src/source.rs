//! Read access to a graph behind a reference or a shared handle

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, RwLock};
use valgraph_core::{Error, Result};

/// Something a matrix view can read a graph through
///
/// Views hold the source, never a copy of the graph, so every entry they
/// report is computed from the graph as it is at the time of the read.
pub trait GraphSource {
    type Graph;

    /// Run `f` against the current state of the graph
    fn read<R>(&self, f: impl FnOnce(&Self::Graph) -> R) -> Result<R>;
}

impl<G> GraphSource for &G {
    type Graph = G;

    fn read<R>(&self, f: impl FnOnce(&G) -> R) -> Result<R> {
        Ok(f(self))
    }
}

impl<G> GraphSource for Rc<RefCell<G>> {
    type Graph = G;

    fn read<R>(&self, f: impl FnOnce(&G) -> R) -> Result<R> {
        let graph = self
            .try_borrow()
            .map_err(|_| Error::Internal("Graph is mutably borrowed".to_string()))?;
        Ok(f(&graph))
    }
}

impl<G> GraphSource for Arc<RwLock<G>> {
    type Graph = G;

    fn read<R>(&self, f: impl FnOnce(&G) -> R) -> Result<R> {
        let graph = RwLock::read(self)
            .map_err(|_| Error::Internal("Failed to acquire graph read lock".to_string()))?;
        Ok(f(&graph))
    }
}
