//! A minimal value-less graph

use crate::traits::{Edge, PlainGraph};
use crate::vertices::invalid_vertex;
use std::collections::BTreeSet;
use valgraph_core::{Error, Result, VertexIndex};

/// A plain graph backed by an ordered edge set
///
/// Useful as a conversion source and for describing graph shapes in tests.
/// Undirected edges are kept with the smaller endpoint first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListGraph<V = u32> {
    directed: bool,
    vertex_count: usize,
    edges: BTreeSet<(V, V)>,
}

impl<V: VertexIndex> EdgeListGraph<V> {
    /// An undirected graph with `n` vertices and no edges
    pub fn new_undirected(n: usize) -> Result<Self> {
        Self::new(n, false)
    }

    /// A directed graph with `n` vertices and no edges
    pub fn new_directed(n: usize) -> Result<Self> {
        Self::new(n, true)
    }

    fn new(vertex_count: usize, directed: bool) -> Result<Self> {
        if vertex_count > V::max_vertex_count() {
            return Err(Error::CapacityExceeded(format!(
                "{vertex_count} vertices do not fit index type {}",
                V::type_name()
            )));
        }
        Ok(Self {
            directed,
            vertex_count,
            edges: BTreeSet::new(),
        })
    }

    /// Build a graph from a list of edges
    pub fn from_edges<I>(n: usize, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new(n, directed)?;
        for (s, d) in edges {
            graph.add_edge(s, d)?;
        }
        Ok(graph)
    }

    /// Add the edge `(s, d)`; returns false if it was already present
    pub fn add_edge(&mut self, s: V, d: V) -> Result<bool> {
        for v in [s, d] {
            if !self.has_vertex(v) {
                return Err(invalid_vertex(v, self.vertex_count));
            }
        }
        let pair = if self.directed {
            (s, d)
        } else {
            (s.min(d), s.max(d))
        };
        Ok(self.edges.insert(pair))
    }
}

impl<V: VertexIndex> PlainGraph for EdgeListGraph<V> {
    type Vertex = V;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn has_edge(&self, s: V, d: V) -> bool {
        let pair = if self.directed {
            (s, d)
        } else {
            (s.min(d), s.max(d))
        };
        self.edges.contains(&pair)
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        let directed = self.directed;
        self.edges.iter().map(move |&(s, d)| Edge { src: s, dst: d, directed })
    }
}
