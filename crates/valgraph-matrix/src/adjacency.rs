//! Live 0/1 view of edge membership

use crate::source::GraphSource;
use ndarray::Array2;
use valgraph_core::{Error, Result, VertexIndex};
use valgraph_graph::PlainGraph;

type VertexOf<S> = <<S as GraphSource>::Graph as PlainGraph>::Vertex;

/// Validate an `(i, j)` index pair against the current vertex count
pub(crate) fn check_index<G: PlainGraph>(graph: &G, i: G::Vertex, j: G::Vertex) -> Result<()> {
    for v in [i, j] {
        if !graph.has_vertex(v) {
            return Err(Error::InvalidVertex {
                vertex: v.to_string(),
                vertex_count: graph.vertex_count(),
            });
        }
    }
    Ok(())
}

/// The adjacency matrix of a graph
///
/// Entry `(i, j)` is 1 if the graph has the edge `i -> j` (or `i -- j`) and
/// 0 otherwise. Indices are vertices, so they start at 1. Works with any
/// [`PlainGraph`], including graphs without values.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<S> {
    source: S,
}

impl<S> AdjacencyMatrix<S>
where
    S: GraphSource,
    S::Graph: PlainGraph,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// `(n, n)` for the graph's current vertex count
    pub fn shape(&self) -> Result<(usize, usize)> {
        self.source.read(|g| (g.vertex_count(), g.vertex_count()))
    }

    pub fn get(&self, i: VertexOf<S>, j: VertexOf<S>) -> Result<u8> {
        self.source.read(|g| -> Result<u8> {
            check_index(g, i, j)?;
            Ok(u8::from(g.has_edge(i, j)))
        })?
    }

    /// Copy the current entries into a dense array, row `i - 1` for vertex `i`
    pub fn to_array(&self) -> Result<Array2<u8>> {
        self.source.read(|g| -> Result<Array2<u8>> {
            let n = g.vertex_count();
            let mut array = Array2::zeros((n, n));
            for edge in g.edges() {
                let (s, d) = (position(edge.src)?, position(edge.dst)?);
                array[[s, d]] = 1;
                if !edge.directed {
                    array[[d, s]] = 1;
                }
            }
            Ok(array)
        })?
    }
}

/// Array position of a vertex reported by the graph itself
pub(crate) fn position<V: VertexIndex>(v: V) -> Result<usize> {
    v.to_position()
        .ok_or_else(|| Error::Internal(format!("graph reported invalid vertex {v}")))
}
