//! Query and mutation interfaces shared by the graph kinds
//!
//! [`PlainGraph`] is the value-less capability that external graphs can
//! implement too; conversion and the adjacency matrix view only need that.
//! [`ValueGraph`] adds neighbor and value queries, [`ValueGraphMut`] the
//! mutation protocol.

use std::borrow::Cow;
use std::fmt;
use valgraph_core::{Key, Result, ScalarValue, ValueSchema, ValueTuple, VertexIndex, Vertices};

/// An edge descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    pub src: V,
    pub dst: V,
    pub directed: bool,
}

impl<V: VertexIndex> Edge<V> {
    /// An ordered edge `src -> dst`
    pub fn directed(src: V, dst: V) -> Self {
        Self {
            src,
            dst,
            directed: true,
        }
    }

    /// An unordered edge, stored with the smaller endpoint first
    pub fn undirected(src: V, dst: V) -> Self {
        Self {
            src: src.min(dst),
            dst: src.max(dst),
            directed: false,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "{} {} {}", self.src, arrow, self.dst)
    }
}

/// An edge descriptor carrying the edge's values
#[derive(Debug, Clone, PartialEq)]
pub struct ValEdge<V> {
    pub edge: Edge<V>,
    pub values: ValueTuple,
}

impl<V: fmt::Display> fmt::Display for ValEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            write!(f, "{}", self.edge)
        } else {
            write!(f, "{} with values {}", self.edge, self.values)
        }
    }
}

/// A graph without values: vertex range, directedness and edge membership
pub trait PlainGraph {
    /// Integer type of the vertex indices
    type Vertex: VertexIndex;

    /// Returns true if edges are ordered pairs
    fn is_directed(&self) -> bool;

    /// Get the number of vertices `n`
    fn vertex_count(&self) -> usize;

    /// Get the number of edges; an undirected edge counts once
    fn edge_count(&self) -> usize;

    /// Check if `v` lies in `1..=n`
    fn has_vertex(&self, v: Self::Vertex) -> bool {
        v.to_position().is_some_and(|pos| pos < self.vertex_count())
    }

    /// Check if the edge `(s, d)` exists; false if either vertex is invalid
    fn has_edge(&self, s: Self::Vertex, d: Self::Vertex) -> bool;

    /// The vertices `1..=n` in ascending order
    fn vertices(&self) -> Vertices<Self::Vertex> {
        Vertices::new(self.vertex_count())
    }

    /// All edges, each undirected edge once with `src <= dst`
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Vertex>> + '_;

    /// Name of the vertex index type
    fn eltype_name(&self) -> &'static str {
        <Self::Vertex as VertexIndex>::type_name()
    }
}

/// Neighbor and value queries over a graph whose vertices and edges carry values
pub trait ValueGraph: PlainGraph {
    /// Fields attached to every vertex
    fn vertex_schema(&self) -> &ValueSchema;

    /// Fields attached to every edge
    fn edge_schema(&self) -> &ValueSchema;

    /// Check if `key` names a vertex field
    fn has_vertex_key<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.vertex_schema().has_key(key.into())
    }

    /// Check if `key` names an edge field
    fn has_edge_key<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        self.edge_schema().has_key(key.into())
    }

    /// Vertices `d` with an edge `v -> d`, ascending
    fn outneighbors(&self, v: Self::Vertex) -> Result<Cow<'_, [Self::Vertex]>>;

    /// Vertices `s` with an edge `s -> v`, ascending
    fn inneighbors(&self, v: Self::Vertex) -> Result<Cow<'_, [Self::Vertex]>>;

    /// Union of in- and out-neighbors, ascending
    fn all_neighbors(&self, v: Self::Vertex) -> Result<Cow<'_, [Self::Vertex]>>;

    /// Read one value of a vertex
    fn get_vertex_val<'k>(&self, v: Self::Vertex, key: impl Into<Key<'k>>) -> Result<ScalarValue>;

    /// Read all values of a vertex
    fn get_vertex_vals(&self, v: Self::Vertex) -> Result<ValueTuple>;

    /// Read one value of the edge `(s, d)`
    fn get_edge_val<'k>(
        &self,
        s: Self::Vertex,
        d: Self::Vertex,
        key: impl Into<Key<'k>>,
    ) -> Result<ScalarValue>;

    /// Read all values of the edge `(s, d)`
    fn get_edge_vals(&self, s: Self::Vertex, d: Self::Vertex) -> Result<ValueTuple>;

    /// Read one value of the edge `(s, d)`, or `default` wherever
    /// [`get_edge_val`](ValueGraph::get_edge_val) would fail
    fn get_edge_val_or<'k>(
        &self,
        s: Self::Vertex,
        d: Self::Vertex,
        key: impl Into<Key<'k>>,
        default: ScalarValue,
    ) -> ScalarValue {
        self.get_edge_val(s, d, key).unwrap_or(default)
    }

    /// One field of every outgoing edge of `v`, in adjacency order
    fn outedgevals<'k>(&self, v: Self::Vertex, key: impl Into<Key<'k>>) -> Result<Vec<ScalarValue>>;

    /// One field of every incoming edge of `v`, in adjacency order
    fn inedgevals<'k>(&self, v: Self::Vertex, key: impl Into<Key<'k>>) -> Result<Vec<ScalarValue>>;

    /// All edges with their values, in the order of [`edges`](PlainGraph::edges)
    fn edges_with_values(&self) -> impl Iterator<Item = Result<ValEdge<Self::Vertex>>> + '_;
}

/// The mutation protocol
///
/// Every operation validates its input completely before touching storage,
/// so an error never leaves mirrored copies out of sync.
pub trait ValueGraphMut: ValueGraph {
    /// Append vertex `n + 1` with the given values and return it
    fn add_vertex(&mut self, values: ValueTuple) -> Result<Self::Vertex>;

    /// Add the edge `(s, d)` or overwrite its values
    ///
    /// Returns `true` if the edge was inserted and `false` if it was already
    /// present. The values are written in both cases.
    fn add_edge(&mut self, s: Self::Vertex, d: Self::Vertex, values: ValueTuple) -> Result<bool>;

    /// Remove the edge `(s, d)`; returns whether anything was removed
    fn rem_edge(&mut self, s: Self::Vertex, d: Self::Vertex) -> Result<bool>;

    /// Overwrite one value of a vertex
    fn set_vertex_val<'k>(
        &mut self,
        v: Self::Vertex,
        key: impl Into<Key<'k>>,
        value: impl Into<ScalarValue>,
    ) -> Result<()>;

    /// Overwrite all values of a vertex
    fn set_vertex_vals(&mut self, v: Self::Vertex, values: ValueTuple) -> Result<()>;

    /// Overwrite one value of the edge `(s, d)`; `false` if the edge is absent
    fn set_edge_val<'k>(
        &mut self,
        s: Self::Vertex,
        d: Self::Vertex,
        key: impl Into<Key<'k>>,
        value: impl Into<ScalarValue>,
    ) -> Result<bool>;

    /// Overwrite all values of the edge `(s, d)`; `false` if the edge is absent
    fn set_edge_vals(&mut self, s: Self::Vertex, d: Self::Vertex, values: ValueTuple)
    -> Result<bool>;
}

/// Writes the `{n, m} <kind> <Type> with` summary shared by all graph kinds
pub(crate) fn fmt_summary<G: ValueGraph>(
    graph: &G,
    type_name: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let direction = if graph.is_directed() { "directed" } else { "undirected" };
    writeln!(
        f,
        "{{{}, {}}} {} {} with",
        graph.vertex_count(),
        graph.edge_count(),
        direction,
        type_name
    )?;
    writeln!(f, "              eltype: {}", graph.eltype_name())?;
    writeln!(f, "  vertex value types: {}", graph.vertex_schema())?;
    write!(f, "    edge value types: {}", graph.edge_schema())
}

#[cfg(test)]
mod tests {
    use super::*;
    use valgraph_core::vals;

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::undirected(6u8, 1).to_string(), "1 -- 6");
        assert_eq!(Edge::directed(6u8, 1).to_string(), "6 -> 1");
    }

    #[test]
    fn test_val_edge_display() {
        let e = ValEdge {
            edge: Edge::undirected(2u32, 4),
            values: vals![81.0f64],
        };
        assert_eq!(e.to_string(), "2 -- 4 with values (81.0,)");
    }
}
