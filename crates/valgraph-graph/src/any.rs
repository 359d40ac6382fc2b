//! Runtime choice of graph kind

use crate::config::{GraphConfig, GraphKind};
use crate::in_out_directed::InOutDirectedValueGraph;
use crate::out_directed::OutDirectedValueGraph;
use crate::traits::{Edge, PlainGraph, ValEdge, ValueGraph, ValueGraphMut};
use crate::undirected::UndirectedValueGraph;
use std::borrow::Cow;
use std::fmt;
use valgraph_core::{Key, Result, ScalarValue, ValueSchema, ValueTuple, VertexIndex};

/// A value graph whose kind is chosen at runtime
#[derive(Debug, Clone)]
pub enum AnyValueGraph<V = u32> {
    Undirected(UndirectedValueGraph<V>),
    OutDirected(OutDirectedValueGraph<V>),
    InOutDirected(InOutDirectedValueGraph<V>),
}

type BoxedIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

macro_rules! dispatch {
    ($graph:expr, $g:ident => $body:expr) => {
        match $graph {
            AnyValueGraph::Undirected($g) => $body,
            AnyValueGraph::OutDirected($g) => $body,
            AnyValueGraph::InOutDirected($g) => $body,
        }
    };
}

impl<V: VertexIndex> AnyValueGraph<V> {
    /// The storage layout of the wrapped graph
    pub fn kind(&self) -> GraphKind {
        match self {
            AnyValueGraph::Undirected(_) => GraphKind::Undirected,
            AnyValueGraph::OutDirected(_) => GraphKind::OutDirected,
            AnyValueGraph::InOutDirected(_) => GraphKind::InOutDirected,
        }
    }
}

/// Create a graph of the given kind with `n` vertices and no edges
pub fn new_graph<V: VertexIndex>(
    kind: GraphKind,
    n: usize,
    config: GraphConfig<V>,
) -> Result<AnyValueGraph<V>> {
    Ok(match kind {
        GraphKind::Undirected => {
            AnyValueGraph::Undirected(UndirectedValueGraph::with_config(n, config)?)
        }
        GraphKind::OutDirected => {
            AnyValueGraph::OutDirected(OutDirectedValueGraph::with_config(n, config)?)
        }
        GraphKind::InOutDirected => {
            AnyValueGraph::InOutDirected(InOutDirectedValueGraph::with_config(n, config)?)
        }
    })
}

/// Convert a plain graph into a value graph of the given kind
pub fn from_plain_graph<V: VertexIndex, S: PlainGraph>(
    kind: GraphKind,
    source: &S,
    config: GraphConfig<V>,
) -> Result<AnyValueGraph<V>> {
    Ok(match kind {
        GraphKind::Undirected => {
            AnyValueGraph::Undirected(UndirectedValueGraph::from_plain_graph(source, config)?)
        }
        GraphKind::OutDirected => {
            AnyValueGraph::OutDirected(OutDirectedValueGraph::from_plain_graph(source, config)?)
        }
        GraphKind::InOutDirected => AnyValueGraph::InOutDirected(
            InOutDirectedValueGraph::from_plain_graph(source, config)?,
        ),
    })
}

impl<V: VertexIndex> PlainGraph for AnyValueGraph<V> {
    type Vertex = V;

    fn is_directed(&self) -> bool {
        dispatch!(self, g => g.is_directed())
    }

    fn vertex_count(&self) -> usize {
        dispatch!(self, g => g.vertex_count())
    }

    fn edge_count(&self) -> usize {
        dispatch!(self, g => g.edge_count())
    }

    fn has_edge(&self, s: V, d: V) -> bool {
        dispatch!(self, g => g.has_edge(s, d))
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        dispatch!(self, g => Box::new(g.edges()) as BoxedIter<'_, Edge<V>>)
    }
}

impl<V: VertexIndex> ValueGraph for AnyValueGraph<V> {
    fn vertex_schema(&self) -> &ValueSchema {
        dispatch!(self, g => g.vertex_schema())
    }

    fn edge_schema(&self) -> &ValueSchema {
        dispatch!(self, g => g.edge_schema())
    }

    fn outneighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        dispatch!(self, g => g.outneighbors(v))
    }

    fn inneighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        dispatch!(self, g => g.inneighbors(v))
    }

    fn all_neighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        dispatch!(self, g => g.all_neighbors(v))
    }

    fn get_vertex_val<'k>(&self, v: V, key: impl Into<Key<'k>>) -> Result<ScalarValue> {
        let key = key.into();
        dispatch!(self, g => g.get_vertex_val(v, key))
    }

    fn get_vertex_vals(&self, v: V) -> Result<ValueTuple> {
        dispatch!(self, g => g.get_vertex_vals(v))
    }

    fn get_edge_val<'k>(&self, s: V, d: V, key: impl Into<Key<'k>>) -> Result<ScalarValue> {
        let key = key.into();
        dispatch!(self, g => g.get_edge_val(s, d, key))
    }

    fn get_edge_vals(&self, s: V, d: V) -> Result<ValueTuple> {
        dispatch!(self, g => g.get_edge_vals(s, d))
    }

    fn outedgevals<'k>(&self, v: V, key: impl Into<Key<'k>>) -> Result<Vec<ScalarValue>> {
        let key = key.into();
        dispatch!(self, g => g.outedgevals(v, key))
    }

    fn inedgevals<'k>(&self, v: V, key: impl Into<Key<'k>>) -> Result<Vec<ScalarValue>> {
        let key = key.into();
        dispatch!(self, g => g.inedgevals(v, key))
    }

    fn edges_with_values(&self) -> impl Iterator<Item = Result<ValEdge<V>>> + '_ {
        dispatch!(self, g => {
            Box::new(g.edges_with_values()) as BoxedIter<'_, Result<ValEdge<V>>>
        })
    }
}

impl<V: VertexIndex> ValueGraphMut for AnyValueGraph<V> {
    fn add_vertex(&mut self, values: ValueTuple) -> Result<V> {
        dispatch!(self, g => g.add_vertex(values))
    }

    fn add_edge(&mut self, s: V, d: V, values: ValueTuple) -> Result<bool> {
        dispatch!(self, g => g.add_edge(s, d, values))
    }

    fn rem_edge(&mut self, s: V, d: V) -> Result<bool> {
        dispatch!(self, g => g.rem_edge(s, d))
    }

    fn set_vertex_val<'k>(
        &mut self,
        v: V,
        key: impl Into<Key<'k>>,
        value: impl Into<ScalarValue>,
    ) -> Result<()> {
        let (key, value) = (key.into(), value.into());
        dispatch!(self, g => g.set_vertex_val(v, key, value))
    }

    fn set_vertex_vals(&mut self, v: V, values: ValueTuple) -> Result<()> {
        dispatch!(self, g => g.set_vertex_vals(v, values))
    }

    fn set_edge_val<'k>(
        &mut self,
        s: V,
        d: V,
        key: impl Into<Key<'k>>,
        value: impl Into<ScalarValue>,
    ) -> Result<bool> {
        let (key, value) = (key.into(), value.into());
        dispatch!(self, g => g.set_edge_val(s, d, key, value))
    }

    fn set_edge_vals(&mut self, s: V, d: V, values: ValueTuple) -> Result<bool> {
        dispatch!(self, g => g.set_edge_vals(s, d, values))
    }
}

impl<V: VertexIndex> fmt::Display for AnyValueGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, g => fmt::Display::fmt(g, f))
    }
}

impl<V> From<UndirectedValueGraph<V>> for AnyValueGraph<V> {
    fn from(graph: UndirectedValueGraph<V>) -> Self {
        AnyValueGraph::Undirected(graph)
    }
}

impl<V> From<OutDirectedValueGraph<V>> for AnyValueGraph<V> {
    fn from(graph: OutDirectedValueGraph<V>) -> Self {
        AnyValueGraph::OutDirected(graph)
    }
}

impl<V> From<InOutDirectedValueGraph<V>> for AnyValueGraph<V> {
    fn from(graph: InOutDirectedValueGraph<V>) -> Self {
        AnyValueGraph::InOutDirected(graph)
    }
}
