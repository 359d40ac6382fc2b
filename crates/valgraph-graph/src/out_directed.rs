//! Directed value graph with outgoing adjacency only

use crate::adjacency::{
    AdjacencyList, Entries, edge_not_found, merge_sorted, uninitialized_edge,
};
use crate::config::GraphConfig;
use crate::convert;
use crate::traits::{Edge, PlainGraph, ValEdge, ValueGraph, ValueGraphMut, fmt_summary};
use crate::vertices::{VertexStore, vertex_at};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, trace};
use valgraph_core::{Error, Key, Result, ScalarValue, ValueSchema, ValueTuple, VertexIndex};

/// A directed graph storing only outgoing adjacency
///
/// Each edge is stored exactly once, in its source's list. Queries about
/// incoming edges scan every list.
#[derive(Debug, Clone)]
pub struct OutDirectedValueGraph<V = u32> {
    vertices: VertexStore<V>,
    edge_schema: ValueSchema,
    out_lists: Vec<AdjacencyList<V>>,
    edge_count: usize,
}

impl<V: VertexIndex> OutDirectedValueGraph<V> {
    /// Create a graph with `n` vertices and no values
    pub fn new(n: usize) -> Result<Self> {
        Self::with_config(n, GraphConfig::new())
    }

    /// Create a graph with `n` vertices and no edges
    pub fn with_config(n: usize, config: GraphConfig<V>) -> Result<Self> {
        let GraphConfig {
            vertex_schema,
            vertex_init,
            edge_schema,
            ..
        } = config;

        let vertices = VertexStore::new(n, vertex_schema, &vertex_init)?;
        let out_lists = (0..n).map(|_| AdjacencyList::new(&edge_schema)).collect();

        debug!("Created out-directed graph with {} vertices", n);
        Ok(Self {
            vertices,
            edge_schema,
            out_lists,
            edge_count: 0,
        })
    }

    /// Copy the vertices and edges of a plain graph
    ///
    /// An undirected source contributes both directions of each edge.
    pub fn from_plain_graph<S: PlainGraph>(source: &S, mut config: GraphConfig<V>) -> Result<Self> {
        let pairs = convert::edge_positions(source, true)?;
        let edge_init = std::mem::take(&mut config.edge_init);
        let mut graph = Self::with_config(source.vertex_count(), config)?;

        for (s, d) in pairs {
            let (s, d) = (vertex_at::<V>(s)?, vertex_at::<V>(d)?);
            let values = convert::initial_values(&edge_init, &graph.edge_schema, s, d)?;
            graph.upsert(s, d, values.as_ref())?;
        }

        debug!(
            "Converted plain graph into out-directed graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count
        );
        Ok(graph)
    }

    fn upsert(&mut self, s: V, d: V, values: Option<&ValueTuple>) -> Result<bool> {
        let sp = self.vertices.position(s)?;
        self.vertices.position(d)?;
        let list = &mut self.out_lists[sp];
        match list.find(d) {
            Ok(at) => {
                if let Some(values) = values {
                    list.set_row(at, values)?;
                    trace!("Overwrote values of edge {} -> {}", s, d);
                }
                Ok(false)
            }
            Err(at) => {
                list.insert(at, d, values)?;
                self.edge_count += 1;
                debug!("Added edge {} -> {}", s, d);
                Ok(true)
            }
        }
    }

    fn out_list(&self, v: V) -> Result<&AdjacencyList<V>> {
        let pos = self.vertices.position(v)?;
        Ok(&self.out_lists[pos])
    }

    /// Sources of the edges into `v`, found by scanning every list
    fn scan_in(&self, v: V) -> Result<Vec<V>> {
        self.vertices.position(v)?;
        let mut sources = Vec::new();
        for (pos, list) in self.out_lists.iter().enumerate() {
            if list.contains(v) {
                sources.push(vertex_at::<V>(pos)?);
            }
        }
        Ok(sources)
    }
}

impl<V: VertexIndex> PlainGraph for OutDirectedValueGraph<V> {
    type Vertex = V;

    fn is_directed(&self) -> bool {
        true
    }

    fn vertex_count(&self) -> usize {
        self.vertices.count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, s: V, d: V) -> bool {
        self.vertices.contains(d) && self.out_list(s).is_ok_and(|list| list.contains(d))
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        Entries::new(&self.out_lists, false).map(|entry| Edge::directed(entry.src, entry.dst))
    }
}

impl<V: VertexIndex> ValueGraph for OutDirectedValueGraph<V> {
    fn vertex_schema(&self) -> &ValueSchema {
        self.vertices.schema()
    }

    fn edge_schema(&self) -> &ValueSchema {
        &self.edge_schema
    }

    fn outneighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        Ok(Cow::Borrowed(self.out_list(v)?.neighbors()))
    }

    fn inneighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        Ok(Cow::Owned(self.scan_in(v)?))
    }

    fn all_neighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        let sources = self.scan_in(v)?;
        Ok(Cow::Owned(merge_sorted(self.out_list(v)?.neighbors(), &sources)))
    }

    fn get_vertex_val<'k>(&self, v: V, key: impl Into<Key<'k>>) -> Result<ScalarValue> {
        self.vertices.get(v, key.into())
    }

    fn get_vertex_vals(&self, v: V) -> Result<ValueTuple> {
        self.vertices.row(v)
    }

    fn get_edge_val<'k>(&self, s: V, d: V, key: impl Into<Key<'k>>) -> Result<ScalarValue> {
        let key = key.into();
        let field = self.edge_schema.resolve(key)?;
        self.vertices.position(d)?;
        let list = self.out_list(s)?;
        let edge = Edge::directed(s, d);
        let at = list.find(d).map_err(|_| edge_not_found(edge))?;
        list.get(at, field)
            .map_err(|_| Error::Uninitialized(format!("value {key} of edge {edge}")))
    }

    fn get_edge_vals(&self, s: V, d: V) -> Result<ValueTuple> {
        self.vertices.position(d)?;
        let list = self.out_list(s)?;
        let edge = Edge::directed(s, d);
        let at = list.find(d).map_err(|_| edge_not_found(edge))?;
        list.row(at).map_err(|_| uninitialized_edge(edge))
    }

    fn outedgevals<'k>(&self, v: V, key: impl Into<Key<'k>>) -> Result<Vec<ScalarValue>> {
        let key = key.into();
        let field = self.edge_schema.resolve(key)?;
        self.out_list(v)?
            .field_values(field)
            .map_err(|_| Error::Uninitialized(format!("value {key} of an edge out of {v}")))
    }

    fn inedgevals<'k>(&self, v: V, key: impl Into<Key<'k>>) -> Result<Vec<ScalarValue>> {
        let key = key.into();
        let field = self.edge_schema.resolve(key)?;
        self.vertices.position(v)?;
        let mut values = Vec::new();
        for (pos, list) in self.out_lists.iter().enumerate() {
            if let Ok(at) = list.find(v) {
                let edge = Edge::directed(vertex_at::<V>(pos)?, v);
                let value = list
                    .get(at, field)
                    .map_err(|_| Error::Uninitialized(format!("value {key} of edge {edge}")))?;
                values.push(value);
            }
        }
        Ok(values)
    }

    fn edges_with_values(&self) -> impl Iterator<Item = Result<ValEdge<V>>> + '_ {
        Entries::new(&self.out_lists, false).map(|entry| {
            let edge = Edge::directed(entry.src, entry.dst);
            entry
                .list
                .row(entry.at)
                .map(|values| ValEdge { edge, values })
                .map_err(|_| uninitialized_edge(edge))
        })
    }
}

impl<V: VertexIndex> ValueGraphMut for OutDirectedValueGraph<V> {
    fn add_vertex(&mut self, values: ValueTuple) -> Result<V> {
        let v = self.vertices.push(&values)?;
        self.out_lists.push(AdjacencyList::new(&self.edge_schema));
        debug!("Added vertex {}", v);
        Ok(v)
    }

    fn add_edge(&mut self, s: V, d: V, values: ValueTuple) -> Result<bool> {
        self.edge_schema.check(&values)?;
        self.upsert(s, d, Some(&values))
    }

    fn rem_edge(&mut self, s: V, d: V) -> Result<bool> {
        let sp = self.vertices.position(s)?;
        self.vertices.position(d)?;
        let list = &mut self.out_lists[sp];
        match list.find(d) {
            Ok(at) => {
                list.remove(at);
                self.edge_count -= 1;
                debug!("Removed edge {} -> {}", s, d);
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    fn set_vertex_val<'k>(
        &mut self,
        v: V,
        key: impl Into<Key<'k>>,
        value: impl Into<ScalarValue>,
    ) -> Result<()> {
        self.vertices.set(v, key.into(), value.into())
    }

    fn set_vertex_vals(&mut self, v: V, values: ValueTuple) -> Result<()> {
        self.vertices.set_row(v, &values)
    }

    fn set_edge_val<'k>(
        &mut self,
        s: V,
        d: V,
        key: impl Into<Key<'k>>,
        value: impl Into<ScalarValue>,
    ) -> Result<bool> {
        let value = value.into();
        let field = self.edge_schema.resolve(key.into())?;
        self.edge_schema.check_value(field, &value)?;

        let sp = self.vertices.position(s)?;
        self.vertices.position(d)?;
        let list = &mut self.out_lists[sp];
        match list.find(d) {
            Ok(at) => {
                list.set(at, field, value)?;
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    fn set_edge_vals(&mut self, s: V, d: V, values: ValueTuple) -> Result<bool> {
        self.edge_schema.check(&values)?;
        let sp = self.vertices.position(s)?;
        self.vertices.position(d)?;
        let list = &mut self.out_lists[sp];
        match list.find(d) {
            Ok(at) => {
                list.set_row(at, &values)?;
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }
}

impl<V: VertexIndex> fmt::Display for OutDirectedValueGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_summary(self, "OutDirectedValueGraph", f)
    }
}
