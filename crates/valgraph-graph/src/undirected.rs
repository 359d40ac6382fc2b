//! Undirected value graph

use crate::adjacency::{
    AdjacencyList, Entries, Lookup, edge_not_found, out_of_sync, uninitialized_edge,
};
use crate::config::GraphConfig;
use crate::convert;
use crate::traits::{Edge, PlainGraph, ValEdge, ValueGraph, ValueGraphMut, fmt_summary};
use crate::vertices::{VertexStore, vertex_at};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, trace};
use valgraph_core::{Error, Key, Result, ScalarValue, ValueSchema, ValueTuple, VertexIndex};

/// An undirected graph whose vertices and edges carry values
///
/// Every vertex owns one adjacency list. A non-loop edge `{s, d}` is stored
/// twice, once in each endpoint's list, and every mutation writes both
/// copies of its values. A self-loop is stored once.
#[derive(Debug, Clone)]
pub struct UndirectedValueGraph<V = u32> {
    vertices: VertexStore<V>,
    edge_schema: ValueSchema,
    adjacency: Vec<AdjacencyList<V>>,
    edge_count: usize,
}

impl<V: VertexIndex> UndirectedValueGraph<V> {
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
        let adjacency = (0..n).map(|_| AdjacencyList::new(&edge_schema)).collect();

        debug!("Created undirected graph with {} vertices", n);
        Ok(Self {
            vertices,
            edge_schema,
            adjacency,
            edge_count: 0,
        })
    }

    /// Copy the vertices and edges of a plain graph
    ///
    /// The edge initializer runs once per unordered pair, with `s <= d`.
    pub fn from_plain_graph<S: PlainGraph>(source: &S, mut config: GraphConfig<V>) -> Result<Self> {
        let pairs = convert::edge_positions(source, false)?;
        let edge_init = std::mem::take(&mut config.edge_init);
        let mut graph = Self::with_config(source.vertex_count(), config)?;

        for (s, d) in pairs {
            let (s, d) = (vertex_at::<V>(s)?, vertex_at::<V>(d)?);
            let values = convert::initial_values(&edge_init, &graph.edge_schema, s, d)?;
            graph.upsert(s, d, values.as_ref())?;
        }

        debug!(
            "Converted plain graph into undirected graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count
        );
        Ok(graph)
    }

    /// Positions of both endpoints and the entry of the edge in each list
    fn locate(&self, s: V, d: V) -> Result<(usize, usize, Lookup, Lookup)> {
        let sp = self.vertices.position(s)?;
        let dp = self.vertices.position(d)?;
        let at_s = self.adjacency[sp].find(d);
        let at_d = if sp == dp {
            at_s
        } else {
            self.adjacency[dp].find(s)
        };
        Ok((sp, dp, at_s, at_d))
    }

    /// Insert the edge or overwrite its values; `None` leaves values unwritten
    fn upsert(&mut self, s: V, d: V, values: Option<&ValueTuple>) -> Result<bool> {
        let (sp, dp, at_s, at_d) = self.locate(s, d)?;
        match (at_s, at_d) {
            (Ok(i), Ok(j)) => {
                if let Some(values) = values {
                    self.adjacency[sp].set_row(i, values)?;
                    if sp != dp {
                        self.adjacency[dp].set_row(j, values)?;
                    }
                    trace!("Overwrote values of edge {} -- {}", s, d);
                }
                Ok(false)
            }
            (Err(i), Err(j)) => {
                self.adjacency[sp].insert(i, d, values)?;
                if sp != dp {
                    self.adjacency[dp].insert(j, s, values)?;
                }
                self.edge_count += 1;
                debug!("Added edge {} -- {}", s, d);
                Ok(true)
            }
            _ => Err(out_of_sync(Edge::undirected(s, d))),
        }
    }

    fn list(&self, v: V) -> Result<&AdjacencyList<V>> {
        let pos = self.vertices.position(v)?;
        Ok(&self.adjacency[pos])
    }

    fn list_field_values(&self, v: V, key: Key<'_>) -> Result<Vec<ScalarValue>> {
        let field = self.edge_schema.resolve(key)?;
        self.list(v)?
            .field_values(field)
            .map_err(|_| Error::Uninitialized(format!("value {key} of an edge at vertex {v}")))
    }
}

impl<V: VertexIndex> PlainGraph for UndirectedValueGraph<V> {
    type Vertex = V;

    fn is_directed(&self) -> bool {
        false
    }

    fn vertex_count(&self) -> usize {
        self.vertices.count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, s: V, d: V) -> bool {
        self.vertices.contains(d) && self.list(s).is_ok_and(|list| list.contains(d))
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        Entries::new(&self.adjacency, true).map(|entry| Edge::undirected(entry.src, entry.dst))
    }
}

impl<V: VertexIndex> ValueGraph for UndirectedValueGraph<V> {
    fn vertex_schema(&self) -> &ValueSchema {
        self.vertices.schema()
    }

    fn edge_schema(&self) -> &ValueSchema {
        &self.edge_schema
    }

    fn outneighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        Ok(Cow::Borrowed(self.list(v)?.neighbors()))
    }

    fn inneighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        self.outneighbors(v)
    }

    fn all_neighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        self.outneighbors(v)
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
        let list = self.list(s)?;
        let edge = Edge::undirected(s, d);
        let at = list.find(d).map_err(|_| edge_not_found(edge))?;
        list.get(at, field)
            .map_err(|_| Error::Uninitialized(format!("value {key} of edge {edge}")))
    }

    fn get_edge_vals(&self, s: V, d: V) -> Result<ValueTuple> {
        self.vertices.position(d)?;
        let list = self.list(s)?;
        let edge = Edge::undirected(s, d);
        let at = list.find(d).map_err(|_| edge_not_found(edge))?;
        list.row(at).map_err(|_| uninitialized_edge(edge))
    }

    fn outedgevals<'k>(&self, v: V, key: impl Into<Key<'k>>) -> Result<Vec<ScalarValue>> {
        self.list_field_values(v, key.into())
    }

    fn inedgevals<'k>(&self, v: V, key: impl Into<Key<'k>>) -> Result<Vec<ScalarValue>> {
        self.list_field_values(v, key.into())
    }

    fn edges_with_values(&self) -> impl Iterator<Item = Result<ValEdge<V>>> + '_ {
        Entries::new(&self.adjacency, true).map(|entry| {
            let edge = Edge::undirected(entry.src, entry.dst);
            entry
                .list
                .row(entry.at)
                .map(|values| ValEdge { edge, values })
                .map_err(|_| uninitialized_edge(edge))
        })
    }
}

impl<V: VertexIndex> ValueGraphMut for UndirectedValueGraph<V> {
    fn add_vertex(&mut self, values: ValueTuple) -> Result<V> {
        let v = self.vertices.push(&values)?;
        self.adjacency.push(AdjacencyList::new(&self.edge_schema));
        debug!("Added vertex {}", v);
        Ok(v)
    }

    fn add_edge(&mut self, s: V, d: V, values: ValueTuple) -> Result<bool> {
        self.edge_schema.check(&values)?;
        self.upsert(s, d, Some(&values))
    }

    fn rem_edge(&mut self, s: V, d: V) -> Result<bool> {
        let (sp, dp, at_s, at_d) = self.locate(s, d)?;
        match (at_s, at_d) {
            (Ok(i), Ok(j)) => {
                self.adjacency[sp].remove(i);
                if sp != dp {
                    self.adjacency[dp].remove(j);
                }
                self.edge_count -= 1;
                debug!("Removed edge {} -- {}", s, d);
                Ok(true)
            }
            (Err(_), Err(_)) => Ok(false),
            _ => Err(out_of_sync(Edge::undirected(s, d))),
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

        let (sp, dp, at_s, at_d) = self.locate(s, d)?;
        match (at_s, at_d) {
            (Ok(i), Ok(j)) => {
                if sp != dp {
                    self.adjacency[dp].set(j, field, value.clone())?;
                }
                self.adjacency[sp].set(i, field, value)?;
                Ok(true)
            }
            (Err(_), Err(_)) => Ok(false),
            _ => Err(out_of_sync(Edge::undirected(s, d))),
        }
    }

    fn set_edge_vals(&mut self, s: V, d: V, values: ValueTuple) -> Result<bool> {
        self.edge_schema.check(&values)?;
        let (sp, dp, at_s, at_d) = self.locate(s, d)?;
        match (at_s, at_d) {
            (Ok(i), Ok(j)) => {
                if sp != dp {
                    self.adjacency[dp].set_row(j, &values)?;
                }
                self.adjacency[sp].set_row(i, &values)?;
                trace!("Overwrote values of edge {} -- {}", s, d);
                Ok(true)
            }
            (Err(_), Err(_)) => Ok(false),
            _ => Err(out_of_sync(Edge::undirected(s, d))),
        }
    }
}

impl<V: VertexIndex> fmt::Display for UndirectedValueGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_summary(self, "UndirectedValueGraph", f)
    }
}
