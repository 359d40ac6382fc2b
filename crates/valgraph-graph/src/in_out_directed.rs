//! Directed value graph with outgoing and incoming adjacency

use crate::adjacency::{
    AdjacencyList, Entries, Lookup, edge_not_found, merge_sorted, out_of_sync,
    uninitialized_edge,
};
use crate::config::GraphConfig;
use crate::convert;
use crate::traits::{Edge, PlainGraph, ValEdge, ValueGraph, ValueGraphMut, fmt_summary};
use crate::vertices::{VertexStore, vertex_at};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, trace};
use valgraph_core::{Error, Key, Result, ScalarValue, ValueSchema, ValueTuple, VertexIndex};

/// A directed graph storing outgoing and incoming adjacency
///
/// An edge `s -> d` appears as `d` in the out-list of `s` and as `s` in the
/// in-list of `d`, each copy holding the edge's values.
#[derive(Debug, Clone)]
pub struct InOutDirectedValueGraph<V = u32> {
    vertices: VertexStore<V>,
    edge_schema: ValueSchema,
    out_lists: Vec<AdjacencyList<V>>,
    in_lists: Vec<AdjacencyList<V>>,
    edge_count: usize,
}

impl<V: VertexIndex> InOutDirectedValueGraph<V> {
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
        let in_lists = (0..n).map(|_| AdjacencyList::new(&edge_schema)).collect();

        debug!("Created in-out-directed graph with {} vertices", n);
        Ok(Self {
            vertices,
            edge_schema,
            out_lists,
            in_lists,
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
            "Converted plain graph into in-out-directed graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count
        );
        Ok(graph)
    }

    /// Positions of both endpoints, the out-entry at `s` and the in-entry at `d`
    fn locate(&self, s: V, d: V) -> Result<(usize, usize, Lookup, Lookup)> {
        let sp = self.vertices.position(s)?;
        let dp = self.vertices.position(d)?;
        Ok((sp, dp, self.out_lists[sp].find(d), self.in_lists[dp].find(s)))
    }

    fn upsert(&mut self, s: V, d: V, values: Option<&ValueTuple>) -> Result<bool> {
        let (sp, dp, at_out, at_in) = self.locate(s, d)?;
        match (at_out, at_in) {
            (Ok(i), Ok(j)) => {
                if let Some(values) = values {
                    self.out_lists[sp].set_row(i, values)?;
                    self.in_lists[dp].set_row(j, values)?;
                    trace!("Overwrote values of edge {} -> {}", s, d);
                }
                Ok(false)
            }
            (Err(i), Err(j)) => {
                self.out_lists[sp].insert(i, d, values)?;
                self.in_lists[dp].insert(j, s, values)?;
                self.edge_count += 1;
                debug!("Added edge {} -> {}", s, d);
                Ok(true)
            }
            _ => Err(out_of_sync(Edge::directed(s, d))),
        }
    }

    fn out_list(&self, v: V) -> Result<&AdjacencyList<V>> {
        let pos = self.vertices.position(v)?;
        Ok(&self.out_lists[pos])
    }

    fn in_list(&self, v: V) -> Result<&AdjacencyList<V>> {
        let pos = self.vertices.position(v)?;
        Ok(&self.in_lists[pos])
    }
}

impl<V: VertexIndex> PlainGraph for InOutDirectedValueGraph<V> {
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

impl<V: VertexIndex> ValueGraph for InOutDirectedValueGraph<V> {
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
        Ok(Cow::Borrowed(self.in_list(v)?.neighbors()))
    }

    fn all_neighbors(&self, v: V) -> Result<Cow<'_, [V]>> {
        let (out, inc) = (self.out_list(v)?, self.in_list(v)?);
        Ok(Cow::Owned(merge_sorted(out.neighbors(), inc.neighbors())))
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
        self.in_list(v)?
            .field_values(field)
            .map_err(|_| Error::Uninitialized(format!("value {key} of an edge into {v}")))
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

impl<V: VertexIndex> ValueGraphMut for InOutDirectedValueGraph<V> {
    fn add_vertex(&mut self, values: ValueTuple) -> Result<V> {
        let v = self.vertices.push(&values)?;
        self.out_lists.push(AdjacencyList::new(&self.edge_schema));
        self.in_lists.push(AdjacencyList::new(&self.edge_schema));
        debug!("Added vertex {}", v);
        Ok(v)
    }

    fn add_edge(&mut self, s: V, d: V, values: ValueTuple) -> Result<bool> {
        self.edge_schema.check(&values)?;
        self.upsert(s, d, Some(&values))
    }

    fn rem_edge(&mut self, s: V, d: V) -> Result<bool> {
        let (sp, dp, at_out, at_in) = self.locate(s, d)?;
        match (at_out, at_in) {
            (Ok(i), Ok(j)) => {
                self.out_lists[sp].remove(i);
                self.in_lists[dp].remove(j);
                self.edge_count -= 1;
                debug!("Removed edge {} -> {}", s, d);
                Ok(true)
            }
            (Err(_), Err(_)) => Ok(false),
            _ => Err(out_of_sync(Edge::directed(s, d))),
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

        let (sp, dp, at_out, at_in) = self.locate(s, d)?;
        match (at_out, at_in) {
            (Ok(i), Ok(j)) => {
                self.in_lists[dp].set(j, field, value.clone())?;
                self.out_lists[sp].set(i, field, value)?;
                Ok(true)
            }
            (Err(_), Err(_)) => Ok(false),
            _ => Err(out_of_sync(Edge::directed(s, d))),
        }
    }

    fn set_edge_vals(&mut self, s: V, d: V, values: ValueTuple) -> Result<bool> {
        self.edge_schema.check(&values)?;
        let (sp, dp, at_out, at_in) = self.locate(s, d)?;
        match (at_out, at_in) {
            (Ok(i), Ok(j)) => {
                self.in_lists[dp].set_row(j, &values)?;
                self.out_lists[sp].set_row(i, &values)?;
                trace!("Overwrote values of edge {} -> {}", s, d);
                Ok(true)
            }
            (Err(_), Err(_)) => Ok(false),
            _ => Err(out_of_sync(Edge::directed(s, d))),
        }
    }
}

impl<V: VertexIndex> fmt::Display for InOutDirectedValueGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_summary(self, "InOutDirectedValueGraph", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valgraph_core::{ScalarType, vals};

    fn weighted(n: usize) -> InOutDirectedValueGraph {
        let config = GraphConfig::new()
            .edge_schema(ValueSchema::named([("w", ScalarType::Int32)]).unwrap());
        InOutDirectedValueGraph::with_config(n, config).unwrap()
    }

    /// Every out-entry has an in-entry with equal values, and vice versa
    fn assert_mirrored(g: &InOutDirectedValueGraph) {
        let out: usize = g.out_lists.iter().map(|l| l.len()).sum();
        let inc: usize = g.in_lists.iter().map(|l| l.len()).sum();
        assert_eq!(out, inc);
        assert_eq!(out, g.edge_count());
        for entry in Entries::new(&g.out_lists, false) {
            let dp = g.vertices.position(entry.dst).unwrap();
            let j = g.in_lists[dp].find(entry.src).expect("in-entry");
            assert_eq!(entry.list.row(entry.at).ok(), g.in_lists[dp].row(j).ok());
        }
    }

    #[test]
    fn test_add_edge_writes_both_lists() {
        let mut g = weighted(3);
        assert!(g.add_edge(1, 3, vals![5i32]).unwrap());
        assert_eq!(g.outneighbors(1).unwrap().as_ref(), &[3]);
        assert_eq!(g.inneighbors(3).unwrap().as_ref(), &[1]);
        assert!(g.inneighbors(1).unwrap().is_empty());
        assert_mirrored(&g);
    }

    #[test]
    fn test_overwrite_and_set_mirror() {
        let mut g = weighted(3);
        g.add_edge(2, 1, vals![1i32]).unwrap();
        assert!(!g.add_edge(2, 1, vals![2i32]).unwrap());
        assert_eq!(g.inedgevals(1, "w").unwrap(), vec![ScalarValue::Int32(2)]);

        assert!(g.set_edge_val(2, 1, "w", 3i32).unwrap());
        assert_eq!(g.inedgevals(1, "w").unwrap(), vec![ScalarValue::Int32(3)]);
        assert!(g.set_edge_vals(2, 1, vals![4i32]).unwrap());
        assert_eq!(g.outedgevals(2, "w").unwrap(), vec![ScalarValue::Int32(4)]);
        assert!(!g.set_edge_vals(1, 2, vals![4i32]).unwrap());
        assert_mirrored(&g);
    }

    #[test]
    fn test_rem_edge_clears_both_lists() {
        let mut g = weighted(3);
        g.add_edge(1, 2, vals![1i32]).unwrap();
        g.add_edge(3, 2, vals![3i32]).unwrap();
        assert!(g.rem_edge(1, 2).unwrap());
        assert_eq!(g.inneighbors(2).unwrap().as_ref(), &[3]);
        assert!(!g.rem_edge(1, 2).unwrap());
        assert_mirrored(&g);
    }

    #[test]
    fn test_all_neighbors_union() {
        let mut g = weighted(4);
        g.add_edge(2, 4, vals![0i32]).unwrap();
        g.add_edge(1, 2, vals![0i32]).unwrap();
        g.add_edge(2, 1, vals![0i32]).unwrap();
        assert_eq!(g.all_neighbors(2).unwrap().as_ref(), &[1, 4]);
    }

    #[test]
    fn test_add_vertex_extends_both_sides() {
        let mut g = weighted(1);
        assert_eq!(g.add_vertex(vals![]).unwrap(), 2);
        assert!(g.add_edge(2, 1, vals![7i32]).unwrap());
        assert_eq!(g.inneighbors(1).unwrap().as_ref(), &[2]);
        assert_mirrored(&g);
    }
}
