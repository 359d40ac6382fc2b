//! Sorted adjacency lists with parallel edge values
//!
//! Each list keeps its neighbors in ascending order, which gives
//! deterministic iteration and binary-search lookups and insertion points.
//! The edge values of entry `at` live in row `at` of the list's columns.

use crate::traits::Edge;
use crate::vertices::vertex_at;
use valgraph_core::{
    Error, Result, ScalarValue, ValueColumns, ValueSchema, ValueTuple, VertexIndex,
};

/// Outcome of a binary search: `Ok(entry)` or `Err(insertion point)`
pub(crate) type Lookup = std::result::Result<usize, usize>;

pub(crate) fn edge_not_found<V: VertexIndex>(edge: Edge<V>) -> Error {
    Error::EdgeNotFound(edge.to_string())
}

pub(crate) fn uninitialized_edge<V: VertexIndex>(edge: Edge<V>) -> Error {
    Error::Uninitialized(format!("values of edge {edge}"))
}

/// One mirrored copy of an edge exists without the other
pub(crate) fn out_of_sync<V: VertexIndex>(edge: Edge<V>) -> Error {
    Error::Internal(format!("mirrored entries of edge {edge} are out of sync"))
}

/// One adjacency list: ordered neighbors and their edge values
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyList<V> {
    neighbors: Vec<V>,
    values: ValueColumns,
}

impl<V: VertexIndex> AdjacencyList<V> {
    pub(crate) fn new(schema: &ValueSchema) -> Self {
        Self {
            neighbors: Vec::new(),
            values: ValueColumns::new(schema),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn neighbors(&self) -> &[V] {
        &self.neighbors
    }

    /// Entry index of `v`, or the index where it would be inserted
    pub(crate) fn find(&self, v: V) -> Lookup {
        self.neighbors.binary_search(&v)
    }

    pub(crate) fn contains(&self, v: V) -> bool {
        self.find(v).is_ok()
    }

    /// Insert `v` at `at`, with unwritten value slots when `values` is `None`
    ///
    /// Values are validated before the neighbor is recorded, so a rejected
    /// tuple leaves the list untouched.
    pub(crate) fn insert(&mut self, at: usize, v: V, values: Option<&ValueTuple>) -> Result<()> {
        match values {
            Some(values) => self.values.insert(at, values)?,
            None => self.values.insert_unset(at),
        }
        self.neighbors.insert(at, v);
        Ok(())
    }

    pub(crate) fn remove(&mut self, at: usize) {
        self.neighbors.remove(at);
        self.values.remove(at);
    }

    pub(crate) fn get(&self, at: usize, field: usize) -> Result<ScalarValue> {
        self.values.get(at, field)
    }

    pub(crate) fn row(&self, at: usize) -> Result<ValueTuple> {
        self.values.row(at)
    }

    pub(crate) fn set(&mut self, at: usize, field: usize, value: ScalarValue) -> Result<()> {
        self.values.set(at, field, value)
    }

    pub(crate) fn set_row(&mut self, at: usize, values: &ValueTuple) -> Result<()> {
        self.values.set_row(at, values)
    }

    /// One field of every entry, in list order
    pub(crate) fn field_values(&self, field: usize) -> Result<Vec<ScalarValue>> {
        (0..self.len()).map(|at| self.get(at, field)).collect()
    }
}

/// A stored adjacency entry: `src` owns the list, `dst` is the neighbor
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry<'a, V> {
    pub(crate) src: V,
    pub(crate) dst: V,
    pub(crate) list: &'a AdjacencyList<V>,
    pub(crate) at: usize,
}

/// Walks all entries of a set of adjacency lists in (src, dst) order
///
/// With `upper_only`, entries whose neighbor is below the owning vertex are
/// skipped, so an undirected edge stored in both lists is visited once.
#[derive(Debug, Clone)]
pub(crate) struct Entries<'a, V> {
    lists: &'a [AdjacencyList<V>],
    pos: usize,
    at: usize,
    upper_only: bool,
}

impl<'a, V: VertexIndex> Entries<'a, V> {
    pub(crate) fn new(lists: &'a [AdjacencyList<V>], upper_only: bool) -> Self {
        Self {
            lists,
            pos: 0,
            at: 0,
            upper_only,
        }
    }
}

impl<'a, V: VertexIndex> Iterator for Entries<'a, V> {
    type Item = Entry<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let list = self.lists.get(self.pos)?;
            let src = vertex_at::<V>(self.pos).ok()?;
            if self.upper_only && self.at == 0 {
                self.at = list.neighbors.partition_point(|&n| n < src);
            }
            if let Some(&dst) = list.neighbors.get(self.at) {
                let at = self.at;
                self.at += 1;
                return Some(Entry { src, dst, list, at });
            }
            self.pos += 1;
            self.at = 0;
        }
    }
}

/// Sorted union of two sorted neighbor slices
pub(crate) fn merge_sorted<V: VertexIndex>(a: &[V], b: &[V]) -> Vec<V> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                merged.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                merged.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}
