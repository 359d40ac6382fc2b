//! Graph construction options

use std::fmt;
use valgraph_core::{ValueSchema, ValueTuple};

/// The storage layout of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// One list per vertex, each edge mirrored into both endpoints' lists
    Undirected,
    /// One outgoing list per vertex
    OutDirected,
    /// An outgoing and an incoming list per vertex
    InOutDirected,
}

impl GraphKind {
    /// Returns true for the directed layouts
    pub fn is_directed(self) -> bool {
        !matches!(self, GraphKind::Undirected)
    }

    /// Name of the concrete graph type for this layout
    pub fn type_name(self) -> &'static str {
        match self {
            GraphKind::Undirected => "UndirectedValueGraph",
            GraphKind::OutDirected => "OutDirectedValueGraph",
            GraphKind::InOutDirected => "InOutDirectedValueGraph",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// How the values of the vertices created at construction are initialized
pub enum VertexInit<V> {
    /// Reserve the slots but leave them unwritten
    Deferred,
    /// Produce the values of each vertex
    Generator(Box<dyn Fn(V) -> ValueTuple>),
}

impl<V> VertexInit<V> {
    /// Initialize each vertex with `generate(v)`
    pub fn generator<F>(generate: F) -> Self
    where
        F: Fn(V) -> ValueTuple + 'static,
    {
        VertexInit::Generator(Box::new(generate))
    }
}

impl<V> Default for VertexInit<V> {
    fn default() -> Self {
        VertexInit::Deferred
    }
}

impl<V> fmt::Debug for VertexInit<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexInit::Deferred => f.write_str("Deferred"),
            VertexInit::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// How the values of edges created by conversion are initialized
///
/// Undirected conversions call the generator once per unordered pair, with
/// `s <= d`; directed conversions call it once per ordered pair.
pub enum EdgeInit<V> {
    /// Reserve the slots but leave them unwritten
    Deferred,
    /// Produce the values of the edge `(s, d)`
    Generator(Box<dyn Fn(V, V) -> ValueTuple>),
}

impl<V> EdgeInit<V> {
    /// Initialize each edge with `generate(s, d)`
    pub fn generator<F>(generate: F) -> Self
    where
        F: Fn(V, V) -> ValueTuple + 'static,
    {
        EdgeInit::Generator(Box::new(generate))
    }
}

impl<V> Default for EdgeInit<V> {
    fn default() -> Self {
        EdgeInit::Deferred
    }
}

impl<V> fmt::Debug for EdgeInit<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeInit::Deferred => f.write_str("Deferred"),
            EdgeInit::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// Options for constructing a value graph
///
/// The edge initializer is only consulted when converting from a plain
/// graph; graphs built from a vertex count start without edges.
#[derive(Debug)]
pub struct GraphConfig<V> {
    /// Fields attached to every vertex
    pub vertex_schema: ValueSchema,

    /// Initializer for the vertices created at construction
    pub vertex_init: VertexInit<V>,

    /// Fields attached to every edge
    pub edge_schema: ValueSchema,

    /// Initializer for the edges created by conversion
    pub edge_init: EdgeInit<V>,
}

impl<V> GraphConfig<V> {
    /// Options for a graph without vertex or edge values
    pub fn new() -> Self {
        Self {
            vertex_schema: ValueSchema::empty(),
            vertex_init: VertexInit::Deferred,
            edge_schema: ValueSchema::empty(),
            edge_init: EdgeInit::Deferred,
        }
    }

    /// Set the vertex schema
    pub fn vertex_schema(mut self, schema: ValueSchema) -> Self {
        self.vertex_schema = schema;
        self
    }

    /// Set the vertex initializer
    pub fn vertex_init(mut self, init: VertexInit<V>) -> Self {
        self.vertex_init = init;
        self
    }

    /// Set the edge schema
    pub fn edge_schema(mut self, schema: ValueSchema) -> Self {
        self.edge_schema = schema;
        self
    }

    /// Set the edge initializer
    pub fn edge_init(mut self, init: EdgeInit<V>) -> Self {
        self.edge_init = init;
        self
    }
}

impl<V> Default for GraphConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
