//! valgraph - graphs whose vertices and edges carry typed values
//!
//! This is the main library crate that re-exports all valgraph components.

pub use valgraph_core as core;
pub use valgraph_graph as graph;
pub use valgraph_matrix as matrix;

// Re-export commonly used types
pub use valgraph_core::{
    Error, Field, Key, Result, ScalarType, ScalarValue, ValueSchema, ValueTuple, VertexIndex,
    vals,
};

pub use valgraph_graph::{
    AnyValueGraph, Edge, EdgeInit, EdgeListGraph, GraphConfig, GraphKind,
    InOutDirectedValueGraph, OutDirectedValueGraph, PlainGraph, UndirectedValueGraph, ValEdge,
    ValueGraph, ValueGraphMut, VertexInit, from_plain_graph, new_graph,
};
pub use valgraph_matrix::{AdjacencyMatrix, GraphSource, UniformWeight, ValueMatrix, Weights, weights};
