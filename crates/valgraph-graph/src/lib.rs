//! Value graphs: vertices `1..=n` and edges carrying typed value tuples
//!
//! Three storage layouts share one query and mutation interface:
//! [`UndirectedValueGraph`], [`OutDirectedValueGraph`] and
//! [`InOutDirectedValueGraph`]. [`AnyValueGraph`] selects one at runtime.

mod adjacency;
pub mod any;
pub mod config;
mod convert;
pub mod in_out_directed;
pub mod out_directed;
pub mod plain;
pub mod traits;
pub mod undirected;
mod vertices;

pub use any::{AnyValueGraph, from_plain_graph, new_graph};
pub use config::{EdgeInit, GraphConfig, GraphKind, VertexInit};
pub use in_out_directed::InOutDirectedValueGraph;
pub use out_directed::OutDirectedValueGraph;
pub use plain::EdgeListGraph;
pub use traits::{Edge, PlainGraph, ValEdge, ValueGraph, ValueGraphMut};
pub use undirected::UndirectedValueGraph;
