//! Live matrix views over value graphs
//!
//! The views never copy graph state. Each entry access reads the graph
//! through its [`GraphSource`], so a view created once keeps reflecting
//! later mutations made through the same handle.

pub mod adjacency;
pub mod source;
pub mod value;
pub mod weights;

pub use adjacency::AdjacencyMatrix;
pub use source::GraphSource;
pub use value::ValueMatrix;
pub use weights::{UniformWeight, Weights, weights};
