//! valgraph Core Library
//!
//! This crate provides the value schema plumbing, vertex index types and
//! error handling shared by the valgraph graph engine.
//!
//! # Modules
//!
//! - `value` - Scalar types, scalar values and value tuples
//! - `schema` - Value schemas, fields and keys
//! - `columns` - Struct-of-arrays value storage with deferred slots
//! - `index` - Vertex index types and vertex ranges
//! - `error` - Error types and result aliases

pub mod columns;
pub mod error;
pub mod index;
pub mod schema;
pub mod value;

pub use columns::ValueColumns;
pub use error::{Error, Result};
pub use index::{VertexIndex, Vertices};
pub use schema::{Field, Key, ValueSchema};
pub use value::{ScalarType, ScalarValue, ValueTuple};
