//! Weight matrices for numeric consumers

use crate::source::GraphSource;
use crate::value::ValueMatrix;
use ndarray::Array2;
use num_traits::One;
use std::fmt;
use tracing::debug;
use valgraph_core::{Error, Key, Result, ScalarType, VertexIndex};
use valgraph_graph::{PlainGraph, ValueGraph};

/// Weights of a graph without edge values: 1 for every pair
///
/// Sized to the graph's vertex count at the time it was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformWeight {
    size: usize,
}

impl UniformWeight {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    /// Entry `(i, j)`, with `i` and `j` vertices in `1..=size`
    pub fn get<V: VertexIndex, T: One>(&self, i: V, j: V) -> Result<T> {
        for v in [i, j] {
            if !v.to_position().is_some_and(|pos| pos < self.size) {
                return Err(Error::InvalidVertex {
                    vertex: v.to_string(),
                    vertex_count: self.size,
                });
            }
        }
        Ok(T::one())
    }

    pub fn to_array<T: One + Clone>(&self) -> Array2<T> {
        Array2::ones((self.size, self.size))
    }
}

impl fmt::Display for UniformWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0} × {0} uniform weight matrix (value = 1)", self.size)
    }
}

/// The result of [`weights`]: an edge field, or uniform weights
#[derive(Debug, Clone)]
pub enum Weights<S> {
    Explicit(ValueMatrix<S>),
    UniformWeight(UniformWeight),
}

impl<S> Weights<S>
where
    S: GraphSource,
    S::Graph: ValueGraph,
{
    pub fn is_uniform(&self) -> bool {
        matches!(self, Weights::UniformWeight(_))
    }

    pub fn as_explicit(&self) -> Option<&ValueMatrix<S>> {
        match self {
            Weights::Explicit(matrix) => Some(matrix),
            Weights::UniformWeight(_) => None,
        }
    }

    pub fn shape(&self) -> Result<(usize, usize)> {
        match self {
            Weights::Explicit(matrix) => matrix.shape(),
            Weights::UniformWeight(uniform) => Ok(uniform.shape()),
        }
    }

    pub fn to_f64_array(&self) -> Result<Array2<f64>> {
        match self {
            Weights::Explicit(matrix) => matrix.to_f64_array(),
            Weights::UniformWeight(uniform) => Ok(uniform.to_array()),
        }
    }
}

/// Weights of a graph's edges
///
/// With a key, views that edge field. Without one, views the first edge
/// field, or returns [`UniformWeight`] if the graph has no edge values.
/// Non-edges read as the zero value of the field's type.
pub fn weights<S>(source: S, key: Option<Key<'_>>) -> Result<Weights<S>>
where
    S: GraphSource,
    S::Graph: ValueGraph,
{
    let (n, field) = source.read(|g| -> Result<(usize, Option<(usize, ScalarType)>)> {
        let schema = g.edge_schema();
        let field = match key {
            Some(key) => Some(schema.resolve(key)?),
            None if schema.is_empty() => None,
            None => Some(0),
        };
        let field = field
            .and_then(|pos| schema.field(pos).map(|field| (pos, field.scalar_type)));
        Ok((g.vertex_count(), field))
    })??;

    match field {
        Some((pos, scalar_type)) => {
            ValueMatrix::new(source, pos, scalar_type.zero()).map(Weights::Explicit)
        }
        None => {
            debug!("Graph has no edge values, using uniform weights");
            Ok(Weights::UniformWeight(UniformWeight::new(n)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weight() {
        let w = UniformWeight::new(3);
        assert_eq!(w.get::<u32, f64>(1, 3).unwrap(), 1.0);
        assert_eq!(w.get::<u8, i32>(2, 2).unwrap(), 1);
        assert!(w.get::<u32, u8>(0, 1).is_err());
        assert!(w.get::<u32, u8>(1, 4).is_err());
        assert!(matches!(
            w.get::<i64, u8>(-1, 2),
            Err(Error::InvalidVertex { .. })
        ));
        assert_eq!(w.to_string(), "3 × 3 uniform weight matrix (value = 1)");
        assert_eq!(w.to_array::<u8>().sum(), 9);
    }

    #[test]
    fn test_weights_follow_edge_schema() {
        use valgraph_core::{ValueSchema, vals};
        use valgraph_graph::{GraphConfig, UndirectedValueGraph, ValueGraphMut};

        let plain = UndirectedValueGraph::<u16>::new(4).unwrap();
        let w = weights(&plain, None).unwrap();
        assert!(w.is_uniform());
        assert_eq!(w.shape().unwrap(), (4, 4));
        match w {
            Weights::UniformWeight(uniform) => {
                assert_eq!(uniform.get::<u16, f64>(4, 1).unwrap(), 1.0);
                assert!(uniform.get::<u16, f64>(5, 1).is_err());
            }
            Weights::Explicit(_) => unreachable!(),
        }

        let config = GraphConfig::<u16>::new()
            .edge_schema(ValueSchema::unnamed([ScalarType::Float64]));
        let mut g = UndirectedValueGraph::with_config(2, config).unwrap();
        g.add_edge(1, 2, vals![0.5f64]).unwrap();
        let w = weights(&g, None).unwrap();
        assert!(!w.is_uniform());
        assert_eq!(w.to_f64_array().unwrap()[[1, 0]], 0.5);
    }
}
