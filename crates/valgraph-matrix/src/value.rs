//! Live view of one edge field

use crate::adjacency::{check_index, position};
use crate::source::GraphSource;
use ndarray::Array2;
use tracing::debug;
use valgraph_core::{Error, Key, Result, ScalarValue};
use valgraph_graph::{PlainGraph, ValueGraph};

type VertexOf<S> = <<S as GraphSource>::Graph as PlainGraph>::Vertex;

/// The matrix of one edge field
///
/// Entry `(i, j)` is the field's value on the edge `i -> j`, or the default
/// where [`ValueGraph::get_edge_val_or`] would fall back to it. A matrix
/// built with [`ValueMatrix::with_missing`] reports those entries as `None`.
#[derive(Debug, Clone)]
pub struct ValueMatrix<S> {
    source: S,
    field: usize,
    default: Option<ScalarValue>,
}

impl<S> ValueMatrix<S>
where
    S: GraphSource,
    S::Graph: ValueGraph,
{
    /// View the edge field `key`, reporting `default` for non-edges
    ///
    /// `default` must have the field's scalar type.
    pub fn new<'k>(
        source: S,
        key: impl Into<Key<'k>>,
        default: impl Into<ScalarValue>,
    ) -> Result<Self> {
        let (key, default) = (key.into(), default.into());
        let field = source.read(|g| -> Result<usize> {
            let field = g.edge_schema().resolve(key)?;
            g.edge_schema().check_value(field, &default)?;
            Ok(field)
        })??;

        debug!("Created value matrix over edge field {} with default {}", key, default);
        Ok(Self {
            source,
            field,
            default: Some(default),
        })
    }

    /// View the edge field `key`, reporting non-edges as `None`
    pub fn with_missing<'k>(source: S, key: impl Into<Key<'k>>) -> Result<Self> {
        let key = key.into();
        let field = source.read(|g| g.edge_schema().resolve(key))??;

        debug!("Created value matrix over edge field {}", key);
        Ok(Self {
            source,
            field,
            default: None,
        })
    }

    /// Position of the viewed field in the edge schema
    pub fn field(&self) -> usize {
        self.field
    }

    pub fn default_value(&self) -> Option<&ScalarValue> {
        self.default.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// `(n, n)` for the graph's current vertex count
    pub fn shape(&self) -> Result<(usize, usize)> {
        self.source.read(|g| (g.vertex_count(), g.vertex_count()))
    }

    pub fn get(&self, i: VertexOf<S>, j: VertexOf<S>) -> Result<Option<ScalarValue>> {
        self.source.read(|g| -> Result<Option<ScalarValue>> {
            check_index(g, i, j)?;
            Ok(match &self.default {
                Some(default) => Some(g.get_edge_val_or(i, j, self.field, default.clone())),
                None => g.get_edge_val(i, j, self.field).ok(),
            })
        })?
    }

    /// Copy the current entries into a dense array, row `i - 1` for vertex `i`
    pub fn to_array(&self) -> Result<Array2<Option<ScalarValue>>> {
        self.source.read(|g| -> Result<Array2<Option<ScalarValue>>> {
            let n = g.vertex_count();
            let mut array = Array2::from_elem((n, n), self.default.clone());
            for edge in g.edges() {
                let Ok(value) = g.get_edge_val(edge.src, edge.dst, self.field) else {
                    continue;
                };
                let (s, d) = (position(edge.src)?, position(edge.dst)?);
                if !edge.directed {
                    array[[d, s]] = Some(value.clone());
                }
                array[[s, d]] = Some(value);
            }
            Ok(array)
        })?
    }

    /// Copy the current entries as floats
    ///
    /// Fails unless the field is numeric. Entries without a value become NaN.
    pub fn to_f64_array(&self) -> Result<Array2<f64>> {
        let scalar_type = self.source.read(|g| {
            g.edge_schema()
                .field(self.field)
                .map(|field| field.scalar_type)
        })?;
        match scalar_type {
            Some(ty) if ty.is_numeric() => {}
            Some(ty) => return Err(Error::type_mismatch("a numeric type", ty)),
            None => {
                return Err(Error::KeyNotFound(format!("edge field {}", self.field)));
            }
        }

        Ok(self
            .to_array()?
            .mapv(|value| value.and_then(|v| v.as_f64()).unwrap_or(f64::NAN)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valgraph_core::{ScalarType, ValueSchema, vals};
    use valgraph_graph::{GraphConfig, UndirectedValueGraph, ValueGraphMut};

    fn graph() -> UndirectedValueGraph {
        let schema =
            ValueSchema::named([("a", ScalarType::Int64), ("b", ScalarType::String)]).unwrap();
        let mut g = UndirectedValueGraph::with_config(3, GraphConfig::new().edge_schema(schema))
            .unwrap();
        g.add_edge(1, 2, vals![10i64, "abc"]).unwrap();
        g.add_edge(1, 3, vals![20i64, "xyz"]).unwrap();
        g
    }

    #[test]
    fn test_entries_with_default() {
        let g = graph();
        let m = ValueMatrix::new(&g, "a", 0i64).unwrap();
        assert_eq!(m.get(2, 1).unwrap(), Some(ScalarValue::Int64(10)));
        assert_eq!(m.get(2, 3).unwrap(), Some(ScalarValue::Int64(0)));
        assert_eq!(
            m.to_f64_array().unwrap(),
            ndarray::array![[0.0, 10.0, 20.0], [10.0, 0.0, 0.0], [20.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn test_missing_entries() {
        let g = graph();
        let m = ValueMatrix::with_missing(&g, "b").unwrap();
        assert_eq!(m.get(3, 1).unwrap(), Some(ScalarValue::String("xyz".into())));
        assert_eq!(m.get(3, 3).unwrap(), None);
        assert!(m.to_f64_array().unwrap_err().is_schema_violation());
    }

    #[test]
    fn test_construction_errors() {
        let g = graph();
        assert!(ValueMatrix::new(&g, "c", 0i64).unwrap_err().is_not_found());
        assert!(ValueMatrix::new(&g, "a", "zero").unwrap_err().is_schema_violation());
        assert!(ValueMatrix::with_missing(&g, 2usize).unwrap_err().is_not_found());
    }
}
