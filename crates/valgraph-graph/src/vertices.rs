//! Vertex range bookkeeping shared by all graph kinds

use crate::config::VertexInit;
use std::marker::PhantomData;
use valgraph_core::{Error, Key, Result, ScalarValue, ValueColumns, ValueSchema, ValueTuple, VertexIndex};

pub(crate) fn invalid_vertex<V: VertexIndex>(v: V, vertex_count: usize) -> Error {
    Error::InvalidVertex {
        vertex: v.to_string(),
        vertex_count,
    }
}

/// The dense vertex range `1..=n` and the values attached to it
#[derive(Debug, Clone)]
pub(crate) struct VertexStore<V> {
    schema: ValueSchema,
    values: ValueColumns,
    _marker: PhantomData<V>,
}

impl<V: VertexIndex> VertexStore<V> {
    pub(crate) fn new(count: usize, schema: ValueSchema, init: &VertexInit<V>) -> Result<Self> {
        if count > V::max_vertex_count() {
            return Err(Error::CapacityExceeded(format!(
                "{count} vertices do not fit index type {}",
                V::type_name()
            )));
        }

        let values = match init {
            VertexInit::Deferred => ValueColumns::with_unset_rows(&schema, count),
            VertexInit::Generator(generate) => {
                let mut values = ValueColumns::new(&schema);
                for pos in 0..count {
                    let v = vertex_at::<V>(pos)?;
                    let tuple = generate(v);
                    schema.check(&tuple)?;
                    values.push(&tuple)?;
                }
                values
            }
        };

        Ok(Self {
            schema,
            values,
            _marker: PhantomData,
        })
    }

    pub(crate) fn count(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn schema(&self) -> &ValueSchema {
        &self.schema
    }

    pub(crate) fn contains(&self, v: V) -> bool {
        v.to_position().is_some_and(|pos| pos < self.count())
    }

    /// Storage position of a valid vertex
    pub(crate) fn position(&self, v: V) -> Result<usize> {
        match v.to_position() {
            Some(pos) if pos < self.count() => Ok(pos),
            _ => Err(invalid_vertex(v, self.count())),
        }
    }

    /// Append vertex `n + 1`
    pub(crate) fn push(&mut self, values: &ValueTuple) -> Result<V> {
        let v = V::from_position(self.count()).ok_or_else(|| {
            Error::CapacityExceeded(format!(
                "index type {} cannot hold vertex {}",
                V::type_name(),
                self.count() + 1
            ))
        })?;
        self.schema.check(values)?;
        self.values.push(values)?;
        Ok(v)
    }

    pub(crate) fn get(&self, v: V, key: Key<'_>) -> Result<ScalarValue> {
        let pos = self.position(v)?;
        let field = self.schema.resolve(key)?;
        self.values
            .try_get(pos, field)
            .ok_or_else(|| Error::Uninitialized(format!("value {key} of vertex {v}")))
    }

    pub(crate) fn row(&self, v: V) -> Result<ValueTuple> {
        let pos = self.position(v)?;
        if !self.values.is_initialized(pos) {
            return Err(Error::Uninitialized(format!("values of vertex {v}")));
        }
        self.values.row(pos)
    }

    pub(crate) fn set(&mut self, v: V, key: Key<'_>, value: ScalarValue) -> Result<()> {
        let pos = self.position(v)?;
        let field = self.schema.resolve(key)?;
        self.schema.check_value(field, &value)?;
        self.values.set(pos, field, value)
    }

    pub(crate) fn set_row(&mut self, v: V, values: &ValueTuple) -> Result<()> {
        let pos = self.position(v)?;
        self.schema.check(values)?;
        self.values.set_row(pos, values)
    }
}

/// Vertex stored at `pos`
pub(crate) fn vertex_at<V: VertexIndex>(pos: usize) -> Result<V> {
    V::from_position(pos).ok_or_else(|| {
        Error::CapacityExceeded(format!(
            "index type {} cannot hold vertex {}",
            V::type_name(),
            pos + 1
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use valgraph_core::{ScalarType, vals};

    fn schema() -> ValueSchema {
        ValueSchema::named([("a", ScalarType::Int64)]).unwrap()
    }

    #[test]
    fn test_generator_fills_every_vertex() {
        let init = VertexInit::generator(|v: u32| vals![i64::from(v) * 10]);
        let store = VertexStore::new(4, schema(), &init).unwrap();
        assert_eq!(store.count(), 4);
        assert_eq!(store.get(3, Key::Name("a")).unwrap(), ScalarValue::Int64(30));
    }

    #[test]
    fn test_generator_schema_violation() {
        let init = VertexInit::generator(|_: u32| vals!["wrong"]);
        let err = VertexStore::new(2, schema(), &init).unwrap_err();
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_deferred_values_fail_fast() {
        let mut store = VertexStore::<u32>::new(2, schema(), &VertexInit::Deferred).unwrap();
        let err = store.get(1, Key::Position(0)).unwrap_err();
        assert!(matches!(err, Error::Uninitialized(_)));
        assert!(matches!(store.row(1), Err(Error::Uninitialized(_))));

        store.set(1, Key::Name("a"), ScalarValue::Int64(4)).unwrap();
        assert_eq!(store.row(1).unwrap(), vals![4i64]);
        assert!(matches!(store.row(2), Err(Error::Uninitialized(_))));
    }

    #[test]
    fn test_position_bounds() {
        let store = VertexStore::<i32>::new(3, ValueSchema::empty(), &VertexInit::Deferred).unwrap();
        assert_eq!(store.position(1).unwrap(), 0);
        assert!(store.contains(3));
        assert!(!store.contains(4));
        assert!(!store.contains(0));
        assert!(!store.contains(-1));
        assert!(matches!(store.position(4), Err(Error::InvalidVertex { .. })));
    }

    #[test]
    fn test_capacity() {
        let err = VertexStore::<u8>::new(256, ValueSchema::empty(), &VertexInit::Deferred)
            .unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded(_)));

        let mut store =
            VertexStore::<u8>::new(255, ValueSchema::empty(), &VertexInit::Deferred).unwrap();
        assert!(matches!(store.push(&vals![]), Err(Error::CapacityExceeded(_))));
    }
}
