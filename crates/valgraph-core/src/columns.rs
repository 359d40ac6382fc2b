//! Struct-of-arrays storage for value tuples
//!
//! Each schema field owns one homogeneous column. Rows run parallel to the
//! entries of whatever structure owns the columns (the vertex range, or one
//! adjacency list). Every cell is a two-state slot: written, or reserved by
//! the deferred initializer and not yet written.

use crate::error::{Error, Result};
use crate::schema::ValueSchema;
use crate::value::{ScalarType, ScalarValue, ValueTuple};

macro_rules! define_columns {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        enum Column {
            $($variant(Vec<Option<$ty>>),)*
        }

        impl Column {
            fn new(scalar_type: ScalarType, len: usize) -> Self {
                match scalar_type {
                    $(ScalarType::$variant => Column::$variant(vec![None; len]),)*
                }
            }

            fn scalar_type(&self) -> ScalarType {
                match self {
                    $(Column::$variant(_) => ScalarType::$variant,)*
                }
            }

            fn get(&self, pos: usize) -> Option<ScalarValue> {
                match self {
                    $(Column::$variant(cells) => cells.get(pos)?.clone().map(ScalarValue::$variant),)*
                }
            }

            fn is_set(&self, pos: usize) -> bool {
                match self {
                    $(Column::$variant(cells) => cells.get(pos).is_some_and(Option::is_some),)*
                }
            }

            fn insert(&mut self, pos: usize, value: Option<ScalarValue>) -> Result<()> {
                match (self, value) {
                    $((Column::$variant(cells), Some(ScalarValue::$variant(v))) => cells.insert(pos, Some(v)),)*
                    $((Column::$variant(cells), None) => cells.insert(pos, None),)*
                    (column, Some(value)) => {
                        return Err(Error::type_mismatch(column.scalar_type(), value.scalar_type()));
                    }
                }
                Ok(())
            }

            fn set(&mut self, pos: usize, value: ScalarValue) -> Result<()> {
                match (self, value) {
                    $((Column::$variant(cells), ScalarValue::$variant(v)) => cells[pos] = Some(v),)*
                    (column, value) => {
                        return Err(Error::type_mismatch(column.scalar_type(), value.scalar_type()));
                    }
                }
                Ok(())
            }

            fn remove(&mut self, pos: usize) {
                match self {
                    $(Column::$variant(cells) => {
                        cells.remove(pos);
                    })*
                }
            }
        }
    };
}

define_columns!(
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Char(char),
    String(String),
);

/// Column store holding one value tuple per row
///
/// Rows are addressed by position. Writes require an in-range position, the
/// owning structure guarantees that. Reads past the last row see an
/// unwritten slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueColumns {
    columns: Vec<Column>,
    len: usize,
}

impl ValueColumns {
    /// Create an empty store for a schema
    pub fn new(schema: &ValueSchema) -> Self {
        Self::with_unset_rows(schema, 0)
    }

    /// Create a store of `len` rows whose slots are all unwritten
    pub fn with_unset_rows(schema: &ValueSchema, len: usize) -> Self {
        Self {
            columns: schema
                .fields()
                .iter()
                .map(|field| Column::new(field.scalar_type, len))
                .collect(),
            len,
        }
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no rows
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a row
    pub fn push(&mut self, values: &ValueTuple) -> Result<()> {
        self.insert(self.len, values)
    }

    /// Insert a row at `pos`, shifting later rows down
    ///
    /// The tuple is validated in full before any column changes.
    pub fn insert(&mut self, pos: usize, values: &ValueTuple) -> Result<()> {
        self.check_row(values)?;
        for (column, value) in self.columns.iter_mut().zip(values.iter()) {
            column.insert(pos, Some(value.clone()))?;
        }
        self.len += 1;
        Ok(())
    }

    /// Insert a row of unwritten slots at `pos`
    pub fn insert_unset(&mut self, pos: usize) {
        for column in &mut self.columns {
            // inserting an unset slot cannot mismatch
            let _ = column.insert(pos, None);
        }
        self.len += 1;
    }

    /// Remove the row at `pos`
    pub fn remove(&mut self, pos: usize) {
        for column in &mut self.columns {
            column.remove(pos);
        }
        self.len -= 1;
    }

    /// Read one field of a row, failing on unwritten slots
    pub fn get(&self, pos: usize, field: usize) -> Result<ScalarValue> {
        let column = self.column(field)?;
        column
            .get(pos)
            .ok_or_else(|| Error::Uninitialized(format!("field {field} of row {pos}")))
    }

    /// Read one field of a row, `None` if unwritten or out of range
    pub fn try_get(&self, pos: usize, field: usize) -> Option<ScalarValue> {
        self.columns.get(field).and_then(|column| column.get(pos))
    }

    /// Read a whole row, failing if any slot is unwritten
    pub fn row(&self, pos: usize) -> Result<ValueTuple> {
        (0..self.columns.len())
            .map(|field| self.get(pos, field))
            .collect::<Result<Vec<_>>>()
            .map(ValueTuple::from)
    }

    /// Check whether every slot of a row has been written
    pub fn is_initialized(&self, pos: usize) -> bool {
        pos < self.len && self.columns.iter().all(|column| column.is_set(pos))
    }

    /// Overwrite one field of a row
    pub fn set(&mut self, pos: usize, field: usize, value: ScalarValue) -> Result<()> {
        let len = self.columns.len();
        let column = self.columns.get_mut(field).ok_or_else(|| {
            Error::KeyNotFound(format!("field {field} out of range for {len} columns"))
        })?;
        column.set(pos, value)
    }

    /// Overwrite a whole row
    ///
    /// The tuple is validated in full before any column changes.
    pub fn set_row(&mut self, pos: usize, values: &ValueTuple) -> Result<()> {
        self.check_row(values)?;
        for (column, value) in self.columns.iter_mut().zip(values.iter()) {
            column.set(pos, value.clone())?;
        }
        Ok(())
    }

    fn column(&self, field: usize) -> Result<&Column> {
        self.columns.get(field).ok_or_else(|| {
            Error::KeyNotFound(format!(
                "field {field} out of range for {} columns",
                self.columns.len()
            ))
        })
    }

    fn check_row(&self, values: &ValueTuple) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(Error::SchemaMismatch(format!(
                "expected {} values, found {}",
                self.columns.len(),
                values.len()
            )));
        }
        for (column, value) in self.columns.iter().zip(values.iter()) {
            if column.scalar_type() != value.scalar_type() {
                return Err(Error::type_mismatch(column.scalar_type(), value.scalar_type()));
            }
        }
        Ok(())
    }
}
