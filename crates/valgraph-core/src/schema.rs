//! Value schemas
//!
//! A schema is the ordered list of fields attached to every vertex or every
//! edge of a graph. Fields may be named; a name table built once per schema
//! resolves names to positions.

use crate::error::{Error, Result};
use crate::value::{ScalarType, ScalarValue, ValueTuple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single schema field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Optional field name
    pub name: Option<String>,

    /// Type of the values stored in this field
    pub scalar_type: ScalarType,
}

impl Field {
    /// Create a named field
    pub fn named<S: Into<String>>(name: S, scalar_type: ScalarType) -> Self {
        Self {
            name: Some(name.into()),
            scalar_type,
        }
    }

    /// Create a positional-only field
    pub fn unnamed(scalar_type: ScalarType) -> Self {
        Self {
            name: None,
            scalar_type,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} = {}", name, self.scalar_type),
            None => write!(f, "{}", self.scalar_type),
        }
    }
}

/// Addresses one schema field, by position (0-based) or by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Position(usize),
    Name(&'a str),
}

impl From<usize> for Key<'_> {
    fn from(pos: usize) -> Self {
        Key::Position(pos)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name)
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Position(pos) => write!(f, "{pos}"),
            Key::Name(name) => write!(f, ":{name}"),
        }
    }
}

/// Ordered list of fields describing the values of vertices or edges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Field>", into = "Vec<Field>")]
pub struct ValueSchema {
    fields: Vec<Field>,
    names: HashMap<String, usize>,
}

impl ValueSchema {
    /// Create a schema from fields, rejecting duplicate names
    pub fn new<I: IntoIterator<Item = Field>>(fields: I) -> Result<Self> {
        let fields: Vec<Field> = fields.into_iter().collect();
        let mut names = HashMap::with_capacity(fields.len());
        for (pos, field) in fields.iter().enumerate() {
            if let Some(name) = &field.name {
                if names.insert(name.clone(), pos).is_some() {
                    return Err(Error::SchemaMismatch(format!(
                        "duplicate field name '{name}'"
                    )));
                }
            }
        }
        Ok(Self { fields, names })
    }

    /// The schema without fields
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a schema of positional-only fields
    pub fn unnamed<I: IntoIterator<Item = ScalarType>>(types: I) -> Self {
        Self {
            fields: types.into_iter().map(Field::unnamed).collect(),
            names: HashMap::new(),
        }
    }

    /// Create a schema where every field is named
    pub fn named<S, I>(fields: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, ScalarType)>,
    {
        Self::new(
            fields
                .into_iter()
                .map(|(name, scalar_type)| Field::named(name, scalar_type)),
        )
    }

    /// Get the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if every field has a name
    pub fn is_named(&self) -> bool {
        !self.fields.is_empty() && self.names.len() == self.fields.len()
    }

    /// Get all fields
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get a field by position
    pub fn field(&self, pos: usize) -> Option<&Field> {
        self.fields.get(pos)
    }

    /// Resolve a key to a field position
    pub fn resolve(&self, key: Key<'_>) -> Result<usize> {
        match key {
            Key::Position(pos) if pos < self.fields.len() => Ok(pos),
            Key::Name(name) => self
                .names
                .get(name)
                .copied()
                .ok_or_else(|| Error::KeyNotFound(format!("no field named '{name}' in {self}"))),
            Key::Position(pos) => Err(Error::KeyNotFound(format!(
                "position {pos} out of range for {self}"
            ))),
        }
    }

    /// Check if a key resolves to a field
    pub fn has_key(&self, key: Key<'_>) -> bool {
        self.resolve(key).is_ok()
    }

    /// Get the type of the field a key resolves to
    pub fn field_type(&self, key: Key<'_>) -> Result<ScalarType> {
        self.resolve(key).map(|pos| self.fields[pos].scalar_type)
    }

    /// Check that a value matches the field at `pos`
    pub fn check_value(&self, pos: usize, value: &ScalarValue) -> Result<()> {
        let field = self
            .fields
            .get(pos)
            .ok_or_else(|| Error::KeyNotFound(format!("position {pos} out of range for {self}")))?;
        if value.scalar_type() != field.scalar_type {
            return Err(Error::type_mismatch(
                format!("{} for field {}", field.scalar_type, self.label(pos)),
                value.scalar_type(),
            ));
        }
        Ok(())
    }

    /// Check that a tuple matches this schema in arity and per-field type
    pub fn check(&self, values: &ValueTuple) -> Result<()> {
        if values.len() != self.fields.len() {
            return Err(Error::SchemaMismatch(format!(
                "expected {} values for {}, found {}",
                self.fields.len(),
                self,
                values.len()
            )));
        }
        for (pos, value) in values.iter().enumerate() {
            self.check_value(pos, value)?;
        }
        Ok(())
    }

    /// Format a tuple with the field names of this schema
    pub fn format_values(&self, values: &ValueTuple) -> String {
        let parts: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(pos, value)| match self.fields.get(pos).and_then(|f| f.name.as_ref()) {
                Some(name) => format!("{name} = {value}"),
                None => value.to_string(),
            })
            .collect();
        if parts.len() == 1 && !self.is_named() {
            format!("({},)", parts[0])
        } else {
            format!("({})", parts.join(", "))
        }
    }

    fn label(&self, pos: usize) -> String {
        match self.fields.get(pos).and_then(|f| f.name.as_ref()) {
            Some(name) => format!("'{name}'"),
            None => pos.to_string(),
        }
    }
}

impl TryFrom<Vec<Field>> for ValueSchema {
    type Error = Error;

    fn try_from(fields: Vec<Field>) -> Result<Self> {
        Self::new(fields)
    }
}

impl From<ValueSchema> for Vec<Field> {
    fn from(schema: ValueSchema) -> Self {
        schema.fields
    }
}

impl fmt::Display for ValueSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        if self.fields.len() == 1 && !self.is_named() {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
