//! Record shapes and the transforms that mirror set difference on them.
//!
//! A [`Shape`] describes the fields a record is expected to carry: each
//! field has a [`PropertyKey`], a coarse [`ValueType`] and `optional` /
//! `readonly` qualifiers. Shapes are plain data, so they serialize to and
//! from schema files.
//!
//! ## Transforms
//!
//! - [`diff`]: the shape of `set_diff(a, b)` given the shapes of `a` and `b`
//! - [`mutable`]: drop `readonly` from selected fields
//!
//! ## Validation
//!
//! [`Shape::validate`] checks a JSON record against a shape at run time.
//! [`Shape::from_json_str`] loads a shape from a checked-in schema file.
//!
//! ```
//! use ctrlutil_core::shape::{self, Field, KeyKind, PropertyKey, Shape, ValueType};
//!
//! let a = Shape::new()
//!     .with_field(Field::required("a", ValueType::String))
//!     .with_field(Field::required(0i64, ValueType::String));
//! let b = Shape::new().with_field(Field::required(KeyKind::String, ValueType::Any));
//!
//! let d = shape::diff(&a, &b);
//! assert!(d.get(&"a".into()).map(|f| f.optional).unwrap_or(false));
//! assert!(d.get(&PropertyKey::Num(0)).map(|f| !f.optional).unwrap_or(false));
//! ```

mod diff;
mod key;
mod load;
mod mutable;
mod validate;
mod value;

pub use diff::diff;
pub use key::{KeyKind, Literalness, PropertyKey};
pub use mutable::mutable;
pub use value::ValueType;

use serde::{Deserialize, Serialize};

use crate::errors::UtilError;

/// One field of a record shape.
///
/// Constructors store the key in [`PropertyKey::canonical`] form, so
/// `Field::required("0", ..)` declares the same member as
/// `Field::required(0i64, ..)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub key: PropertyKey,
    pub value: ValueType,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub readonly: bool,
}

impl Field {
    pub fn required(key: impl Into<PropertyKey>, value: ValueType) -> Self {
        let key: PropertyKey = key.into();
        Self {
            key: key.canonical(),
            value,
            optional: false,
            readonly: false,
        }
    }

    pub fn optional(key: impl Into<PropertyKey>, value: ValueType) -> Self {
        Self {
            optional: true,
            ..Self::required(key, value)
        }
    }

    /// Mark the field read-only
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

/// Ordered set of fields with unique keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Field>", into = "Vec<Field>")]
pub struct Shape {
    fields: Vec<Field>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field; a field with the same key is replaced in place.
    pub fn with_field(mut self, mut field: Field) -> Self {
        field.key = field.key.canonical();
        match self.fields.iter_mut().find(|f| f.key == field.key) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Shape of a concrete JSON record: every member becomes a required field.
    pub fn from_record(record: &serde_json::Map<String, serde_json::Value>) -> Self {
        let fields = record
            .iter()
            .map(|(key, value)| {
                Field::required(PropertyKey::from_json_key(key), ValueType::of(value))
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Field declared for `key`; `"0"` and `0` look up the same field.
    pub fn get(&self, key: &PropertyKey) -> Option<&Field> {
        let key = key.clone().canonical();
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.fields.iter().map(|f| &f.key)
    }

    /// Keys naming exactly one property, in field order
    pub fn literal_keys(&self) -> Vec<&PropertyKey> {
        self.keys().filter(|k| k.is_literal()).collect()
    }

    /// Index keys, in field order
    pub fn non_literal_keys(&self) -> Vec<&PropertyKey> {
        self.keys().filter(|k| !k.is_literal()).collect()
    }

    pub fn diff(&self, other: &Shape) -> Shape {
        diff(self, other)
    }
}

impl TryFrom<Vec<Field>> for Shape {
    type Error = UtilError;

    fn try_from(fields: Vec<Field>) -> Result<Self, Self::Error> {
        let fields: Vec<Field> = fields
            .into_iter()
            .map(|mut field| {
                field.key = field.key.canonical();
                field
            })
            .collect();
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.key == field.key) {
                return Err(UtilError::DuplicateField {
                    key: field.key.to_string(),
                });
            }
        }
        Ok(Self { fields })
    }
}

impl From<Shape> for Vec<Field> {
    fn from(shape: Shape) -> Self {
        shape.fields
    }
}
