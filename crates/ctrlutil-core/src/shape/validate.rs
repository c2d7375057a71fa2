use std::time::Instant;

use serde_json::{Map, Value};

use super::{Field, KeyKind, PropertyKey, Shape, ValueType};
use crate::errors::{Result, UtilError};
use crate::logging_facility::elapsed_ms;
use crate::{log_op_end, log_op_error, log_op_start};

impl Shape {
    /// Check a JSON record against this shape.
    ///
    /// Every problem is collected before failing:
    /// - a required literal field is absent (symbol-keyed fields can never
    ///   be present in JSON);
    /// - a member's value does not match its field's type;
    /// - a member is matched by no field.
    ///
    /// Member names that are canonical integers resolve to numeric keys
    /// first, and a string index also matches numeric members.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch`: one entry per problem, in field then record order
    pub fn validate(&self, record: &Map<String, Value>) -> Result<()> {
        log_op_start!("shape_validate", field_count = self.len());
        let start = Instant::now();

        let mut problems = Vec::new();

        for field in self.fields().iter().filter(|f| !f.optional) {
            let present = match &field.key {
                PropertyKey::Str(name) => record.contains_key(name.as_str()),
                PropertyKey::Num(n) => record.contains_key(n.to_string().as_str()),
                PropertyKey::Symbol(_) => false,
                PropertyKey::Index(_) => continue,
            };
            if !present {
                problems.push(format!("missing required field {}", field.key));
            }
        }

        for (name, value) in record {
            match self.field_for_member(name) {
                Some(field) if !field.value.accepts(value) => problems.push(format!(
                    "field {}: expected {}, found {}",
                    name,
                    field.value,
                    ValueType::of(value)
                )),
                Some(_) => {}
                None => problems.push(format!("unexpected key {name}")),
            }
        }

        if problems.is_empty() {
            log_op_end!(
                "shape_validate",
                duration_ms = elapsed_ms(start)
            );
            return Ok(());
        }

        let err = UtilError::ShapeMismatch { problems };
        log_op_error!(
            "shape_validate",
            err.clone(),
            duration_ms = elapsed_ms(start)
        );
        Err(err)
    }

    fn field_for_member(&self, name: &str) -> Option<&Field> {
        let key = PropertyKey::from_json_key(name);

        if let Some(field) = self.get(&key) {
            return Some(field);
        }

        let kind = key.kind();
        self.get(&PropertyKey::Index(kind)).or_else(|| match kind {
            KeyKind::Number => self.get(&PropertyKey::Index(KeyKind::String)),
            _ => None,
        })
    }
}
