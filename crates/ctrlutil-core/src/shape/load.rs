use std::time::Instant;

use super::{Field, Shape};
use crate::errors::{Result, UtilError};
use crate::logging_facility::elapsed_ms;
use crate::{log_op_end, log_op_error, log_op_start};

impl Shape {
    /// Load a shape from a JSON schema: a list of fields.
    ///
    /// # Errors
    ///
    /// - `Serialization`: the text is not JSON or not a list of fields
    /// - `DuplicateField`: two fields name the same key
    pub fn from_json_str(schema: &str) -> Result<Shape> {
        log_op_start!("shape_load", schema_len = schema.len());
        let start = Instant::now();

        let loaded = serde_json::from_str::<Vec<Field>>(schema)
            .map_err(UtilError::from)
            .and_then(Shape::try_from);

        match loaded {
            Ok(shape) => {
                log_op_end!(
                    "shape_load",
                    duration_ms = elapsed_ms(start),
                    field_count = shape.len()
                );
                Ok(shape)
            }
            Err(err) => {
                log_op_error!("shape_load", err.clone(), duration_ms = elapsed_ms(start));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::shape::{KeyKind, PropertyKey, ValueType};

    #[test]
    fn test_loads_fields_in_order() {
        let shape = Shape::from_json_str(
            r#"[
                {"key": {"kind": "str", "value": "id"}, "value": "string", "readonly": true},
                {"key": {"kind": "index", "value": "number"}, "value": "any"}
            ]"#,
        )
        .unwrap();

        let expected = Shape::new()
            .with_field(Field::required("id", ValueType::String).readonly())
            .with_field(Field::required(KeyKind::Number, ValueType::Any));
        assert_eq!(shape, expected);
    }

    #[test]
    fn test_malformed_schema_is_a_serialization_error() {
        let err = Shape::from_json_str("[{").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);

        let err = Shape::from_json_str(r#"{"id": "string"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

    #[test]
    fn test_duplicate_keys_keep_their_own_kind() {
        let err = Shape::from_json_str(
            r#"[
                {"key": {"kind": "num", "value": 3}, "value": "number"},
                {"key": {"kind": "str", "value": "3"}, "value": "string"}
            ]"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            UtilError::DuplicateField {
                key: PropertyKey::Num(3).to_string()
            }
        );
    }
}
