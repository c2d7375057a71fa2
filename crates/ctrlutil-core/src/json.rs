//! Set difference over plain JSON records.
//!
//! Controller state is often held as untyped JSON objects. This module
//! applies [`set_diff`](crate::set_diff::set_diff) to them, rejecting
//! operands that are not objects. Only top-level members are compared;
//! nested objects are copied as they are.

use std::time::Instant;

use ctrlutil_core_types::Side;
use serde_json::{Map, Value};

use crate::errors::{Result, UtilError};
use crate::logging_facility::elapsed_ms;
use crate::set_diff::set_diff;
use crate::shape::ValueType;
use crate::{log_op_end, log_op_error, log_op_start};

fn as_record(value: &Value, side: Side) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| UtilError::NotAnObject {
        side,
        found: ValueType::of(value).name(),
    })
}

/// Members of `a` whose names are absent from `b`, as a new JSON object.
///
/// # Errors
///
/// - `NotAnObject`: `a` or `b` is not a JSON object
///
/// # Example
///
/// ```
/// use ctrlutil_core::json::set_diff_value;
/// use serde_json::json;
///
/// let result = set_diff_value(&json!({"a": 1, "b": 2, "c": 3}), &json!({"b": 99})).unwrap();
/// assert_eq!(result, json!({"a": 1, "c": 3}));
/// ```
pub fn set_diff_value(a: &Value, b: &Value) -> Result<Value> {
    log_op_start!("json_set_diff");
    let start = Instant::now();

    let operands = as_record(a, Side::Left).and_then(|left| Ok((left, as_record(b, Side::Right)?)));
    let (left, right) = match operands {
        Ok(records) => records,
        Err(err) => {
            log_op_error!(
                "json_set_diff",
                err.clone(),
                duration_ms = elapsed_ms(start)
            );
            return Err(err);
        }
    };

    let result = set_diff(left, right);

    log_op_end!(
        "json_set_diff",
        duration_ms = elapsed_ms(start),
        left_len = left.len(),
        right_len = right.len(),
        result_len = result.len()
    );

    Ok(Value::Object(result))
}
