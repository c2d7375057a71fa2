use std::time::Instant;

use super::{PropertyKey, Shape};
use crate::errors::{Result, UtilError};
use crate::logging_facility::elapsed_ms;
use crate::{log_op_end, log_op_error, log_op_start};

/// Clear `readonly` on the named fields of `shape`.
///
/// All other fields keep their qualifiers, and `optional` is never touched.
///
/// # Errors
///
/// - `UnknownField`: a named key is not a field of `shape`
pub fn mutable<I, K>(shape: &Shape, keys: I) -> Result<Shape>
where
    I: IntoIterator<Item = K>,
    K: Into<PropertyKey>,
{
    log_op_start!("shape_mutable", field_count = shape.len());
    let start = Instant::now();

    let targets: Vec<PropertyKey> = keys
        .into_iter()
        .map(|key| Into::<PropertyKey>::into(key).canonical())
        .collect();

    if let Some(unknown) = targets.iter().find(|key| shape.get(key).is_none()) {
        let err = UtilError::UnknownField {
            key: unknown.to_string(),
        };
        log_op_error!(
            "shape_mutable",
            err.clone(),
            duration_ms = elapsed_ms(start)
        );
        return Err(err);
    }

    let fields = shape
        .fields()
        .iter()
        .map(|field| {
            let mut field = field.clone();
            if targets.contains(&field.key) {
                field.readonly = false;
            }
            field
        })
        .collect();

    log_op_end!(
        "shape_mutable",
        duration_ms = elapsed_ms(start),
        targets = targets.len()
    );

    Ok(Shape { fields })
}
