use super::{Field, Shape};

/// Shape of `set_diff(a, b)` for records of shape `a` and `b`.
///
/// - A field of `a` whose key is a literal key of `b` is removed: the
///   runtime difference always drops it.
/// - A remaining field whose key is covered by an index key of `b` becomes
///   optional: the runtime record of `b` may or may not carry it.
/// - Every other field is kept as is.
///
/// Field order of `a` is preserved.
pub fn diff(a: &Shape, b: &Shape) -> Shape {
    let literal = b.literal_keys();
    let index = b.non_literal_keys();

    let fields: Vec<Field> = a
        .fields()
        .iter()
        .filter(|field| !literal.contains(&&field.key))
        .map(|field| {
            let mut field = field.clone();
            if index.iter().any(|pattern| pattern.covers(&field.key)) {
                field.optional = true;
            }
            field
        })
        .collect();

    tracing::debug!(
        op = "shape_diff",
        left_len = a.len(),
        right_len = b.len(),
        result_len = fields.len(),
        "shape difference computed"
    );

    Shape { fields }
}
