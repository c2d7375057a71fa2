//! Canonical logging macros

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use ctrlutil_core::log_op_start;
/// log_op_start!("shape_mutable");
/// log_op_start!("shape_mutable", field_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use ctrlutil_core::log_op_end;
/// log_op_end!("shape_mutable", duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into an `ErrorReport` tagged with the operation,
/// so that every error event carries the stable `err_code` and the rendered
/// report under `error`.
///
/// # Example
///
/// ```
/// # use ctrlutil_core::{log_op_error, errors::UtilError};
/// let err = UtilError::UnknownField { key: "balance".to_string() };
/// log_op_error!("shape_mutable", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ErrorReport;
        let report = ErrorReport::from($err).with_op($op);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?report.kind(),
            err_code = report.code(),
            error = %report,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ErrorReport;
        let report = ErrorReport::from($err).with_op($op);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?report.kind(),
            err_code = report.code(),
            error = %report,
            $($field)*
        );
    }};
}
