//! Canonical logging macros
//!
//! Every public persistence entry point owns exactly one start event and one
//! end (or end_error) event. Engine internals never use these macros.

/// Log the start of a persistence operation
///
/// # Example
///
/// ```
/// # use tagpersist_core::log_op_start;
/// log_op_start!("persist_control");
/// log_op_start!("persist_control", component_type = "asp:Button");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tagpersist_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tagpersist_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of a persistence operation
///
/// # Example
///
/// ```
/// # use tagpersist_core::log_op_end;
/// log_op_end!("persist_control", duration_ms = 3);
/// log_op_end!("persist_control_to_string", duration_ms = 3, bytes_written = 128);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tagpersist_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tagpersist_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed persistence operation
///
/// The error is converted into the canonical [`ExError`](crate::errors::ExError)
/// so the event carries a stable `err.code`.
///
/// # Example
///
/// ```
/// # use tagpersist_core::{log_op_error, errors::PersistError};
/// let err = PersistError::TagPrefixNotFound { type_name: "Acme.Gauge".to_string() };
/// log_op_error!("persist_control", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tagpersist_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tagpersist_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
