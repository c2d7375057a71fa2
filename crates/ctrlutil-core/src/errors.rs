use ctrlutil_core_types::Side;
use thiserror::Error;

/// Result type alias using UtilError
pub type Result<T> = std::result::Result<T, UtilError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code suitable for programmatic handling
/// and for the `err_code` field of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Input
    NotAnObject,
    UnknownField,
    DuplicateField,
    ShapeMismatch,

    // Logic
    InvalidBranch,

    // Integration
    Serialization,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotAnObject => "ERR_NOT_AN_OBJECT",
            ErrorKind::UnknownField => "ERR_UNKNOWN_FIELD",
            ErrorKind::DuplicateField => "ERR_DUPLICATE_FIELD",
            ErrorKind::ShapeMismatch => "ERR_SHAPE_MISMATCH",
            ErrorKind::InvalidBranch => "ERR_INVALID_BRANCH",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Structured error report
///
/// Carries the classification of an error plus the context needed to log it.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    kind: ErrorKind,
    op: Option<String>,
    key: Option<String>,
    message: String,
}

impl ErrorReport {
    /// Create a new report with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the record key or field the error is about
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}

// ========== End Error Facility ==========

/// Error taxonomy for ctrlutil operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilError {
    /// A record operand was a JSON value other than an object
    #[error("Expected a JSON object on the {side} side, found {found}")]
    NotAnObject { side: Side, found: &'static str },

    /// A field named in a shape transform does not exist in the shape
    #[error("Unknown field: {key}")]
    UnknownField { key: String },

    /// A shape lists the same key twice
    #[error("Duplicate field: {key}")]
    DuplicateField { key: String },

    /// A record does not conform to its shape
    #[error("Record does not match shape: {}", problems.join("; "))]
    ShapeMismatch { problems: Vec<String> },

    /// A match arm that the type system should have ruled out was reached
    #[error("Invalid branch reached. Should be detected during compilation (value: {value})")]
    InvalidBranch { value: String },

    /// A shape schema is not valid JSON or not a list of fields
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl UtilError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UtilError::NotAnObject { .. } => ErrorKind::NotAnObject,
            UtilError::UnknownField { .. } => ErrorKind::UnknownField,
            UtilError::DuplicateField { .. } => ErrorKind::DuplicateField,
            UtilError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            UtilError::InvalidBranch { .. } => ErrorKind::InvalidBranch,
            UtilError::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}

impl From<UtilError> for ErrorReport {
    fn from(err: UtilError) -> Self {
        let report = ErrorReport::new(err.kind()).with_message(err.to_string());
        match err {
            UtilError::NotAnObject { side, .. } => report.with_key(side.as_str()),
            UtilError::UnknownField { key } | UtilError::DuplicateField { key } => {
                report.with_key(key)
            }
            _ => report,
        }
    }
}

impl From<serde_json::Error> for UtilError {
    fn from(err: serde_json::Error) -> Self {
        UtilError::Serialization {
            message: err.to_string(),
        }
    }
}
