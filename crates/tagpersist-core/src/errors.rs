use thiserror::Error;

/// Result type alias using PersistError
pub type Result<T> = std::result::Result<T, PersistError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and for assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A required argument or option is missing or invalid
    Precondition,
    /// A tag prefix or a required service could not be resolved
    Resolution,
    /// A property converter failed to produce a string form
    Conversion,
    /// Component metadata declares more than one sole inner-content property
    StructuralConflict,
    /// The component tree nests deeper than the configured maximum
    DepthExceeded,
    /// The text sink rejected a write or flush
    Io,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Precondition => "ERR_PRECONDITION",
            ExErrorKind::Resolution => "ERR_RESOLUTION",
            ExErrorKind::Conversion => "ERR_CONVERSION",
            ExErrorKind::StructuralConflict => "ERR_STRUCTURAL_CONFLICT",
            ExErrorKind::DepthExceeded => "ERR_DEPTH_EXCEEDED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and the
/// component/property context the failure was raised in.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    component_type: Option<String>,
    property: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            component_type: None,
            property: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add component type context
    pub fn with_component_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = Some(component_type.into());
        self
    }

    /// Add property context
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation name, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the component type, if any
    pub fn component_type(&self) -> Option<&str> {
        self.component_type.as_deref()
    }

    /// Get the property name, if any
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(component_type) = &self.component_type {
            write!(f, " (component_type: {})", component_type)?;
        }
        if let Some(property) = &self.property {
            write!(f, " (property: {})", property)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for persistence operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersistError {
    // ===== Precondition Errors =====
    /// A required argument or option is missing or invalid
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    // ===== Resolution Errors =====
    /// The designer host does not expose a required service
    #[error("Could not obtain {service} service")]
    ServiceUnavailable { service: String },

    /// No tag prefix is registered for a component or property type
    #[error("No tag prefix available for type {type_name}")]
    TagPrefixNotFound { type_name: String },

    // ===== Conversion Errors =====
    /// A property converter failed while producing a string form
    #[error("Conversion of property {property} failed: {message}")]
    Conversion { property: String, message: String },

    // ===== Structural Errors =====
    /// A component mixes a default inner property with other inner content
    #[error(
        "Component {component_type} has inner properties in addition to default inner property {property}"
    )]
    MultipleDefaultInnerProperties {
        component_type: String,
        property: String,
    },

    /// Component nesting exceeded the configured maximum depth
    #[error("Component nesting exceeds maximum depth {max_depth} at {component_type}")]
    DepthExceeded {
        max_depth: usize,
        component_type: String,
    },

    // ===== Sink Errors =====
    /// The text sink rejected a write or flush
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PersistError {
    /// Canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            PersistError::InvalidInput { .. } => ExErrorKind::Precondition,
            PersistError::ServiceUnavailable { .. } | PersistError::TagPrefixNotFound { .. } => {
                ExErrorKind::Resolution
            }
            PersistError::Conversion { .. } => ExErrorKind::Conversion,
            PersistError::MultipleDefaultInnerProperties { .. } => {
                ExErrorKind::StructuralConflict
            }
            PersistError::DepthExceeded { .. } => ExErrorKind::DepthExceeded,
            PersistError::Io { .. } => ExErrorKind::Io,
            PersistError::Internal { .. } => ExErrorKind::Internal,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(err: std::io::Error) -> Self {
        PersistError::Io {
            message: err.to_string(),
        }
    }
}

/// Conversion from PersistError to ExError
impl From<PersistError> for ExError {
    fn from(err: PersistError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            PersistError::InvalidInput { .. } => ExError::new(kind).with_message(message),

            PersistError::ServiceUnavailable { .. } => ExError::new(kind)
                .with_op("resolve_service")
                .with_message(message),

            PersistError::TagPrefixNotFound { type_name } => ExError::new(kind)
                .with_op("resolve_tag_prefix")
                .with_component_type(type_name)
                .with_message(message),

            PersistError::Conversion { property, .. } => ExError::new(kind)
                .with_op("convert_to_string")
                .with_property(property)
                .with_message(message),

            PersistError::MultipleDefaultInnerProperties {
                component_type,
                property,
            } => ExError::new(kind)
                .with_op("persist_inner_content")
                .with_component_type(component_type)
                .with_property(property)
                .with_message(message),

            PersistError::DepthExceeded { component_type, .. } => ExError::new(kind)
                .with_op("persist_object")
                .with_component_type(component_type)
                .with_message(message),

            PersistError::Io { .. } | PersistError::Internal { .. } => {
                ExError::new(kind).with_message(message)
            }
        }
    }
}
