//! Error types for populating records from environment variables

/// Errors returned by [`populate`](crate::populate) and [`Populator`](crate::Populator).
///
/// Population is fail-fast: the first failing field aborts the run and is
/// reported here. Fields assigned before the failure keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field carries an annotation that does not name a key.
    ///
    /// Occurs for annotations like `"required"` that lack a `key:` clause,
    /// or whose `key:` clause is empty.
    #[error("Field '{field}' has annotation '{annotation}' without a key")]
    InvalidDirective {
        /// Name of the annotated field
        field: &'static str,
        /// Annotation string as written on the field
        annotation: &'static str,
    },

    /// A required environment variable is unset or empty.
    #[error("Required environment variable '{key}' is not set")]
    MissingRequired {
        /// Name of the field being populated
        field: &'static str,
        /// Environment variable that was looked up (including any prefix)
        key: String,
    },

    /// The environment value could not be converted into the field's type.
    #[error("Failed to parse environment variable '{key}' as {type_name} for field '{field}': {source}")]
    Conversion {
        /// Name of the field being populated
        field: &'static str,
        /// Environment variable that was looked up (including any prefix)
        key: String,
        /// Declared type of the field
        type_name: &'static str,
        /// Reason the conversion failed
        source: ConversionError,
    },

    /// The field's declared type has no conversion from a string.
    #[error("Unsupported type {type_name} for field '{field}'")]
    UnsupportedType {
        /// Name of the field being populated
        field: &'static str,
        /// Declared type of the field
        type_name: &'static str,
    },
}

impl Error {
    /// Create a missing required variable error
    pub(crate) fn missing(field: &'static str, key: impl Into<String>) -> Self {
        Self::MissingRequired {
            field,
            key: key.into(),
        }
    }

    /// Create a conversion error
    pub(crate) fn conversion(
        field: &'static str,
        key: impl Into<String>,
        type_name: &'static str,
        source: ConversionError,
    ) -> Self {
        Self::Conversion {
            field,
            key: key.into(),
            type_name,
            source,
        }
    }

    /// Environment variable involved in the failure, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { key, .. } | Self::Conversion { key, .. } => Some(key),
            Self::InvalidDirective { .. } | Self::UnsupportedType { .. } => None,
        }
    }

    /// Field that caused the failure.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDirective { field, .. }
            | Self::MissingRequired { field, .. }
            | Self::Conversion { field, .. }
            | Self::UnsupportedType { field, .. } => field,
        }
    }
}

/// Why a string could not be converted into a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The string is not a valid literal for the target type.
    #[error("invalid syntax")]
    Syntax,

    /// The literal is well-formed but does not fit the target type.
    #[error("value out of range")]
    Range,

    /// The environment holds bytes that are not valid UTF-8.
    #[error("value is not valid unicode")]
    NotUnicode,
}
