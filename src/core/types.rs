use serde::{Deserialize, Serialize};

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// A field the converter cannot do without is absent from the source document.
    MissingRequiredField,
    /// A `requisiteStageRefIds` entry names a `refId` no stage carries.
    UnresolvedStageReference,
    /// A field exists but has the wrong JSON type, or the document is not an object.
    InvalidDocumentShape,
    /// The pipeline config could not be retrieved from the API.
    FetchFailure,
    ConfigurationError,
    SerializationError,
    IoError,
    InternalError,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    Warning,
    Info,
    Debug,
}
