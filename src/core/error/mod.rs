use crate::core::types::{ErrorCategory, ErrorSeverity};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

pub const CODE_DOCUMENT_SHAPE: &str = "DCD-DOC-001";
pub const CODE_MISSING_FIELD: &str = "DCD-FIELD-001";
pub const CODE_UNRESOLVED_STAGE: &str = "DCD-STAGE-001";
pub const CODE_FETCH: &str = "DCD-FETCH-001";
pub const CODE_CONFIGURATION: &str = "DCD-CFG-001";
pub const CODE_RENDER: &str = "DCD-RENDER-001";

#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub code: String,
    pub message: String,
    pub context: IndexMap<String, String>,
    pub recovery_suggestions: Vec<String>,
    pub occurred_at: DateTime<Utc>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        let severity = match category {
            ErrorCategory::MissingRequiredField
            | ErrorCategory::UnresolvedStageReference
            | ErrorCategory::InvalidDocumentShape
            | ErrorCategory::FetchFailure
            | ErrorCategory::ConfigurationError
            | ErrorCategory::SerializationError
            | ErrorCategory::IoError
            | ErrorCategory::InternalError => ErrorSeverity::Error,
        };
        let code = match category {
            ErrorCategory::MissingRequiredField => CODE_MISSING_FIELD,
            ErrorCategory::UnresolvedStageReference => CODE_UNRESOLVED_STAGE,
            ErrorCategory::InvalidDocumentShape => CODE_DOCUMENT_SHAPE,
            ErrorCategory::FetchFailure => CODE_FETCH,
            ErrorCategory::ConfigurationError => CODE_CONFIGURATION,
            ErrorCategory::SerializationError => CODE_RENDER,
            ErrorCategory::IoError => "IO_ERROR",
            ErrorCategory::InternalError => "INTERNAL_ERROR",
        };
        AppError {
            category,
            severity,
            code: code.to_string(),
            message: message.into(),
            context: IndexMap::new(),
            recovery_suggestions: vec![],
            occurred_at: Utc::now(),
            source: None,
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(anyhow::anyhow!(source));
        error
    }

    /// A required field is absent; `field` is the dotted path inside the source document.
    pub fn missing_field(field: &str) -> Self {
        AppError::new(
            ErrorCategory::MissingRequiredField,
            format!("missing required field '{}'", field),
        )
        .with_field(field)
        .with_suggestion("add the field to the pipeline config and re-run the conversion")
    }

    pub fn invalid_shape(field: &str, expected: &str) -> Self {
        AppError::new(
            ErrorCategory::InvalidDocumentShape,
            format!("field '{}' must be {}", field, expected),
        )
        .with_field(field)
    }

    pub fn unresolved_stage(stage_id: &str, ref_id: &str) -> Self {
        AppError::new(
            ErrorCategory::UnresolvedStageReference,
            format!(
                "stage '{}' depends on undefined stage refId '{}'",
                stage_id, ref_id
            ),
        )
        .with_key("stage", stage_id)
        .with_key("refId", ref_id)
        .with_suggestion("point requisiteStageRefIds at an existing stage refId")
    }

    pub fn with_field(self, field: &str) -> Self {
        self.with_key("field", field)
    }

    pub fn with_key(mut self, key: &str, value: &str) -> Self {
        self.add_context(key, value);
        self
    }

    pub fn with_code<T: Into<String>>(mut self, code: T) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_suggestion<T: Into<String>>(mut self, suggestion: T) -> Self {
        self.recovery_suggestions.push(suggestion.into());
        self
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.severity
    }

    pub fn add_context(&mut self, key: &str, value: &str) {
        self.context.insert(key.to_string(), value.to_string());
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if !self.context.is_empty() {
            write!(f, " (Context: {:?})", self.context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        let mut error = AppError::new(ErrorCategory::IoError, e.to_string())
            .with_suggestion("Check that stdout is writable");
        error.source = Some(anyhow::anyhow!(e));
        error
    }
}

pub trait ErrorReporter {
    fn report_error(&self, error: &AppError);
}

/// Writes diagnostics to stderr so stdout stays reserved for the rendered template.
pub struct DefaultErrorReporter;

impl DefaultErrorReporter {
    pub fn new() -> Self {
        DefaultErrorReporter
    }
}

impl Default for DefaultErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for DefaultErrorReporter {
    fn report_error(&self, error: &AppError) {
        eprintln!("[ERROR] {}: {}", error.code, error.message);
        for (key, value) in &error.context {
            eprintln!("  {}: {}", key, value);
        }
        for suggestion in &error.recovery_suggestions {
            eprintln!("  Hint: {}", suggestion);
        }
        if let Some(ref source) = error.source {
            eprintln!("  Caused by: {}", source);
        }
    }
}
