use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What kind of rule a dashboard broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required scalar is absent or empty
    MissingField(&'static str),
    /// A required list has no elements
    EmptyCollection(&'static str),
    /// A value is present but out of range
    InvalidValue(&'static str),
    /// An identifier collides with one seen earlier in the same scope
    DuplicateKey(String),
}

/// A single field-level problem found in a dashboard.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub violation: Violation,
    /// Locator such as `panels[2].gridPos`
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(violation: Violation, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violation,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every violation found in one dashboard, in rule order.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("validation failed: {}", join_messages(.errors))]
#[diagnostic(code(dashboard::invalid))]
pub struct DashboardValidationError {
    #[related]
    pub errors: Vec<ValidationError>,
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A dashboard file that is not valid JSON, pointing at the offending spot.
#[derive(Error, Debug, Diagnostic)]
#[error("invalid JSON: {reason}")]
#[diagnostic(code(dashboard::parse))]
pub struct JsonParseError {
    #[source_code]
    pub src: NamedSource<String>,

    #[label("{reason}")]
    pub span: SourceSpan,

    pub reason: String,
}

impl JsonParseError {
    pub fn from_serde_error(error: &serde_json::Error, source: String, path: &Path) -> Self {
        let offset = crate::error_utils::line_col_to_offset(&source, error.line(), error.column());
        Self {
            src: crate::error_utils::create_named_source(path, source),
            span: SourceSpan::from(offset),
            reason: error.to_string(),
        }
    }
}

/// Failure to validate one dashboard file.
#[derive(Error, Debug, Diagnostic)]
pub enum DashboardFileError {
    #[error("failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] JsonParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] DashboardValidationError),
}
