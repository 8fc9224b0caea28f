// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum WordCounterError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WordCounterError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, WordCounterError>;

/// Flat classification of every failure the tools can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Encoding,
    Io,
    Serialization,
    EmptyInput,
    NotProcessed,
    MalformedExpression,
    MissingOperator,
    InvalidOperator,
    DivisionByZero,
    InvalidInput,
}

impl WordCounterError {
    /// Classify the error, looking through any context layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Domain(err) => err.kind(),
            Self::Infrastructure(err) => err.kind(),
            Self::Application(err) => err.kind(),
            Self::Presentation(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No content to process")]
    EmptyInput,

    #[error("Malformed expression '{input}': {reason}")]
    MalformedExpression { input: String, reason: String },

    #[error("No operator in '{input}': expected one of + - * /")]
    MissingOperator { input: String },

    #[error("Invalid operator '{operator}': expected one of + - * /")]
    InvalidOperator { operator: String },

    #[error("Division by zero")]
    DivisionByZero,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::MissingOperator { .. } => ErrorKind::MissingOperator,
            Self::InvalidOperator { .. } => ErrorKind::InvalidOperator,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }

    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedExpression { input: input.into(), reason: reason.into() }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("'{operation}' requires a processed document")]
    NotProcessed { operation: &'static str },
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotProcessed { .. } => ErrorKind::NotProcessed,
        }
    }
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    #[error("File '{path}' is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InfrastructureError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Encoding { .. } => ErrorKind::Encoding,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::OutputError { .. } => ErrorKind::Io,
            Self::SerializationError { .. } => ErrorKind::Serialization,
        }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid menu option: '{input}'")]
    InvalidMenuOption { input: String },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for WordCounterError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WordCounterError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<WordCounterError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| WordCounterError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WordCounterError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
