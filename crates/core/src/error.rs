//! Re-export error types from the shared kernel crate.

pub use word_counter_shared_kernel::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext, ErrorKind, InfraResult,
    InfrastructureError, PresentationError, PresentationResult, Result, WordCounterError,
};
