//! Error types for wardround-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Treatment submitted for an id that is not in the ward: the id was
    /// never issued, the patient was already treated, or the process
    /// restarted since admission.
    #[error("unknown patient id: {0}")]
    UnknownPatient(u64),
}

/// Core result type
pub type Result<T> = std::result::Result<T, Error>;
