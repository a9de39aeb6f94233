use thiserror::Error;

/// Failures the engine can surface to callers.
///
/// The taxonomy is deliberately narrow: the engine computes over
/// already-validated log data, so the only recoverable failure is a blank
/// food name handed to the classifier. A missing user is not an error — entry
/// points fall back to a zeroed snapshot instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("food name must not be blank")]
    InvalidInput,
}
