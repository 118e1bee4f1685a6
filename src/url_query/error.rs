use thiserror::Error;

/// Errors raised by the checked lookup functions
///
/// A missing key or a key without a value is never an error; lookups
/// report those through `None` and `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A required input was not supplied
    #[error("invalid argument: {0} must be provided")]
    InvalidArgument(&'static str),
}
