//! Error types for the shift payroll job.
//!
//! Every failure that is not recovered locally ends the run, so all
//! fallible operations return [`SyncError`] and callers propagate it with `?`.

use thiserror::Error;

/// The main error type for the shift payroll job.
///
/// # Example
///
/// ```
/// use shift_payroll::error::SyncError;
///
/// let error = SyncError::MissingEnv {
///     name: "NOTION_API_KEY".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing environment variable: NOTION_API_KEY");
/// ```
#[derive(Debug, Error)]
pub enum SyncError {
    /// A required environment variable was not set.
    #[error("Missing environment variable: {name}")]
    MissingEnv {
        /// The name of the variable.
        name: String,
    },

    /// An environment variable was set to a value that could not be used.
    #[error("Invalid environment variable '{name}': {message}")]
    InvalidEnv {
        /// The name of the variable.
        name: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API request failed with status {status} ({code}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The API error code, or "unknown" when the body carried none.
        code: String,
        /// The API error message or raw body.
        message: String,
    },

    /// A response body did not have the expected JSON shape.
    #[error("Failed to decode {context}: {message}")]
    Decode {
        /// What was being decoded.
        context: String,
        /// The underlying decoder message.
        message: String,
    },

    /// A record was missing a property the job cannot do without.
    #[error("Invalid record '{record_id}': {message}")]
    InvalidRecord {
        /// The id of the offending record.
        record_id: String,
        /// What was wrong with it.
        message: String,
    },
}

/// A type alias for Results that return SyncError.
pub type SyncResult<T> = Result<T, SyncError>;
