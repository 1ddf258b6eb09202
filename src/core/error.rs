use thiserror::Error;

/// Errors that can occur while parsing an RKSV receipt code.
///
/// Every variant aborts construction; there is no partially parsed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RksvError {
    /// The code has fewer `_`-separated fields than the format requires.
    #[error("malformed receipt code: expected at least {expected} '_'-separated fields, found {found}")]
    MalformedCode {
        /// Minimum number of tokens (including the empty leader).
        expected: usize,
        /// Number of tokens actually present.
        found: usize,
    },

    /// The Beleg-Datum-Uhrzeit field is not `YYYY-MM-DDTHH:MM:SS`.
    #[error("invalid receipt timestamp '{0}': expected YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp(String),

    /// The JSON envelope around the code is unusable.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
