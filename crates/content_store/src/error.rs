//! Error taxonomy for store queries.

use thiserror::Error;

/// Failure modes of a table read.
///
/// Every variant names the table it concerns so callers can log per-collection
/// warnings without threading extra context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The client was constructed without usable credentials.
    #[error("store client disabled: {reason}")]
    Disabled {
        /// Why the client cannot issue queries.
        reason: String,
    },
    /// The transport could not complete the request at all.
    #[error("transport failure reading {table}: {message}")]
    Transport {
        /// Table the failed request targeted.
        table: String,
        /// Transport-level description of the failure.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("service returned status {status} reading {table}")]
    Status {
        /// Table the failed request targeted.
        table: String,
        /// HTTP status code of the response.
        status: u16,
    },
    /// The response body did not decode as the expected row type.
    #[error("undecodable response reading {table}: {message}")]
    Decode {
        /// Table the failed request targeted.
        table: String,
        /// Decoder description of the failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_name_the_table() {
        let err = StoreError::Status {
            table: "case_studies".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "service returned status 503 reading case_studies"
        );
    }
}
