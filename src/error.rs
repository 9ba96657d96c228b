use serde::{Deserialize, Serialize};

/// Unified error type for all CCP webservice operations.
///
/// Variants carry the context a host needs for diagnostics: the affected
/// domain, the requested record identifier, or the raw HTTP response. All
/// variants are serializable for structured error reporting.
///
/// No variant is retried by the client; callers own any retry policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CcpError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken transfer, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request exceeded the configured timeout.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a non-200 status code.
    ///
    /// The body is attached verbatim and is not parsed in this path.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Failed to decode a response envelope.
    Parse {
        /// Details about the decode failure.
        detail: String,
    },

    /// Failed to serialize a request envelope.
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// No record with the requested identifier exists in the zone's record
    /// set.
    RecordNotFound {
        /// Zone the record was looked up in.
        domain: String,
        /// Identifier that was not found.
        record_id: String,
    },

    /// A record was submitted for creation but could not be located in the
    /// record set the server returned.
    ReconciliationFailed {
        /// Zone the record was created in.
        domain: String,
        /// Submitted hostname.
        hostname: String,
        /// Submitted record type.
        record_type: String,
        /// Submitted destination.
        destination: String,
    },

    /// A record is still present in the returned record set after a delete
    /// request.
    DeleteFailed {
        /// Zone the record was deleted from.
        domain: String,
        /// Identifier that should have disappeared.
        record_id: String,
    },
}

impl std::fmt::Display for CcpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => {
                write!(f, "network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "request timeout: {detail}")
            }
            Self::HttpStatus { status, body } => {
                write!(f, "unexpected HTTP status {status}: {body}")
            }
            Self::Parse { detail } => {
                write!(f, "failed to decode response: {detail}")
            }
            Self::Serialization { detail } => {
                write!(f, "failed to serialize request: {detail}")
            }
            Self::RecordNotFound { domain, record_id } => {
                write!(
                    f,
                    "could not find DNS record with ID {record_id} for domain {domain}"
                )
            }
            Self::ReconciliationFailed {
                domain,
                hostname,
                record_type,
                destination,
            } => {
                write!(
                    f,
                    "could not retrieve newly created DNS record \
                     {hostname} {record_type} {destination} for domain {domain}"
                )
            }
            Self::DeleteFailed { domain, record_id } => {
                write!(
                    f,
                    "failed to delete DNS record with ID {record_id} for domain {domain}"
                )
            }
        }
    }
}

impl std::error::Error for CcpError {}

/// Convenience type alias for `Result<T, CcpError>`.
pub type Result<T> = std::result::Result<T, CcpError>;
