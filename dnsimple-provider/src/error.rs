/// Error type for every backend operation.
///
/// Live and fixture backends both report failures through this enum so the UI
/// can render them uniformly. Context such as "failed to list domains" is added
/// by the caller, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Connection-level failure (DNS resolution, refused connection, broken body).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// No token is stored, or it could not be read.
    NotAuthenticated {
        /// Why the token is unavailable.
        detail: String,
    },

    /// The API rejected the token (HTTP 401).
    InvalidCredentials {
        /// Message from the API, if any.
        raw_message: Option<String>,
    },

    /// The token is valid but lacks access (HTTP 403).
    PermissionDenied {
        /// Message from the API, if any.
        raw_message: Option<String>,
    },

    /// The domain does not exist in the account.
    DomainNotFound {
        /// Domain name that was requested.
        domain: String,
    },

    /// The zone does not exist in the account.
    ZoneNotFound {
        /// Zone name that was requested.
        zone: String,
    },

    /// The record does not exist in the zone.
    RecordNotFound {
        /// Zone the record was looked up in.
        zone: String,
        /// Record identifier.
        record_id: u64,
    },

    /// HTTP 429.
    RateLimited {
        /// Seconds to wait, from the `Retry-After` header.
        retry_after: Option<u64>,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// A user token has no accounts attached.
    NoAccounts,

    /// Whoami returned neither an account nor a user.
    MissingIdentity,

    /// The response body could not be decoded.
    ParseError {
        /// Decoder message.
        detail: String,
    },

    /// Any other non-success status.
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },
}

impl ProviderError {
    /// Whether the failure is caused by user input or missing resources rather
    /// than by the transport or the server. Used to pick a log level.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated { .. }
                | Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::DomainNotFound { .. }
                | Self::ZoneNotFound { .. }
                | Self::RecordNotFound { .. }
                | Self::NoAccounts
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "network error: {detail}"),
            Self::NotAuthenticated { detail } => write!(f, "not authenticated: {detail}"),
            Self::InvalidCredentials { raw_message } => match raw_message {
                Some(msg) => write!(f, "invalid token: {msg}"),
                None => write!(f, "invalid token"),
            },
            Self::PermissionDenied { raw_message } => match raw_message {
                Some(msg) => write!(f, "permission denied: {msg}"),
                None => write!(f, "permission denied"),
            },
            Self::DomainNotFound { domain } => write!(f, "domain not found: {domain}"),
            Self::ZoneNotFound { zone } => write!(f, "zone not found: {zone}"),
            Self::RecordNotFound { zone, record_id } => {
                write!(f, "record {record_id} not found in zone {zone}")
            }
            Self::RateLimited { retry_after, .. } => match retry_after {
                Some(secs) => write!(f, "rate limited (retry after {secs}s)"),
                None => write!(f, "rate limited"),
            },
            Self::NoAccounts => write!(f, "no accounts found for this user"),
            Self::MissingIdentity => write!(f, "whoami returned neither account nor user"),
            Self::ParseError { detail } => write!(f, "parse error: {detail}"),
            Self::Api { status, message } => write!(f, "API error (HTTP {status}): {message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            raw_message: Some("Authentication failed".to_string()),
        };
        assert_eq!(e.to_string(), "invalid token: Authentication failed");
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = ProviderError::InvalidCredentials { raw_message: None };
        assert_eq!(e.to_string(), "invalid token");
    }

    #[test]
    fn display_record_not_found() {
        let e = ProviderError::RecordNotFound {
            zone: "acme.dev".to_string(),
            record_id: 42,
        };
        assert_eq!(e.to_string(), "record 42 not found in zone acme.dev");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "rate limited (retry after 30s)");
    }

    #[test]
    fn display_api_error() {
        let e = ProviderError::Api {
            status: 400,
            message: "Validation failed".to_string(),
        };
        assert_eq!(e.to_string(), "API error (HTTP 400): Validation failed");
    }

    #[test]
    fn display_identity_errors() {
        assert_eq!(
            ProviderError::NoAccounts.to_string(),
            "no accounts found for this user"
        );
        assert_eq!(
            ProviderError::MissingIdentity.to_string(),
            "whoami returned neither account nor user"
        );
    }

    #[test]
    fn expected_errors() {
        assert!(ProviderError::DomainNotFound { domain: "x".into() }.is_expected());
        assert!(ProviderError::InvalidCredentials { raw_message: None }.is_expected());
        assert!(ProviderError::NoAccounts.is_expected());
    }

    #[test]
    fn unexpected_errors() {
        assert!(!ProviderError::NetworkError { detail: "x".into() }.is_expected());
        assert!(!ProviderError::ParseError { detail: "x".into() }.is_expected());
        assert!(
            !ProviderError::Api {
                status: 500,
                message: "x".into()
            }
            .is_expected()
        );
    }
}
