//! Status code mapping

use crate::error::ProviderError;

use super::types::ErrorBody;

/// What a request was about, so a 404 can name the missing resource.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum Resource<'a> {
    #[default]
    Account,
    Domain(&'a str),
    Zone(&'a str),
    Record(&'a str, u64),
}

/// Turns a non-success response into a [`ProviderError`].
pub(crate) fn map_status(status: u16, body: &str, resource: Resource<'_>) -> ProviderError {
    let message = extract_message(body);
    match status {
        401 => ProviderError::InvalidCredentials {
            raw_message: message,
        },
        403 => ProviderError::PermissionDenied {
            raw_message: message,
        },
        404 => match resource {
            Resource::Domain(domain) => ProviderError::DomainNotFound {
                domain: domain.to_string(),
            },
            Resource::Zone(zone) => ProviderError::ZoneNotFound {
                zone: zone.to_string(),
            },
            Resource::Record(zone, record_id) => ProviderError::RecordNotFound {
                zone: zone.to_string(),
                record_id,
            },
            Resource::Account => ProviderError::Api {
                status,
                message: message.unwrap_or_else(|| "not found".to_string()),
            },
        },
        _ => ProviderError::Api {
            status,
            message: message.unwrap_or_else(|| format!("unexpected response (HTTP {status})")),
        },
    }
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_invalid_credentials() {
        let err = map_status(
            401,
            r#"{"message":"Authentication failed"}"#,
            Resource::Account,
        );
        assert_eq!(
            err,
            ProviderError::InvalidCredentials {
                raw_message: Some("Authentication failed".to_string())
            }
        );
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = map_status(404, "", Resource::Record("acme.dev", 12));
        assert_eq!(
            err,
            ProviderError::RecordNotFound {
                zone: "acme.dev".to_string(),
                record_id: 12
            }
        );
        let err = map_status(404, "{}", Resource::Domain("acme.dev"));
        assert!(matches!(err, ProviderError::DomainNotFound { .. }));
    }

    #[test]
    fn other_status_keeps_server_message() {
        let err = map_status(
            400,
            r#"{"message":"Zone is already active"}"#,
            Resource::Zone("acme.dev"),
        );
        assert_eq!(err.to_string(), "API error (HTTP 400): Zone is already active");
    }

    #[test]
    fn non_json_body_falls_back_to_status() {
        let err = map_status(500, "<html>oops</html>", Resource::Account);
        assert_eq!(
            err.to_string(),
            "API error (HTTP 500): unexpected response (HTTP 500)"
        );
    }
}
