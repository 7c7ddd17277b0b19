//! Shared HTTP plumbing for the live backend.
//!
//! Sends a prepared `RequestBuilder`, logs the exchange and turns transport
//! failures into [`ProviderError`]. Status interpretation beyond 429 is left to
//! the caller. Requests are sent once: no retry and no client-side timeout.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP helper functions
pub struct HttpUtils;

impl HttpUtils {
    /// Sends the request and returns `(status, body)`.
    ///
    /// HTTP 429 is reported as [`ProviderError::RateLimited`]; every other
    /// status is returned to the caller untouched.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[dnsimple] {method} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: e.to_string(),
            })?;

        let status = response.status().as_u16();
        log::debug!("[dnsimple] Response Status: {status}");

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[dnsimple] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                retry_after,
                raw_message: (!body.is_empty()).then_some(body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("failed to read response body: {e}"),
            })?;

        log::debug!("[dnsimple] Response Body: {}", truncate_for_log(&body));

        Ok((status, body))
    }

    /// Decodes a JSON body, logging the raw text on failure.
    pub fn parse_json<T>(body: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[dnsimple] JSON parse failed: {e}");
            log::error!("[dnsimple] Raw response: {}", truncate_for_log(body));
            ProviderError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

/// Builds the shared `reqwest` client.
pub fn create_http_client(user_agent: &str) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|e| ProviderError::NetworkError {
            detail: format!("failed to build HTTP client: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Data {
            distributed: bool,
        }
        let result: Result<Data, ProviderError> =
            HttpUtils::parse_json(r#"{"distributed":true}"#);
        assert!(
            matches!(&result, Ok(Data { distributed: true })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Data {
            distributed: bool,
        }
        let result: Result<Data, ProviderError> = HttpUtils::parse_json("<html>");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
