//! Request helpers for the live backend

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::error::{Resource, map_status};
use super::types::Envelope;
use super::{LiveBackend, MAX_PER_PAGE};

impl LiveBackend {
    /// Sends one request and returns the body of a 2xx response.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        token: &str,
        resource: Resource<'_>,
    ) -> Result<String> {
        let url = format!("{}{path}", self.base_url);
        let request = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json");

        let (status, body) = HttpUtils::execute_request(request, method.as_str(), &url).await?;
        if (200..300).contains(&status) {
            return Ok(body);
        }

        let err = map_status(status, &body, resource);
        if err.is_expected() {
            log::warn!("[dnsimple] {method} {path} failed: {err}");
        } else {
            log::error!("[dnsimple] {method} {path} failed: {err}");
        }
        Err(err)
    }

    /// GET returning the unwrapped `data` field.
    pub(crate) async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        resource: Resource<'_>,
    ) -> Result<T> {
        let body = self.send(Method::GET, path, token, resource).await?;
        let envelope: Envelope<T> = HttpUtils::parse_json(&body)?;
        Ok(envelope.data)
    }

    /// GET every page of a list endpoint.
    pub(crate) async fn get_all<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        resource: Resource<'_>,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let paged = format!("{path}?page={page}&per_page={MAX_PER_PAGE}");
            let body = self.send(Method::GET, &paged, token, resource).await?;
            let envelope: Envelope<Vec<T>> = HttpUtils::parse_json(&body)?;
            items.extend(envelope.data);

            match envelope.pagination {
                Some(p) if p.current_page < p.total_pages => page = p.current_page + 1,
                _ => break,
            }
        }
        Ok(items)
    }
}
