//! Request dispatch: URL construction, the HTTP round trip and failure classification.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;
use shared::{
    domain::{Endpoint, HttpMethod},
    error::{DispatchError, TransportKind},
};
use tracing::{debug, warn};
use url::Url;

use crate::settings::ClientSettings;

pub const NAME_PARAM: &str = "name";

/// One request against a named endpoint with at most one query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    pub endpoint: Endpoint,
    pub method: HttpMethod,
    pub query: Option<(String, String)>,
}

impl DispatchRequest {
    pub fn get(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            method: HttpMethod::Get,
            query: None,
        }
    }

    /// Greeting request for the raw input value; blank input falls back to `default_name`.
    pub fn greeting(method: HttpMethod, raw_name: &str, default_name: &str) -> Self {
        Self {
            endpoint: Endpoint::Greeting,
            method,
            query: Some((
                NAME_PARAM.to_string(),
                normalize_name(raw_name, default_name),
            )),
        }
    }

    pub fn query_value(&self) -> Option<&str> {
        self.query.as_ref().map(|(_, value)| value.as_str())
    }
}

pub fn normalize_name(raw: &str, default_name: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_name.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn endpoint_url(
    base_url: &str,
    endpoint: Endpoint,
    query: Option<(&str, &str)>,
) -> Result<Url, DispatchError> {
    let mut url = Url::parse(base_url).map_err(|e| DispatchError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| DispatchError::InvalidUrl(format!("{base_url} cannot be a base")))?
        .pop_if_empty()
        .push(endpoint.path());
    if let Some((name, value)) = query {
        url.query_pairs_mut().append_pair(name, value);
    }
    Ok(url)
}

#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    async fn dispatch(&self, request: &DispatchRequest) -> Result<Value, DispatchError>;
}

pub struct HttpDispatcher {
    http: Client,
    settings: ClientSettings,
}

impl HttpDispatcher {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

#[async_trait]
impl RequestDispatcher for HttpDispatcher {
    async fn dispatch(&self, request: &DispatchRequest) -> Result<Value, DispatchError> {
        let query = request
            .query
            .as_ref()
            .map(|(name, value)| (name.as_str(), value.as_str()));
        let url = endpoint_url(self.settings.base_url(), request.endpoint, query)?;
        debug!(endpoint = %request.endpoint, method = %request.method, %url, "dispatching request");

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self
                .http
                .post(url)
                .header(CONTENT_TYPE, "application/json"),
        };
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(classify_transport)?;
        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %request.endpoint, status = status.as_u16(), "request rejected");
            return Err(DispatchError::http_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let body = response.text().await.map_err(classify_transport)?;
        serde_json::from_str(&body).map_err(|err| {
            warn!(endpoint = %request.endpoint, error = %err, "response body is not json");
            DispatchError::parse(err.to_string())
        })
    }
}

fn classify_transport(err: reqwest::Error) -> DispatchError {
    let kind = if err.is_timeout() {
        TransportKind::Timeout
    } else if err.is_connect() {
        TransportKind::Connection
    } else {
        TransportKind::Other
    };
    warn!(?kind, error = %err, "transport failure");
    DispatchError::transport(kind, err.to_string())
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
