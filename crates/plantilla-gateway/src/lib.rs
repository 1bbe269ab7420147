//! # plantilla-gateway
//!
//! HTTP client for the Plantilla microservice, reached through the API
//! gateway. Every call is a single `GET` with no retries; failures come back
//! as [`GatewayError`] for the caller to report.

pub mod routes;

mod error;
mod http;

pub use error::GatewayError;

use plantilla_config::GatewayConfig;
use plantilla_core::Record;
use serde::Deserialize;
use serde_json::Value;

use crate::http::check_response;

/// Body of `GET /plantilla/getTodas`.
#[derive(Deserialize)]
struct RecordList {
    data: Vec<Record>,
}

/// HTTP client bound to one gateway base address.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_secs > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}{route}` and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request fails, the gateway returns a
    /// non-success status, or the body is not JSON.
    pub async fn fetch_route(&self, route: &str) -> Result<Value, GatewayError> {
        let url = format!("{}{route}", self.base_url);
        tracing::debug!(%url, "fetching gateway route");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Parse(format!("{url}: {e}")))
    }

    /// Download every record from `getTodas`, returning just the `data` array.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_route`], plus [`GatewayError::Parse`] if the body
    /// has no `data` array of records.
    pub async fn fetch_all(&self) -> Result<Vec<Record>, GatewayError> {
        let body = self.fetch_route(routes::GET_ALL).await?;
        let list: RecordList = serde_json::from_value(body)
            .map_err(|e| GatewayError::Parse(format!("{}: {e}", routes::GET_ALL)))?;
        tracing::debug!(records = list.data.len(), "downloaded records");
        Ok(list.data)
    }

    /// Download a single record by its reference id.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_route`], plus [`GatewayError::Parse`] if the body
    /// is not a record.
    pub async fn fetch_one(&self, id: &str) -> Result<Record, GatewayError> {
        let route = routes::get_by_id(id);
        let body = self.fetch_route(&route).await?;
        serde_json::from_value(body).map_err(|e| GatewayError::Parse(format!("{route}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_base_url() {
        let config = GatewayConfig {
            base_url: "http://localhost:8001/".into(),
            ..Default::default()
        };
        let client = GatewayClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8001");
    }

    #[test]
    fn record_list_requires_data() {
        assert!(serde_json::from_str::<RecordList>(r#"{"datos": []}"#).is_err());
        let list: RecordList = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(list.data.is_empty());
    }
}
