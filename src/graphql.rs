//! Minimal GraphQL-over-HTTP client for the storefront backend.
//!
//! Brand settings and banners both come from the same endpoint. Callers decide
//! how to degrade on failure; this module only reports what went wrong.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Header carrying the storefront host so the backend can pick the tenant.
pub const FORWARDED_HOST_HEADER: &str = "X-Forwarded-Host";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("backend reported errors: {0}")]
    GraphQl(String),
    #[error("backend response contained no data")]
    MissingData,
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

/// Shared client for one GraphQL endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// POST a query and decode its `data` member.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
        host: Option<&str>,
    ) -> Result<T, FetchError> {
        let mut request = self.client.post(&self.endpoint).json(&GraphqlRequest {
            query,
            variables,
        });
        if let Some(host) = host {
            request = request.header(FORWARDED_HOST_HEADER, host);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GraphqlResponse<T> = response.json().await?;
        if !body.errors.is_empty() {
            let messages = body
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FetchError::GraphQl(messages));
        }

        debug!("GraphQL query to {} succeeded", self.endpoint);
        body.data.ok_or(FetchError::MissingData)
    }
}
