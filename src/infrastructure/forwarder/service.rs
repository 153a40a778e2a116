//! HTTP mirror forwarder
//!
//! Every mutating or query call can be replicated to an external mock
//! endpoint for observability. The outcome is a value, never an error:
//! a failed mirror call must not fail the primary operation.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::DomainError;

/// Result of one mirror call, embedded informationally in responses
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MirrorOutcome {
    /// The mirror endpoint answered with a JSON body
    Delivered(Value),
    /// Transport or decode failure, with the captured message
    Failed { error: String },
}

/// Capability for mirroring an API call to an external endpoint
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Mirror one call; `None` means mirroring is disabled
    async fn forward(
        &self,
        path: &str,
        payload: Option<Value>,
        method: Method,
    ) -> Option<MirrorOutcome>;
}

/// Forwarder that proxies calls to a fixed base URL over HTTP
pub struct HttpForwarder {
    client: Client,
    base_url: String,
}

impl HttpForwarder {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(
        &self,
        path: &str,
        payload: Option<Value>,
        method: Method,
    ) -> Option<MirrorOutcome> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.request(method, &url);

        if let Some(ref payload) = payload {
            request = request.json(payload);
        }

        let outcome = match request.send().await {
            Ok(response) => {
                let status = response.status();

                match response.json::<Value>().await {
                    Ok(body) => {
                        debug!(url = %url, status = %status, "Mirror call delivered");
                        MirrorOutcome::Delivered(body)
                    }
                    Err(e) => {
                        warn!(url = %url, error = %e, "Mirror response was not JSON");
                        MirrorOutcome::Failed {
                            error: format!("Failed to decode mirror response: {}", e),
                        }
                    }
                }
            }
            Err(e) => {
                let error = if e.is_timeout() {
                    "Request timed out".to_string()
                } else if e.is_connect() {
                    "Connection failed".to_string()
                } else {
                    format!("Request failed: {}", e)
                };

                warn!(url = %url, error = %error, "Mirror call failed");
                MirrorOutcome::Failed { error }
            }
        };

        Some(outcome)
    }
}

/// Forwarder used when mirroring is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopForwarder;

#[async_trait]
impl Forwarder for NoopForwarder {
    async fn forward(
        &self,
        _path: &str,
        _payload: Option<Value>,
        _method: Method,
    ) -> Option<MirrorOutcome> {
        None
    }
}
