//! HTTP client for a PostgREST endpoint (`{url}/rest/v1/{table}`).

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, warn};

use super::{BackendError, Operation, RemoteClient, RemoteRequest, RemoteResult, Returning};
use crate::config::{Config, ConfigError};

const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// Remote client for the hosted backend's REST interface.
#[derive(Clone)]
pub struct PostgrestClient {
    base_url: String,
    client: Client,
}

impl PostgrestClient {
    /// Create a client from validated configuration.
    ///
    /// The anon key is sent both as `apikey` and as a bearer token on every request.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let _ = rustls::crypto::ring::default_provider().install_default();

        let client = Client::builder()
            .default_headers(auth_headers(&config.anon_key)?)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::Invalid {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            base_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            client,
        })
    }

    /// Get the REST base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build(&self, request: &RemoteRequest) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, request.table);
        let mut builder = match request.operation {
            Operation::Select => self.client.get(&url).query(&[("select", "*")]),
            Operation::Insert => self.client.post(&url),
            Operation::Update => self.client.patch(&url),
            Operation::Delete => self.client.delete(&url),
        };

        if let Some(filter) = &request.filter {
            builder = builder.query(&[(filter.column.as_str(), format!("eq.{}", filter.value))]);
        }
        if let Some(order) = &request.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            builder = builder.query(&[("order", format!("{}.{}", order.column, direction))]);
        }
        if request.operation != Operation::Select {
            let prefer = match request.returning {
                Returning::Nothing => "return=minimal",
                Returning::Rows | Returning::Single => "return=representation",
            };
            builder = builder.header("Prefer", prefer);
        }
        if request.returning == Returning::Single {
            builder = builder.header(ACCEPT, SINGLE_OBJECT_MEDIA_TYPE);
        }
        if let Some(payload) = &request.payload {
            builder = builder.json(payload);
        }
        builder
    }

    /// Turn an HTTP response into rows or the backend's error.
    async fn handle_response(response: Response, returning: Returning) -> RemoteResult<Vec<Value>> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = match serde_json::from_str::<BackendError>(&text) {
                Ok(parsed) => parsed,
                Err(_) if text.is_empty() => BackendError::new(
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string(),
                ),
                Err(_) => BackendError::new(text),
            };
            return Err(err.with_status(status.as_u16()));
        }

        match returning {
            Returning::Nothing => Ok(Vec::new()),
            Returning::Single => {
                let row: Value = response.json().await?;
                Ok(vec![row])
            }
            Returning::Rows => {
                let body: Value = response.json().await?;
                match body {
                    Value::Array(rows) => Ok(rows),
                    other => Ok(vec![other]),
                }
            }
        }
    }
}

/// `apikey` and bearer `Authorization` headers for the anon key.
fn auth_headers(anon_key: &str) -> Result<HeaderMap, ConfigError> {
    let value = |text: &str| {
        HeaderValue::from_str(text).map_err(|_| ConfigError::Invalid {
            message: "anon key contains characters not allowed in an HTTP header".to_string(),
        })
    };

    let mut headers = HeaderMap::new();
    headers.insert("apikey", value(anon_key)?);
    headers.insert(AUTHORIZATION, value(&format!("Bearer {}", anon_key))?);
    Ok(headers)
}

impl RemoteClient for PostgrestClient {
    async fn execute(&self, request: RemoteRequest) -> RemoteResult<Vec<Value>> {
        debug!(operation = %request.operation, table = %request.table, "remote request");
        let returning = request.returning;
        let response = self.build(&request).send().await.inspect_err(|e| {
            warn!(table = %request.table, error = %e, "request did not reach backend");
        })?;

        Self::handle_response(response, returning)
            .await
            .inspect_err(|e| {
                warn!(
                    operation = %request.operation,
                    table = %request.table,
                    code = e.code.as_deref().unwrap_or("-"),
                    "backend reported failure: {}",
                    e.message
                );
            })
    }
}
