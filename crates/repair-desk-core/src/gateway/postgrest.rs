//! PostgREST Gateway
//!
//! Direct REST integration with the hosted database (`/rest/v1/{table}`).
//! Compiles to the browser `fetch` API on wasm32.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::query::{keyed_pairs, Filter, Select};
use super::traits::Gateway;
use crate::config::GatewayConfig;
use crate::error::{ConfigError, GatewayError, GatewayResult};

/// Longest slice of an error body kept in messages
const MAX_ERROR_BODY: usize = 500;

/// Error document returned by PostgREST
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
    hint: Option<String>,
}

pub struct PostgrestGateway {
    client: Client,
    config: GatewayConfig,
}

impl PostgrestGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn request(&self, method: Method, table: &str) -> GatewayResult<RequestBuilder> {
        let url = self
            .config
            .rest_url(table)
            .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;
        // Reads select the schema with Accept-Profile, writes with Content-Profile
        let profile_header = if method == Method::GET {
            "Accept-Profile"
        } else {
            "Content-Profile"
        };

        Ok(self
            .client
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .header(profile_header, &self.config.schema))
    }

    async fn execute(&self, builder: RequestBuilder) -> GatewayResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Remote {
            status: status.as_u16(),
            message: remote_message(&body),
        })
    }
}

#[async_trait(?Send)]
impl Gateway for PostgrestGateway {
    async fn select(&self, query: &Select) -> GatewayResult<Vec<Value>> {
        let builder = self
            .request(Method::GET, &query.table)?
            .query(&query.query_pairs());
        let response = self.execute(builder).await?;
        let rows: Vec<Value> = response.json().await?;
        debug!(table = %query.table, rows = rows.len(), "select");
        Ok(rows)
    }

    async fn insert(&self, table: &str, rows: Value) -> GatewayResult<()> {
        let builder = self
            .request(Method::POST, table)?
            .header("Prefer", "return=minimal")
            .json(&rows);
        self.execute(builder).await?;
        debug!(table, "insert");
        Ok(())
    }

    async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> GatewayResult<()> {
        let pairs = keyed_pairs(filters)?;
        let builder = self
            .request(Method::PATCH, table)?
            .header("Prefer", "return=minimal")
            .query(&pairs)
            .json(&patch);
        self.execute(builder).await?;
        debug!(table, "update");
        Ok(())
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> GatewayResult<()> {
        let pairs = keyed_pairs(filters)?;
        let builder = self
            .request(Method::DELETE, table)?
            .header("Prefer", "return=minimal")
            .query(&pairs);
        self.execute(builder).await?;
        debug!(table, "delete");
        Ok(())
    }
}

/// Human-readable message for a failed response body.
///
/// Prefers the PostgREST `message` field. Either form is truncated.
pub(crate) fn remote_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            let mut text = match parsed.code {
                Some(code) => format!("{} ({})", message, code),
                None => message,
            };
            if let Some(hint) = parsed.hint {
                text.push_str(&format!(" hint: {}", hint));
            }
            return truncate(&text);
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    truncate(trimmed)
}

fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
