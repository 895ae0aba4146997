//! Connection configuration for the hosted database.
//!
//! Credentials are provisioned at runtime (a deployment-supplied
//! `config.json` in the browser, environment variables natively) and are
//! never compiled into the app.

use std::fmt;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_URL: &str = "REPAIR_DESK_URL";
pub const ENV_ANON_KEY: &str = "REPAIR_DESK_ANON_KEY";
pub const ENV_SCHEMA: &str = "REPAIR_DESK_SCHEMA";

const REST_PATH: &str = "rest/v1";

fn default_schema() -> String {
    "public".to_string()
}

/// Endpoint and access token for the PostgREST gateway
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`
    pub url: String,
    /// Public (anon) access token, sent as `apikey` and bearer token
    pub anon_key: String,
    #[serde(default = "default_schema")]
    pub schema: String,
}

impl GatewayConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            schema: default_schema(),
        }
    }

    /// Parse and validate a JSON document (`config.json`)
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read `REPAIR_DESK_URL`, `REPAIR_DESK_ANON_KEY` and optionally `REPAIR_DESK_SCHEMA`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let config = Self {
            url: non_empty(ENV_URL).ok_or(ConfigError::Missing(ENV_URL))?,
            anon_key: non_empty(ENV_ANON_KEY).ok_or(ConfigError::Missing(ENV_ANON_KEY))?,
            schema: non_empty(ENV_SCHEMA).unwrap_or_else(default_schema),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::Missing("anon_key"));
        }
        if self.schema.trim().is_empty() {
            return Err(ConfigError::Missing("schema"));
        }
        let base = self.base_url()?;
        match base.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidUrl(format!(
                "unsupported scheme `{}` in {}",
                other, self.url
            ))),
        }
    }

    /// REST endpoint of one collection: `{url}/rest/v1/{table}`
    pub fn rest_url(&self, table: &str) -> Result<Url, ConfigError> {
        let base = self.url.trim().trim_end_matches('/');
        Url::parse(&format!("{}/{}/{}", base, REST_PATH, table))
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.url, e)))
    }

    fn base_url(&self) -> Result<Url, ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Missing("url"));
        }
        Url::parse(self.url.trim()).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.url, e)))
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("schema", &self.schema)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_json_defaults_schema() {
        let config =
            GatewayConfig::from_json(r#"{ "url": "https://demo.supabase.co", "anon_key": "k" }"#)
                .unwrap();
        assert_eq!(config.schema, "public");
        assert_eq!(
            config.rest_url("todos").unwrap().as_str(),
            "https://demo.supabase.co/rest/v1/todos"
        );
    }

    #[test]
    fn test_rest_url_ignores_trailing_slash() {
        let config = GatewayConfig::new("http://localhost:54321/", "k");
        assert_eq!(
            config.rest_url("workers").unwrap().as_str(),
            "http://localhost:54321/rest/v1/workers"
        );
    }

    #[test]
    fn test_invalid_documents_are_rejected() {
        assert!(matches!(
            GatewayConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GatewayConfig::from_json(r#"{ "url": "https://x.co", "anon_key": "  " }"#),
            Err(ConfigError::Missing("anon_key"))
        ));
        assert!(matches!(
            GatewayConfig::from_json(r#"{ "url": "ftp://x.co", "anon_key": "k" }"#),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            GatewayConfig::from_json(r#"{ "url": "no scheme", "anon_key": "k" }"#),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_URL, "https://demo.supabase.co"),
            (ENV_ANON_KEY, " secret "),
        ]);
        let config = GatewayConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.anon_key, "secret");
        assert_eq!(config.schema, "public");

        let missing = GatewayConfig::from_lookup(|key| {
            (key == ENV_URL).then(|| "https://demo.supabase.co".to_string())
        });
        assert_eq!(missing, Err(ConfigError::Missing(ENV_ANON_KEY)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayConfig::new("https://demo.supabase.co", "very-secret-token");
        let printed = format!("{:?}", config);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("very-secret-token"));
    }
}
