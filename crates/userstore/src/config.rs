use std::env;

use thiserror::Error;

const DEFAULT_TABLE_NAME: &str = "users";
const DEFAULT_REGION: &str = "us-east-1";

/// Errors raised while validating startup configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid table name '{0}': expected 3-255 characters of [A-Za-z0-9_.-]")]
    InvalidTableName(String),
    #[error("AWS_REGION must not be empty")]
    EmptyRegion,
    #[error("Invalid endpoint URL '{0}': expected an http:// or https:// URL")]
    InvalidEndpoint(String),
}

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding user records (default: "users")
    pub table_name: String,
    /// AWS region of the table (default: "us-east-1")
    pub region: String,
    /// Endpoint override, e.g. a local DynamoDB (default: unset)
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "users")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint URL (default: unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load and validate configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            table_name: var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: var("AWS_ENDPOINT_URL").filter(|url| !url.is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the settings against DynamoDB's naming rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_table_name(&self.table_name) {
            return Err(ConfigError::InvalidTableName(self.table_name.clone()));
        }

        if self.region.trim().is_empty() {
            return Err(ConfigError::EmptyRegion);
        }

        if let Some(url) = &self.endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidEndpoint(url.clone()));
            }
        }

        Ok(())
    }

    /// Returns a display string for the target store.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({url})"),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

fn is_valid_table_name(name: &str) -> bool {
    (3..=255).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]).unwrap();

        assert_eq!(config.table_name, "users");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DYNAMODB_TABLE_NAME", "people.v2"),
            ("AWS_REGION", "eu-west-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:8001"),
        ])
        .unwrap();

        assert_eq!(config.table_name, "people.v2");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8001"));
        assert_eq!(config.target_display(), "Local DynamoDB (http://localhost:8001)");
    }

    #[test]
    fn test_empty_endpoint_is_unset() {
        let config = load(&[("AWS_ENDPOINT_URL", "")]).unwrap();
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.target_display(), "AWS DynamoDB (region: us-east-1)");
    }

    #[test]
    fn test_rejects_invalid_table_names() {
        let too_long = "x".repeat(256);
        for name in ["", "ab", "users table", "users/1", too_long.as_str()] {
            assert_eq!(
                load(&[("DYNAMODB_TABLE_NAME", name)]),
                Err(ConfigError::InvalidTableName(name.to_string()))
            );
        }
    }

    #[test]
    fn test_rejects_empty_region() {
        assert_eq!(load(&[("AWS_REGION", "  ")]), Err(ConfigError::EmptyRegion));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        assert_eq!(
            load(&[("AWS_ENDPOINT_URL", "localhost:8000")]),
            Err(ConfigError::InvalidEndpoint("localhost:8000".to_string()))
        );
    }
}
