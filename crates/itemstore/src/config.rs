use std::{env, time::Duration};

use itemstore_core::{identifier::DEFAULT_PREFIX, pagination::DEFAULT_LIMIT};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the items table (default: "Itens")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Prefix of generated item identifiers (default: "ACT")
    pub id_prefix: String,
    /// Page size when a list request carries no usable `limit` (default: 10)
    pub default_page_limit: u32,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Items table name (default: "Itens")
    /// - `ID_PREFIX` - Identifier prefix (default: "ACT")
    /// - `DEFAULT_PAGE_LIMIT` - List page size (default: 10)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "Itens".to_string()),
            id_prefix: env::var("ID_PREFIX")
                .ok()
                .filter(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphabetic()))
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            default_page_limit: env::var("DEFAULT_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|limit| *limit >= 1)
                .unwrap_or(DEFAULT_LIMIT),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: "Itens".to_string(),
            id_prefix: DEFAULT_PREFIX.to_string(),
            default_page_limit: DEFAULT_LIMIT,
            request_timeout_seconds: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 30,
            ..Config::default()
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.table_name, "Itens");
        assert_eq!(config.id_prefix, "ACT");
        assert_eq!(config.default_page_limit, 10);
        assert_eq!(config.request_timeout_seconds, 10);
    }
}
