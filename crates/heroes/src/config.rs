use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Table store connection settings.
    pub dynamodb: DynamoDbConfig,
}

/// Connection settings for the DynamoDB table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamoDbConfig {
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Endpoint override, e.g. `http://localhost:8000` for dynamodb-local.
    pub endpoint_url: Option<String>,
    /// Table name (default: "heroes")
    pub table_name: String,
    /// Maximum items per scan request. `None` leaves paging to DynamoDB.
    pub scan_page_size: Option<i32>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `DYNAMODB_REGION` - AWS region (default: "us-east-1")
    /// - `DYNAMODB_ENDPOINT` - Endpoint override (default: AWS endpoint for the region)
    /// - `DYNAMODB_TABLE` - Table name (default: "heroes")
    /// - `DYNAMODB_SCAN_PAGE_SIZE` - Items per scan request (default: unset)
    pub fn from_env() -> Self {
        Self {
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            dynamodb: DynamoDbConfig::from_env(),
        }
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl DynamoDbConfig {
    /// Load table store settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            region: env::var("DYNAMODB_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: env::var("DYNAMODB_ENDPOINT")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            table_name: env::var("DYNAMODB_TABLE").unwrap_or_else(|_| "heroes".to_string()),
            scan_page_size: env::var("DYNAMODB_SCAN_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &i32| *n > 0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 30,
            dynamodb: DynamoDbConfig {
                region: "us-east-1".to_string(),
                endpoint_url: None,
                table_name: "heroes".to_string(),
                scan_page_size: None,
            },
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
        env::remove_var("DYNAMODB_REGION");
        env::remove_var("DYNAMODB_ENDPOINT");
        env::remove_var("DYNAMODB_TABLE");
        env::remove_var("DYNAMODB_SCAN_PAGE_SIZE");

        let config = Config::from_env();

        assert_eq!(config.request_timeout_seconds, 10);
        assert_eq!(
            config.dynamodb,
            DynamoDbConfig {
                region: "us-east-1".to_string(),
                endpoint_url: None,
                table_name: "heroes".to_string(),
                scan_page_size: None,
            }
        );
    }
}
