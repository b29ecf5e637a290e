use std::env;

use crate::core::{AppError, Result};
use crate::modules::gateways::models::MerchantCredentials;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
///
/// Loaded once at process start; request handlers never touch the
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub authorizenet: AuthorizeNetConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Authorize.Net connection settings
#[derive(Debug, Clone)]
pub struct AuthorizeNetConfig {
    pub credentials: MerchantCredentials,
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::new(),
            authorizenet: AuthorizeNetConfig {
                credentials: MerchantCredentials::new(
                    env::var("MERCHANT_LOGIN_ID").map_err(|_| {
                        AppError::Configuration("MERCHANT_LOGIN_ID not set".to_string())
                    })?,
                    env::var("MERCHANT_TRANSACTION_KEY").map_err(|_| {
                        AppError::Configuration("MERCHANT_TRANSACTION_KEY not set".to_string())
                    })?,
                ),
                base_url: env::var("AUTHORIZENET_BASE_URL")
                    .unwrap_or_else(|_| "https://apitest.authorize.net".to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.authorizenet.credentials.login_id.is_empty() {
            return Err(AppError::Configuration(
                "MERCHANT_LOGIN_ID must not be empty".to_string(),
            ));
        }

        if self.authorizenet.credentials.transaction_key.is_empty() {
            return Err(AppError::Configuration(
                "MERCHANT_TRANSACTION_KEY must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
