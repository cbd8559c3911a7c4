use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::transport::{WebhookEndpoints, WebhookMode};

const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub webhook: WebhookConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            webhook: WebhookConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where contact submissions are posted.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub mode: WebhookMode,
    pub endpoints: WebhookEndpoints,
    pub timeout: Duration,
}

impl WebhookConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let mode = WebhookMode::from_attribute(
            env::var("APP_WEBHOOK_MODE").ok().as_deref().unwrap_or_default(),
        );

        let defaults = WebhookEndpoints::default();
        let production = env::var("APP_WEBHOOK_PRODUCTION_URL").unwrap_or(defaults.production);
        let test = env::var("APP_WEBHOOK_TEST_URL").unwrap_or(defaults.test);
        for url in [&production, &test] {
            url::Url::parse(url).map_err(|source| ConfigError::InvalidWebhookUrl {
                value: url.clone(),
                source,
            })?;
        }

        let timeout = match env::var("APP_WEBHOOK_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidWebhookTimeout)?,
            Err(_) => DEFAULT_WEBHOOK_TIMEOUT_SECS,
        };

        Ok(Self {
            mode,
            endpoints: WebhookEndpoints { production, test },
            timeout: Duration::from_secs(timeout),
        })
    }

    /// URL selected by the active mode.
    pub fn endpoint(&self) -> &str {
        self.endpoints.resolve(self.mode)
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            mode: WebhookMode::default(),
            endpoints: WebhookEndpoints::default(),
            timeout: Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidWebhookUrl {
        value: String,
        source: url::ParseError,
    },
    InvalidWebhookTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWebhookUrl { value, .. } => {
                write!(f, "webhook url '{}' is not a valid absolute url", value)
            }
            ConfigError::InvalidWebhookTimeout => {
                write!(f, "APP_WEBHOOK_TIMEOUT_SECS must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidWebhookTimeout => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidWebhookUrl { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_WEBHOOK_MODE");
        env::remove_var("APP_WEBHOOK_PRODUCTION_URL");
        env::remove_var("APP_WEBHOOK_TEST_URL");
        env::remove_var("APP_WEBHOOK_TIMEOUT_SECS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.webhook.mode, WebhookMode::Production);
        assert_eq!(config.webhook.timeout, Duration::from_secs(10));
        assert_eq!(
            config.webhook.endpoint(),
            WebhookEndpoints::default().production
        );
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn test_mode_selects_test_endpoint() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_WEBHOOK_MODE", "test");
        env::set_var("APP_WEBHOOK_TEST_URL", "http://127.0.0.1:5678/webhook-test/fit");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.webhook.mode, WebhookMode::Test);
        assert_eq!(
            config.webhook.endpoint(),
            "http://127.0.0.1:5678/webhook-test/fit"
        );
        reset_env();
    }

    #[test]
    fn rejects_zero_timeout_and_relative_urls() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_WEBHOOK_TIMEOUT_SECS", "0");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidWebhookTimeout)
        ));

        reset_env();
        env::set_var("APP_WEBHOOK_PRODUCTION_URL", "/webhook/fit");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidWebhookUrl { .. })
        ));
        reset_env();
    }
}
