use serde::{Deserialize, Serialize};

/// Which webhook the hosting page targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookMode {
    #[default]
    Production,
    Test,
}

impl WebhookMode {
    /// Interpret the host's mode attribute. Anything other than `test` targets production.
    pub fn from_attribute(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "test" => Self::Test,
            _ => Self::Production,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            WebhookMode::Production => "production",
            WebhookMode::Test => "test",
        }
    }
}

pub const DEFAULT_PRODUCTION_URL: &str = "https://hooks.example.com/webhook/fit-assessment";
pub const DEFAULT_TEST_URL: &str = "https://hooks.example.com/webhook-test/fit-assessment";

/// Two-entry endpoint table keyed by [`WebhookMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpoints {
    pub production: String,
    pub test: String,
}

impl WebhookEndpoints {
    pub fn resolve(&self, mode: WebhookMode) -> &str {
        match mode {
            WebhookMode::Production => &self.production,
            WebhookMode::Test => &self.test,
        }
    }
}

impl Default for WebhookEndpoints {
    fn default() -> Self {
        Self {
            production: DEFAULT_PRODUCTION_URL.to_string(),
            test: DEFAULT_TEST_URL.to_string(),
        }
    }
}
