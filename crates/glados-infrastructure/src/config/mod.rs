mod timeouts;

pub use timeouts::TimeoutConfig;

use glados_domain::account::Credentials;

pub const ENV_EMAIL: &str = "GLADOS_EMAIL";
pub const ENV_COOKIE: &str = "GLADOS_COOKIE";
pub const ENV_BOT_TOKEN: &str = "TG_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TG_CHAT_ID";
pub const ENV_GLADOS_BASE_URL: &str = "GLADOS_BASE_URL";
pub const ENV_TELEGRAM_API_BASE_URL: &str = "TG_API_BASE_URL";

/// Required variables, in the order they are reported when missing
pub const REQUIRED_VARS: [&str; 4] = [ENV_EMAIL, ENV_COOKIE, ENV_BOT_TOKEN, ENV_CHAT_ID];

pub const DEFAULT_GLADOS_BASE_URL: &str = "https://glados.rocks";
pub const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    #[error("Invalid URL in {name}: {value} ({source})")]
    InvalidUrl {
        name: &'static str,
        value: String,
        source: url::ParseError,
    },
}

/// Process configuration, built once at startup and passed down explicitly
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub glados_base_url: String,
    pub telegram_api_base_url: String,
    pub timeouts: TimeoutConfig,
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    ///
    /// Unset and blank values both count as missing. Every missing required
    /// name is reported in one error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|&&name| read(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let credentials = Credentials::new(
            read(ENV_EMAIL).unwrap_or_default(),
            read(ENV_COOKIE).unwrap_or_default(),
            read(ENV_BOT_TOKEN).unwrap_or_default(),
            read(ENV_CHAT_ID).unwrap_or_default(),
        );

        let glados_base_url = base_url(
            ENV_GLADOS_BASE_URL,
            read(ENV_GLADOS_BASE_URL),
            DEFAULT_GLADOS_BASE_URL,
        )?;
        let telegram_api_base_url = base_url(
            ENV_TELEGRAM_API_BASE_URL,
            read(ENV_TELEGRAM_API_BASE_URL),
            DEFAULT_TELEGRAM_API_BASE_URL,
        )?;

        Ok(Self {
            credentials,
            glados_base_url,
            telegram_api_base_url,
            timeouts: TimeoutConfig::default(),
        })
    }
}

fn base_url(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<String, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());
    let trimmed = value.trim().trim_end_matches('/').to_string();

    url::Url::parse(&trimmed).map_err(|source| ConfigError::InvalidUrl {
        name,
        value: value.clone(),
        source,
    })?;

    Ok(trimmed)
}
