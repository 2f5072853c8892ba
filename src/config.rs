use std::collections::HashMap;

use thiserror::Error;

pub const DEFAULT_MAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const ENDPOINT_VAR: &str = "PORTFOLIO_MAIL_ENDPOINT";
const SERVICE_ID_VAR: &str = "PORTFOLIO_MAIL_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "PORTFOLIO_MAIL_TEMPLATE_ID";
const PUBLIC_KEY_VAR: &str = "PORTFOLIO_MAIL_PUBLIC_KEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid mail endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Settings for the email-delivery provider behind the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailerConfig {
    /// Reads the settings from `vars`. Blank values count as missing.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = vars
            .into_iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .collect::<HashMap<_, _>>();
        let required = |key: &'static str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .ok_or(ConfigError::Missing(key))
        };

        let endpoint = vars
            .get(ENDPOINT_VAR)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_MAIL_ENDPOINT.to_string());
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }

        Ok(Self {
            endpoint,
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
        })
    }

    /// Reads the settings from the process environment, after loading a
    /// `.env` file from the working directory if there is one.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("couldn't read .env file: {e}"),
        }
        Self::from_vars(std::env::vars())
    }
}
