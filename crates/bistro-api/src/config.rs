//! Server configuration.
//!
//! Loaded from an optional TOML file, every section defaulted, then
//! overridden by `BISTRO_*` environment variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `BISTRO_BIND` | `server.bind` |
//! | `BISTRO_AUTH_ENABLED` | `auth.enabled` |
//! | `BISTRO_LOGIN_URL` | `auth.login_url` |
//! | `BISTRO_SESSION_COOKIE` | `auth.session_cookie` |
//! | `BISTRO_LOG` | `logging.filter` |

use serde::{Deserialize, Serialize};
use std::path::Path;

use bistro_auth::{AuthConfig, AuthenticatedUser, DEFAULT_SESSION_COOKIE, StaticTokenValidator};

use crate::{Error, Result};

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "BISTRO_";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BistroConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Identification and login redirect.
    pub auth: AuthSettings,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

/// `[auth]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Whether tokens are checked. When false every request acts as `dev_user`.
    pub enabled: bool,
    /// Where anonymous requests to gated pages are redirected.
    pub login_url: String,
    /// Cookie carrying a session token.
    pub session_cookie: String,
    /// Acting user in dev mode.
    pub dev_user: UserEntry,
    /// Accepted tokens.
    pub tokens: Vec<TokenEntry>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            login_url: "/accounts/login/".to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            dev_user: UserEntry {
                subject: "dev".to_string(),
                email: "dev@localhost".to_string(),
            },
            tokens: Vec::new(),
        }
    }
}

/// A user identity in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntry {
    /// Stable subject identifier.
    pub subject: String,
    /// Contact email.
    pub email: String,
}

impl From<&UserEntry> for AuthenticatedUser {
    fn from(entry: &UserEntry) -> Self {
        AuthenticatedUser::new(entry.subject.clone(), entry.email.clone())
    }
}

/// One `[[auth.tokens]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Opaque token value presented by the client.
    pub token: String,
    /// Identity the token stands for.
    #[serde(flatten)]
    pub user: UserEntry,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,bistro=debug".to_string(),
        }
    }
}

impl BistroConfig {
    /// Loads configuration from `path` (if any), then applies the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::config(format!("Failed to read {}: {e}", path.display()))
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_env(std::env::vars())?;
        Ok(config)
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Serialises to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Applies `BISTRO_*` overrides from `vars`. Unrelated variables are ignored.
    pub fn apply_env<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name {
                "BIND" => self.server.bind = value,
                "AUTH_ENABLED" => self.auth.enabled = parse_bool(&key, &value)?,
                "LOGIN_URL" => self.auth.login_url = value,
                "SESSION_COOKIE" => self.auth.session_cookie = value,
                "LOG" => self.logging.filter = value,
                _ => {}
            }
        }
        Ok(())
    }

    /// Settings for the auth middleware.
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            enabled: self.auth.enabled,
            session_cookie: self.auth.session_cookie.clone(),
            dev_user: AuthenticatedUser::from(&self.auth.dev_user),
        }
    }

    /// Validator accepting the configured tokens.
    pub fn token_validator(&self) -> StaticTokenValidator {
        self.auth
            .tokens
            .iter()
            .map(|entry| (entry.token.clone(), AuthenticatedUser::from(&entry.user)))
            .collect()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
