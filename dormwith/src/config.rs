use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse a comma-separated list, dropping blank entries.
fn parse_env_list(var: &str) -> Vec<String> {
    env::var(var)
        .map(|val| {
            val.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub matching: MatchingConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_keys: Vec<String>,
}

/// Credentials accepted by `POST /auth:login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub demo_username: String,
    pub demo_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Populate the matching buckets from the catalog at startup.
    pub seed_on_start: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    pub message_max_chars: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_username: "sunmoon".to_string(),
            demo_password: "sunmoon".to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            message_max_chars: 500,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let auth_defaults = AuthConfig::default();
        Self {
            server: ServerConfig {
                host: env::var("DORMWITH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("DORMWITH_PORT", 3000),
                api_keys: parse_env_list("DORMWITH_API_KEYS"),
            },
            auth: AuthConfig {
                demo_username: env::var("DORMWITH_DEMO_USERNAME")
                    .unwrap_or(auth_defaults.demo_username),
                demo_password: env::var("DORMWITH_DEMO_PASSWORD")
                    .unwrap_or(auth_defaults.demo_password),
            },
            matching: MatchingConfig {
                seed_on_start: parse_env_or("DORMWITH_SEED_MATCHING", true),
            },
            chat: ChatConfig {
                message_max_chars: parse_env_or(
                    "DORMWITH_MESSAGE_MAX_CHARS",
                    ChatConfig::default().message_max_chars,
                ),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
