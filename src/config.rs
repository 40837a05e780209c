//! Runtime configuration, read from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use warp::http::Uri;

use crate::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::llm::GenerationConfig;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub generation: GenerationConfig,
}

impl GatewayConfig {
    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = parse_or(&get, "CHAT_GATEWAY_HOST", Some(DEFAULT_HOST))?.unwrap_or(DEFAULT_HOST);
        let port = parse_or(&get, "CHAT_GATEWAY_PORT", Some(DEFAULT_PORT))?.unwrap_or(DEFAULT_PORT);

        let cors_origin =
            get("CHAT_GATEWAY_CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        if !is_valid_origin(&cors_origin) {
            return Err(ConfigError::Invalid {
                key: "CHAT_GATEWAY_CORS_ORIGIN",
                value: cors_origin,
            });
        }

        let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;
        let timeout = parse_or::<u64, _>(&get, "GEMINI_TIMEOUT_SECS", None)?
            .map(Duration::from_secs);

        let mut generation = GenerationConfig::new();
        if let Some(max_tokens) = parse_or(&get, "GEMINI_MAX_OUTPUT_TOKENS", None)? {
            generation = generation.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = parse_or(&get, "GEMINI_TEMPERATURE", None)? {
            generation = generation.with_temperature(temperature);
        }

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            cors_origin,
            gemini: GeminiConfig {
                api_key,
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout,
                generation,
            },
        })
    }
}

/// An origin is exactly `scheme://host[:port]` over http or https, as browsers send it
fn is_valid_origin(value: &str) -> bool {
    let Ok(uri) = value.parse::<Uri>() else {
        return false;
    };
    let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) else {
        return false;
    };

    matches!(scheme, "http" | "https")
        && !authority.host().is_empty()
        && !authority.as_str().contains('@')
        && value == format!("{}://{}", scheme, authority)
}

/// Parse `key` if set, otherwise fall back to `default`
fn parse_or<T, G>(get: &G, key: &'static str, default: Option<T>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
