use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// AppConfig
///
/// The portal's runtime configuration, loaded once at startup and immutable
/// afterwards. Handlers reach it through `FromRef<AppState>`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects the log format and the seeding default.
    pub env: Env,
    // Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    // Whether the content store starts with the demo articles, events and clubs.
    pub seed_demo_data: bool,
}

/// Env
///
/// `Local` gets human-readable logs and demo data by default; `Production`
/// gets JSON logs and starts empty unless told otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Env {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Env::Local),
            "production" => Ok(Env::Production),
            _ => Err(ConfigError::InvalidValue {
                key: "APP_ENV",
                value: value.to_string(),
                reason: "expected `local` or `production`".to_string(),
            }),
        }
    }
}

impl Default for AppConfig {
    /// default
    ///
    /// A local configuration that needs no environment variables, for tests
    /// and state scaffolding.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            seed_demo_data: true,
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads `APP_ENV`, `BIND_ADDR` and `SEED_DEMO_DATA` from the process
    /// environment (call `dotenv` first to pick up a `.env` file). Unset
    /// variables fall back to their defaults; a set but unparseable value is
    /// an error rather than a silent fallback.
    pub fn load() -> Result<Self, ConfigError> {
        let env = match env::var("APP_ENV") {
            Ok(value) => Env::parse(&value)?,
            Err(_) => Env::Local,
        };

        let raw_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "BIND_ADDR",
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(value) => parse_bool("SEED_DEMO_DATA", &value)?,
            Err(_) => env == Env::Local,
        };

        Ok(Self {
            env,
            bind_addr,
            seed_demo_data,
        })
    }
}
