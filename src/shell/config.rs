use crate::modules::messages::use_cases::stream_messages::producer::{
    DEFAULT_INTERVAL_MS, DEFAULT_TICKS, StreamSettings,
};
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const HOST_KEY: &str = "MESSAGES_HOST";
pub const PORT_KEY: &str = "MESSAGES_PORT";
pub const STREAM_TICKS_KEY: &str = "MESSAGES_STREAM_TICKS";
pub const STREAM_INTERVAL_MS_KEY: &str = "MESSAGES_STREAM_INTERVAL_MS";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub stream: StreamSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            stream: StreamSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let ticks: u32 = parse(&lookup, STREAM_TICKS_KEY, DEFAULT_TICKS)?;
        let interval_ms: u64 = parse(&lookup, STREAM_INTERVAL_MS_KEY, DEFAULT_INTERVAL_MS)?;
        if ticks == 0 {
            return Err(at_least_one(STREAM_TICKS_KEY, ticks));
        }
        if interval_ms == 0 {
            return Err(at_least_one(STREAM_INTERVAL_MS_KEY, interval_ms));
        }

        Ok(Self {
            host: parse(&lookup, HOST_KEY, defaults.host)?,
            port: parse(&lookup, PORT_KEY, defaults.port)?,
            stream: StreamSettings {
                ticks,
                interval: Duration::from_millis(interval_ms),
            },
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            }),
        },
    }
}

fn at_least_one(key: &'static str, value: impl Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: "must be at least 1".into(),
    }
}
