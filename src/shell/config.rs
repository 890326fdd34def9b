use crate::shared::core::clock_time::ClockTime;
use anyhow::Context;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Process configuration.
///
/// # Environment Variables
/// - `TIMETABLE_BIND_ADDR` (optional, default `0.0.0.0:8080`)
/// - `TIMETABLE_DEFAULT_OPEN_TIME` (optional, default `00:00`): open time of owners without settings
/// - `TIMETABLE_LOG` (optional, default `info`): tracing filter used when `RUST_LOG` is unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub default_open_time: ClockTime,
    pub log_filter: String,
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("TIMETABLE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("TIMETABLE_BIND_ADDR must be a socket address such as 0.0.0.0:8080")?;
        let default_open_time = match lookup("TIMETABLE_DEFAULT_OPEN_TIME") {
            Some(value) => value
                .parse::<ClockTime>()
                .context("TIMETABLE_DEFAULT_OPEN_TIME must be HH:MM")?,
            None => ClockTime::MIDNIGHT,
        };
        let log_filter =
            lookup("TIMETABLE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_addr,
            default_open_time,
            log_filter,
        })
    }
}
