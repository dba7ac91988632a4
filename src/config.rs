use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::stat::{ParsePeriodError, ParsePolicyError, Period, SelectionPolicy};

pub const ENV_PERIOD: &str = "DASHBOARD_PERIOD";
pub const ENV_SELECTION_POLICY: &str = "DASHBOARD_SELECTION_POLICY";
pub const ENV_TICK_MS: &str = "DASHBOARD_TICK_MS";
pub const ENV_LOG_DIR: &str = "DASHBOARD_LOG_DIR";
pub const ENV_DEBUG: &str = "DASHBOARD_DEBUG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DASHBOARD_PERIOD: {0}")]
    Period(#[from] ParsePeriodError),
    #[error("DASHBOARD_SELECTION_POLICY: {0}")]
    SelectionPolicy(#[from] ParsePolicyError),
    #[error("DASHBOARD_TICK_MS: expected a positive number of milliseconds, got `{0}`")]
    TickRate(String),
    #[error("DASHBOARD_DEBUG: expected true/false, got `{0}`")]
    DebugFlag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub initial_period: Period,
    pub selection_policy: SelectionPolicy,
    pub tick_rate: Duration,
    pub log_dir: PathBuf,
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_period: Period::default(),
            selection_policy: SelectionPolicy::default(),
            tick_rate: Duration::from_millis(200),
            log_dir: PathBuf::from("logs"),
            debug: false,
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::DebugFlag(raw.to_string())),
    }
}

impl DashboardConfig {
    /// Reads `.env` (unless `ENV=prod`) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if std::env::var("ENV").ok().as_deref() != Some("prod") {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_PERIOD) {
            cfg.initial_period = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_SELECTION_POLICY) {
            cfg.selection_policy = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_TICK_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::TickRate(raw.clone()))?;
            cfg.tick_rate = Duration::from_millis(ms);
        }
        if let Some(raw) = lookup(ENV_LOG_DIR) {
            if !raw.trim().is_empty() {
                cfg.log_dir = PathBuf::from(raw.trim());
            }
        }
        if let Some(raw) = lookup(ENV_DEBUG) {
            cfg.debug = parse_bool(&raw)?;
        }

        Ok(cfg)
    }
}
