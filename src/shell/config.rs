// Service configuration read from the environment.
//
// Every variable has a default. Without both Google endpoints the service runs offline against
// in-memory adapters, which is enough to exercise the site locally.

use crate::modules::rsvps::use_cases::sync_guest_list::handler::SyncSettings;
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub form_url: Option<String>,
    pub sheet_url: Option<String>,
    pub storage_path: PathBuf,
    pub refresh_delay: Duration,
    pub refresh_attempts: u32,
    pub success_display: Duration,
    pub http_timeout: Duration,
    pub max_guests: u32,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            port: try_load(&lookup, "RSVP_PORT", "8080")?,
            form_url: optional(&lookup, "RSVP_FORM_URL"),
            sheet_url: optional(&lookup, "RSVP_SHEET_URL"),
            storage_path: try_load(&lookup, "RSVP_STORAGE_PATH", "./data/local-storage.json")?,
            refresh_delay: Duration::from_secs(try_load(&lookup, "RSVP_REFRESH_DELAY_SECS", "5")?),
            refresh_attempts: try_load(&lookup, "RSVP_REFRESH_ATTEMPTS", "3")?,
            success_display: Duration::from_secs(try_load(
                &lookup,
                "RSVP_SUCCESS_DISPLAY_SECS",
                "5",
            )?),
            http_timeout: Duration::from_secs(try_load(&lookup, "RSVP_HTTP_TIMEOUT_SECS", "10")?),
            max_guests: try_load(&lookup, "RSVP_MAX_GUESTS", "5")?,
        };
        if config.max_guests == 0 {
            return Err(ConfigError::Invalid {
                key: "RSVP_MAX_GUESTS",
                reason: "must be at least 1".into(),
            });
        }
        Ok(config)
    }

    /// True when either Google endpoint is missing.
    pub fn is_offline(&self) -> bool {
        self.form_url.is_none() || self.sheet_url.is_none()
    }

    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            confirmation_delay: self.refresh_delay,
            confirmation_attempts: self.refresh_attempts,
            success_display: self.success_display,
        }
    }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    let value = lookup(key).filter(|value| !value.trim().is_empty());
    if value.is_none() {
        warn!("Environment variable {key} not found");
    }
    value
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}
