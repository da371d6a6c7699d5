use crate::error::DomainError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// IANA zone name used for calendar-day arithmetic.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_currency_minor_units")]
    pub currency_minor_units: u32,
    /// `case_insensitive` or `fold_diacritics`.
    #[serde(default = "default_text_match")]
    pub text_match: String,
    /// Zero disables the due-soon aging state.
    #[serde(default)]
    pub due_soon_days: u32,
    #[serde(default = "default_maintenance_lookahead_days")]
    pub maintenance_lookahead_days: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_currency_minor_units() -> u32 {
    2
}

fn default_text_match() -> String {
    "case_insensitive".to_string()
}

fn default_maintenance_lookahead_days() -> u32 {
    7
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            currency_minor_units: default_currency_minor_units(),
            text_match: default_text_match(),
            due_soon_days: 0,
            maintenance_lookahead_days: default_maintenance_lookahead_days(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
