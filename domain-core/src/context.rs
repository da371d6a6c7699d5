//! Per-deployment settings threaded through every engine call.

use crate::calendar::Calendar;
use crate::config::Config;
use crate::error::DomainError;
use crate::money::MoneyRounding;
use crate::query::TextMatch;

/// Calendar, rounding and threshold settings shared by the engines.
///
/// A context holds no clock; callers pass `now` to each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainContext {
    pub calendar: Calendar,
    pub money: MoneyRounding,
    pub text_match: TextMatch,
    /// Days before the due date at which an unpaid invoice counts as due soon.
    /// Zero disables the state.
    pub due_soon_days: u32,
    pub maintenance_lookahead_days: u32,
}

impl Default for DomainContext {
    fn default() -> Self {
        Self {
            calendar: Calendar::utc(),
            money: MoneyRounding::default(),
            text_match: TextMatch::default(),
            due_soon_days: 0,
            maintenance_lookahead_days: 7,
        }
    }
}

impl TryFrom<&Config> for DomainContext {
    type Error = DomainError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        let text_match = config
            .text_match
            .parse::<TextMatch>()
            .map_err(|e| DomainError::ConfigError(anyhow::anyhow!(e)))?;

        Ok(Self {
            calendar: Calendar::from_name(&config.timezone)?,
            money: MoneyRounding::new(config.currency_minor_units),
            text_match,
            due_soon_days: config.due_soon_days,
            maintenance_lookahead_days: config.maintenance_lookahead_days,
        })
    }
}

impl DomainContext {
    /// Load [`Config`] from the environment and build a context from it.
    pub fn from_env() -> Result<Self, DomainError> {
        let config = Config::load()?;
        let context = Self::try_from(&config)?;
        tracing::debug!(
            timezone = %config.timezone,
            minor_units = config.currency_minor_units,
            text_match = context.text_match.as_str(),
            "Domain context loaded"
        );
        Ok(context)
    }
}
