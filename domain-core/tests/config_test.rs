//! Configuration loading tests for domain-core.
//!
//! These mutate process environment variables, so they run serially.

use domain_core::config::Config;
use domain_core::{DomainContext, DomainError};
use serial_test::serial;

const KEYS: [&str; 4] = [
    "APP__TIMEZONE",
    "APP__CURRENCY_MINOR_UNITS",
    "APP__TEXT_MATCH",
    "APP__DUE_SOON_DAYS",
];

fn clear_env() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn defaults_apply_without_environment() {
    clear_env();
    let config = Config::load().expect("config loads");
    assert_eq!(config.timezone, "UTC");
    assert_eq!(config.currency_minor_units, 2);
    assert_eq!(config.text_match, "case_insensitive");
    assert_eq!(config.due_soon_days, 0);
    assert_eq!(config.maintenance_lookahead_days, 7);
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    clear_env();
    unsafe {
        std::env::set_var("APP__TIMEZONE", "Europe/Sarajevo");
        std::env::set_var("APP__CURRENCY_MINOR_UNITS", "3");
        std::env::set_var("APP__TEXT_MATCH", "fold_diacritics");
        std::env::set_var("APP__DUE_SOON_DAYS", "5");
    }

    let context = DomainContext::from_env().expect("context builds");
    clear_env();

    assert_eq!(context.calendar.timezone().name(), "Europe/Sarajevo");
    assert_eq!(context.money.minor_units(), 3);
    assert_eq!(context.text_match, domain_core::query::TextMatch::FoldDiacritics);
    assert_eq!(context.due_soon_days, 5);
}

#[test]
#[serial]
fn unknown_timezone_is_config_error() {
    clear_env();
    unsafe { std::env::set_var("APP__TIMEZONE", "Atlantis/Capital") };

    let result = DomainContext::from_env();
    clear_env();

    assert!(matches!(result, Err(DomainError::ConfigError(_))));
}
