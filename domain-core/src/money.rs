//! Currency-agnostic rounding of monetary amounts.

use crate::error::{DomainError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounds amounts to a currency's minor unit using banker's rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRounding {
    minor_units: u32,
}

impl Default for MoneyRounding {
    fn default() -> Self {
        Self { minor_units: 2 }
    }
}

impl MoneyRounding {
    pub const fn new(minor_units: u32) -> Self {
        Self { minor_units }
    }

    pub fn minor_units(&self) -> u32 {
        self.minor_units
    }

    /// Round half to even at the minor unit.
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.minor_units, RoundingStrategy::MidpointNearestEven)
    }
}

/// `a + b`, or `InvalidArgument` naming `what` when the sum leaves the decimal range.
pub fn checked_add(a: Decimal, b: Decimal, what: &str) -> Result<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| DomainError::invalid(format!("{} is out of range", what)))
}

/// Sum of `values` without overflow.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>, what: &str) -> Result<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| checked_add(acc, value, what))
}
