use log::trace;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The number of occurrences per calendar month for each recurring frequency.
///
/// This table is the single source of truth for converting a recurring amount
/// into its monthly equivalent. It is deliberately configurable: the stock
/// defaults treat a weekly amount as occurring 4 times a month and a biweekly
/// amount as twice a month, but users may persist their own counts in
/// settings, so every normalization must go through a `Multipliers` value
/// passed in by the caller rather than a hard-coded constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Multipliers {
    pub weekly: u32,
    pub biweekly: u32,
    pub monthly: u32,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum MultiplierError {
    #[error("frequency multipliers must be positive occurrence counts")]
    NonPositive,
}

impl Default for Multipliers {
    fn default() -> Self {
        Multipliers {
            weekly: 4,
            biweekly: 2,
            monthly: 1,
        }
    }
}

impl Multipliers {
    /// Builds a custom multiplier table. Each count must be at least 1; a
    /// zero multiplier would silently erase amounts during normalization.
    pub fn new(weekly: u32, biweekly: u32, monthly: u32) -> Result<Self, MultiplierError> {
        if weekly == 0 || biweekly == 0 || monthly == 0 {
            return Err(MultiplierError::NonPositive);
        }

        Ok(Multipliers {
            weekly,
            biweekly,
            monthly,
        })
    }

    /// Looks up the monthly occurrence count for a raw frequency tag.
    ///
    /// The match is exact: the recognised tags are `"weekly"`, `"biweekly"`
    /// and `"monthly"`, and anything else falls back to 1. That includes
    /// `"one-time"`, case variants such as `"Weekly"`, the `"1st-and-15th"`
    /// option that budgets may carry, and outright garbage. The fallback is
    /// documented behavior rather than an error: totals downstream depend on
    /// unrecognised tags being treated as non-recurring.
    pub fn for_tag(&self, tag: &str) -> u32 {
        match tag {
            "weekly" => self.weekly,
            "biweekly" => self.biweekly,
            "monthly" => self.monthly,
            _ => 1,
        }
    }
}

/// Converts a recurring amount into its equivalent monthly amount.
///
/// No rounding is applied; rounding is a presentation concern. This is a pure
/// function and safe to call from any thread.
pub fn normalize(amount: Decimal, frequency: &str, multipliers: &Multipliers) -> Decimal {
    let multiplier = multipliers.for_tag(frequency);
    trace!("normalize {} x {} ({})", amount, multiplier, frequency);

    amount * Decimal::from(multiplier)
}
