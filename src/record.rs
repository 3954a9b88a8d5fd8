use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Whether a record represents money coming in or going out.
///
/// Aggregation never mixes the two: every total, breakdown and variance is
/// computed for exactly one `EntryType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("unrecognised record type '{0}'")]
pub struct EntryTypeError(String);

impl FromStr for EntryType {
    type Err = EntryTypeError;

    // The wire sends the type as a free-form string, so be lenient on case.
    // Anything else is an error; callers filtering by type drop such records
    // rather than failing.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag.eq_ignore_ascii_case("income") {
            Ok(EntryType::Income)
        } else if tag.eq_ignore_ascii_case("expense") {
            Ok(EntryType::Expense)
        } else {
            Err(EntryTypeError(tag.to_owned()))
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryType::Income => write!(f, "income"),
            EntryType::Expense => write!(f, "expense"),
        }
    }
}

/// A record carrying a raw income/expense type tag.
///
/// Implemented by both transactions and budgets so the type filter can
/// partition either collection.
pub trait Typed {
    fn type_tag(&self) -> &str;

    /// The parsed type, or `None` for unknown/missing tags. Records without a
    /// recognisable type belong to neither partition.
    fn entry_type(&self) -> Option<EntryType> {
        self.type_tag().parse().ok()
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum RecordError {
    #[error("amounts must not be negative")]
    NegativeAmount,
    #[error("due day {0} is outside the calendar range 1-31")]
    DueDayOutOfRange(u32),
}

/// A single recorded income or expense.
///
/// Transactions arrive from the data store already deserialized; the engine
/// treats them as immutable and derives normalized values from them without
/// ever mutating the source record. The `kind` and `frequency` fields keep
/// their raw wire spelling so that the documented fallbacks for unknown tags
/// stay observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    #[serde(rename = "category_name")]
    pub category: Option<String>,
    pub color: Option<String>,
    pub frequency: String,
    pub date: NaiveDate,
    pub due_day: Option<u32>,
}

impl Transaction {
    /// Builds a transaction, validating the fields the engine relies on:
    /// amounts must be non-negative and a due day, if present, must be a
    /// calendar day. A due day is only meaningful for monthly expenses, but
    /// the range check applies regardless.
    pub fn new<S: Into<String>>(
        id: S,
        kind: S,
        amount: Decimal,
        category: Option<String>,
        frequency: S,
        date: NaiveDate,
        due_day: Option<u32>,
    ) -> Result<Self, RecordError> {
        if amount < Decimal::ZERO {
            return Err(RecordError::NegativeAmount);
        }
        if let Some(day) = due_day {
            if day < 1 || day > 31 {
                return Err(RecordError::DueDayOutOfRange(day));
            }
        }

        Ok(Transaction {
            id: id.into(),
            kind: kind.into(),
            amount,
            category,
            color: None,
            frequency: frequency.into(),
            date,
            due_day,
        })
    }
}

impl Typed for Transaction {
    fn type_tag(&self) -> &str {
        &self.kind
    }
}

/// A planned figure for one calendar month.
///
/// Budgets do not roll over; a new row is created per target month. The
/// `month` field is 1-based (January = 1), matching `chrono`'s convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    pub frequency: String,
    #[serde(rename = "category_name")]
    pub category: Option<String>,
    pub month: u32,
    pub year: i32,
}

impl Budget {
    /// Whether this budget targets the given 1-based month and year.
    pub fn is_for(&self, month: u32, year: i32) -> bool {
        self.month == month && self.year == year
    }
}

impl Typed for Budget {
    fn type_tag(&self) -> &str {
        &self.kind
    }
}
