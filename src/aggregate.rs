use crate::record::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;

/// The bucket name for records with no category.
///
/// Missing or blank category names are coalesced to this literal before
/// grouping, so callers never see an accidental "undefined" bucket leak into
/// a breakdown.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A per-category sum of normalized amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    /// Display color, taken from the first record in the bucket that carries
    /// one. Colors are assigned elsewhere; the engine only passes them along.
    pub color: Option<String>,
}

impl CategoryTotal {
    /// This bucket's share of a grand total, as a fraction. Zero when the
    /// grand total is zero, so an empty month never divides by zero.
    pub fn share(&self, grand_total: Decimal) -> Decimal {
        if grand_total > Decimal::ZERO {
            self.total / grand_total
        } else {
            Decimal::ZERO
        }
    }
}

/// Groups normalized amounts by category name.
///
/// The grouping key is the category name exactly as stored (case-sensitive);
/// blank or missing names fall into the [`UNCATEGORIZED`] bucket. Sums use
/// the normalized amount paired with each record, never the raw amount.
/// Buckets appear in first-occurrence order of the input, which keeps the
/// output deterministic without imposing a sort the caller may not want.
pub fn by_category<'a, I>(records: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = (&'a Transaction, Decimal)>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for (record, amount) in records {
        let name = record
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(UNCATEGORIZED);

        match totals.iter_mut().find(|t| t.category == name) {
            Some(bucket) => {
                bucket.total += amount;
                if bucket.color.is_none() {
                    bucket.color = record.color.clone();
                }
            }
            None => totals.push(CategoryTotal {
                category: name.to_owned(),
                total: amount,
                color: record.color.clone(),
            }),
        }
    }

    totals
}
