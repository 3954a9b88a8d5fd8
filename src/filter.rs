use crate::record::{EntryType, Transaction, Typed};
use chrono::Datelike;

/// Selects the transactions whose occurrence date falls in the given
/// calendar month and year. `month` is 1-based (January = 1).
///
/// The match is plain calendar equality; there is no rollover or fiscal
/// period logic, so a record dated Jan 31 never appears in February's window.
/// Input order is preserved, which keeps "most recent" views correct when the
/// caller has pre-sorted by date descending.
pub fn by_month<'a, I>(records: I, month: u32, year: i32) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    records
        .into_iter()
        .filter(|t| t.date.month() == month && t.date.year() == year)
        .collect()
}

/// Selects the records matching the given income/expense type.
///
/// Type tags are compared case-insensitively. Records with an unknown or
/// missing tag match neither partition; they are dropped rather than raising
/// an error, as the presentation layer above must never crash on malformed
/// remote data. Input order is preserved.
pub fn by_type<'a, R, I>(records: I, kind: EntryType) -> Vec<&'a R>
where
    R: Typed + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter(|r| r.entry_type() == Some(kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn tx(id: &str, kind: &str, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            id,
            kind,
            dec!(10),
            None,
            "one-time",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn by_month_matches_calendar_window() {
        let records = vec![
            tx("a", "income", 2025, 5, 1),
            tx("b", "income", 2025, 4, 30),
            tx("c", "income", 2024, 5, 1),
            tx("d", "income", 2025, 5, 31),
        ];
        let filtered = by_month(&records, 5, 2025);
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn by_month_excludes_adjacent_months_on_boundary_days() {
        let records = vec![tx("jan", "income", 2025, 1, 31), tx("feb", "income", 2025, 2, 1)];

        let jan = by_month(&records, 1, 2025);
        assert_eq!(jan.len(), 1);
        assert_eq!(jan[0].id, "jan");

        let feb = by_month(&records, 2, 2025);
        assert_eq!(feb.len(), 1);
        assert_eq!(feb[0].id, "feb");
    }

    #[test]
    fn by_type_partitions_income_and_expense() {
        let records = vec![
            tx("a", "income", 2025, 5, 1),
            tx("b", "expense", 2025, 5, 2),
            tx("c", "Income", 2025, 5, 3),
        ];
        let income = by_type(&records, EntryType::Income);
        let ids: Vec<&str> = income.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn by_type_drops_unknown_tags_from_both_partitions() {
        let records = vec![tx("a", "transfer", 2025, 5, 1), tx("b", "", 2025, 5, 2)];
        assert!(by_type(&records, EntryType::Income).is_empty());
        assert!(by_type(&records, EntryType::Expense).is_empty());
    }

    #[test]
    fn filters_preserve_input_order() {
        let records = vec![
            tx("newest", "expense", 2025, 5, 30),
            tx("middle", "expense", 2025, 5, 15),
            tx("oldest", "expense", 2025, 5, 1),
        ];
        let filtered = by_type(by_month(&records, 5, 2025), EntryType::Expense);
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "middle", "oldest"]);
    }
}
