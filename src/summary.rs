use crate::{
    aggregate::{self, CategoryTotal, UNCATEGORIZED},
    filter,
    frequency::{self, Multipliers},
    record::{Budget, EntryType, Transaction},
    variance::Variance,
};
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

/// Budget-vs-actual progress for one category and type.
///
/// `variance` is `None` when the category has actual spending but no budget
/// row for the month. That is deliberately distinct from an under-budget
/// variance: with no baseline there is nothing to compare against, and the
/// presentation layer renders such rows without a progress bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub category: String,
    pub kind: EntryType,
    pub actual: Decimal,
    pub variance: Option<Variance>,
}

/// Normalized monthly totals, category breakdowns and budget progress for a
/// single calendar month.
///
/// Built by [`MonthlySummary::build`] and consumed by presentation code
/// (charts, progress bars, lists). Recomputed in full on every call; the
/// engine keeps no state between invocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// 1-based target month (January = 1).
    pub month: u32,
    pub year: i32,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `max(total_income - total_expense, 0)`; never negative.
    pub leftover: Decimal,
    pub income_by_category: Vec<CategoryTotal>,
    pub expense_by_category: Vec<CategoryTotal>,
    pub budget_progress: Vec<BudgetProgress>,
}

impl MonthlySummary {
    /// Computes the summary for one month from a consistent snapshot of
    /// records.
    ///
    /// The pipeline runs filter by month -> filter by type -> normalize each
    /// amount through `multipliers` -> aggregate by category -> pair with
    /// matching budgets and compute variance. Budget amounts pass through the
    /// same multiplier table as transaction amounts, so a weekly budget of
    /// 100 is compared as 400/month. Deterministic given identical inputs.
    pub fn build(
        transactions: &[Transaction],
        budgets: &[Budget],
        multipliers: &Multipliers,
        month: u32,
        year: i32,
    ) -> Self {
        let in_month = filter::by_month(transactions, month, year);
        debug!(
            "summarising {}/{}: {} of {} transactions in window",
            month,
            year,
            in_month.len(),
            transactions.len()
        );

        let month_budgets: Vec<&Budget> =
            budgets.iter().filter(|b| b.is_for(month, year)).collect();

        let (total_income, income_by_category) =
            normalize_and_group(&in_month, EntryType::Income, multipliers);
        let (total_expense, expense_by_category) =
            normalize_and_group(&in_month, EntryType::Expense, multipliers);

        let mut budget_progress = progress(
            EntryType::Income,
            &income_by_category,
            &month_budgets,
            multipliers,
        );
        budget_progress.extend(progress(
            EntryType::Expense,
            &expense_by_category,
            &month_budgets,
            multipliers,
        ));

        let leftover = Decimal::max(total_income - total_expense, Decimal::ZERO);

        MonthlySummary {
            month,
            year,
            total_income,
            total_expense,
            leftover,
            income_by_category,
            expense_by_category,
            budget_progress,
        }
    }
}

// Runs one type partition through normalization and category grouping,
// returning the normalized total alongside the breakdown.
fn normalize_and_group(
    in_month: &[&Transaction],
    kind: EntryType,
    multipliers: &Multipliers,
) -> (Decimal, Vec<CategoryTotal>) {
    let normalized: Vec<(&Transaction, Decimal)> =
        filter::by_type(in_month.iter().copied(), kind)
            .into_iter()
            .map(|t| (t, frequency::normalize(t.amount, &t.frequency, multipliers)))
            .collect();

    let total = normalized.iter().map(|(_, amount)| *amount).sum();

    (total, aggregate::by_category(normalized))
}

// Pairs aggregated actuals with the month's budgets for one type. Actual
// categories come first, in breakdown order; budgeted categories with no
// spending follow, in budget order, each with a zero actual and a full
// "under" variance.
fn progress(
    kind: EntryType,
    actuals: &[CategoryTotal],
    budgets: &[&Budget],
    multipliers: &Multipliers,
) -> Vec<BudgetProgress> {
    // Sum budgets per category up front; a month may hold several rows for
    // the same category.
    let mut planned: Vec<(String, Decimal)> = Vec::new();
    for budget in filter::by_type(budgets.iter().copied(), kind) {
        let name = budget
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(UNCATEGORIZED);
        let amount = frequency::normalize(budget.amount, &budget.frequency, multipliers);

        match planned.iter_mut().find(|(n, _)| n == name) {
            Some((_, total)) => *total += amount,
            None => planned.push((name.to_owned(), amount)),
        }
    }

    let mut progress = Vec::new();

    for actual in actuals {
        let matched = planned
            .iter()
            .position(|(name, _)| *name == actual.category);
        let variance = matched.map(|pos| {
            let (_, budgeted) = planned.remove(pos);
            Variance::compute(actual.total, budgeted)
        });

        progress.push(BudgetProgress {
            category: actual.category.clone(),
            kind,
            actual: actual.total,
            variance,
        });
    }

    // Whatever remains was budgeted but never spent against.
    for (category, budgeted) in planned {
        progress.push(BudgetProgress {
            category,
            kind,
            actual: Decimal::ZERO,
            variance: Some(Variance::compute(Decimal::ZERO, budgeted)),
        });
    }

    progress
}
