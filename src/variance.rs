use rust_decimal::Decimal;
use serde::Serialize;

/// Where an actual total sits relative to its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Under,
    Exact,
    Over,
}

/// Budget-vs-actual comparison for a single category and type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variance {
    pub actual: Decimal,
    pub budget: Decimal,
    /// `actual / budget`, or 0 when nothing was budgeted. A zero budget must
    /// not produce infinity or NaN; callers that need to distinguish "no
    /// budget set" do so before computing a variance at all.
    pub ratio: Decimal,
    pub status: BudgetStatus,
}

impl Variance {
    /// Compares an actual monthly total against a budgeted one.
    ///
    /// Status uses exact comparison against 1, with no epsilon tolerance:
    /// `Decimal` arithmetic is exact for the divisions involved, so 100/100
    /// is precisely 1.
    pub fn compute(actual: Decimal, budget: Decimal) -> Self {
        let ratio = if budget > Decimal::ZERO {
            actual / budget
        } else {
            Decimal::ZERO
        };

        let status = if ratio < Decimal::ONE {
            BudgetStatus::Under
        } else if ratio == Decimal::ONE {
            BudgetStatus::Exact
        } else {
            BudgetStatus::Over
        };

        Variance {
            actual,
            budget,
            ratio,
            status,
        }
    }

    /// How far past the budget the actual ran, as a fraction of the budget.
    /// Zero unless over. The ratio itself is never clamped at 1; presentation
    /// decides whether to cap the bar and render an overflow indicator.
    pub fn overflow(&self) -> Decimal {
        if self.ratio > Decimal::ONE {
            self.ratio - Decimal::ONE
        } else {
            Decimal::ZERO
        }
    }

    /// Widths for the two-segment progress bar, as `(remaining, spent)`.
    /// Only meaningful while at or under budget; once over, the bar is full
    /// and [`Variance::overflow`] carries the excess.
    pub fn segments(&self) -> (Decimal, Decimal) {
        if self.ratio <= Decimal::ONE {
            (Decimal::ONE - self.ratio, self.ratio)
        } else {
            (Decimal::ZERO, Decimal::ONE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn under_budget() {
        let v = Variance::compute(dec!(50), dec!(100));
        assert_eq!(v.ratio, dec!(0.5));
        assert_eq!(v.status, BudgetStatus::Under);
        assert_eq!(v.overflow(), Decimal::ZERO);
    }

    #[test]
    fn exactly_on_budget() {
        let v = Variance::compute(dec!(100), dec!(100));
        assert_eq!(v.ratio, Decimal::ONE);
        assert_eq!(v.status, BudgetStatus::Exact);
    }

    #[test]
    fn over_budget_reports_overflow() {
        let v = Variance::compute(dec!(150), dec!(100));
        assert_eq!(v.ratio, dec!(1.5));
        assert_eq!(v.status, BudgetStatus::Over);
        assert_eq!(v.overflow(), dec!(0.5));
    }

    #[test]
    fn zero_budget_yields_zero_ratio() {
        let v = Variance::compute(dec!(75), Decimal::ZERO);
        assert_eq!(v.ratio, Decimal::ZERO);
        assert_eq!(v.status, BudgetStatus::Under);

        let v = Variance::compute(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(v.ratio, Decimal::ZERO);
    }

    #[test]
    fn segments_split_at_ratio() {
        let v = Variance::compute(dec!(25), dec!(100));
        assert_eq!(v.segments(), (dec!(0.75), dec!(0.25)));

        let v = Variance::compute(dec!(100), dec!(100));
        assert_eq!(v.segments(), (Decimal::ZERO, Decimal::ONE));
    }

    #[test]
    fn segments_saturate_when_over() {
        let v = Variance::compute(dec!(130), dec!(100));
        assert_eq!(v.segments(), (Decimal::ZERO, Decimal::ONE));
        assert_eq!(v.overflow(), dec!(0.3));
    }
}
