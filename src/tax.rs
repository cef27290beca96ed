//! Federal tax estimation
//!
//! Pure progressive-bracket calculation over the 2024 single-filer
//! schedule. No I/O, no state; the HTTP layer feeds it aggregate totals
//! from the store.

use serde::Serialize;

/// 2024 standard deduction, single filer
pub const STANDARD_DEDUCTION: f64 = 14_600.0;

/// 2024 single-filer brackets as (upper bound, marginal rate)
///
/// Upper bounds are strictly increasing; the final bracket is unbounded.
const BRACKETS: [(f64, f64); 7] = [
    (11_600.0, 0.10),
    (47_150.0, 0.12),
    (100_525.0, 0.22),
    (191_950.0, 0.24),
    (243_725.0, 0.32),
    (609_350.0, 0.35),
    (f64::INFINITY, 0.37),
];

/// Aggregate view over all stored records, recomputed per request
#[derive(Debug, Clone, Serialize)]
pub struct TaxSummary {
    pub total_income: f64,
    pub estimated_tax: f64,
    pub paid_tax: f64,
    /// Estimated tax as a percentage of total income; 0 when there is no income
    pub effective_rate: f64,
}

/// Estimate federal tax owed on `total_income`.
///
/// Applies the standard deduction, then walks the brackets from the
/// bottom, taxing each slice at its marginal rate until the slice
/// containing the taxable income. Total over all real inputs: anything
/// at or below the deduction (including negative input) owes 0.
///
/// The result is rounded to cents, half away from zero (`f64::round`).
pub fn estimate_tax(total_income: f64) -> f64 {
    let taxable = (total_income - STANDARD_DEDUCTION).max(0.0);

    let mut tax = 0.0;
    let mut lower = 0.0;
    for (bound, rate) in BRACKETS {
        if taxable <= bound {
            tax += (taxable - lower) * rate;
            break;
        }
        tax += (bound - lower) * rate;
        lower = bound;
    }

    round_cents(tax)
}

/// Build the summary object from store aggregates.
pub fn summarize(total_income: f64, paid_tax: f64) -> TaxSummary {
    let estimated_tax = estimate_tax(total_income);
    let effective_rate = if total_income > 0.0 {
        estimated_tax / total_income * 100.0
    } else {
        0.0
    };

    TaxSummary {
        total_income,
        estimated_tax,
        paid_tax,
        effective_rate,
    }
}

/// Round to 2 decimal places, half away from zero.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_income_owes_zero() {
        assert_eq!(estimate_tax(0.0), 0.0);
    }

    #[test]
    fn income_at_standard_deduction_owes_zero() {
        assert_eq!(estimate_tax(STANDARD_DEDUCTION), 0.0);
    }

    #[test]
    fn negative_income_clamps_to_zero() {
        // Should not occur given the amount invariant, but the function
        // is total over all real inputs.
        assert_eq!(estimate_tax(-50_000.0), 0.0);
    }

    #[test]
    fn first_bracket_edge() {
        // Taxable exactly 11600: all of it at 10%
        assert_eq!(estimate_tax(14_600.0 + 11_600.0), 1_160.00);
    }

    #[test]
    fn second_bracket_edge() {
        // Taxable exactly 47150: 1160 + (47150 - 11600) * 0.12
        assert_eq!(estimate_tax(14_600.0 + 47_150.0), 5_426.00);
    }

    #[test]
    fn top_bracket_boundary() {
        // Taxable exactly 609350: every finite bracket filled
        // 1160 + 4266 + 11742.50 + 21942 + 16568 + 127968.75
        assert_eq!(estimate_tax(14_600.0 + 609_350.0), 183_647.25);
    }

    #[test]
    fn top_bracket_marginal_rate_is_37_percent() {
        // Each extra dollar above the top bound is taxed at 0.37
        let at_top = estimate_tax(14_600.0 + 609_350.0);
        let above_top = estimate_tax(14_600.0 + 609_350.0 + 100_000.0);
        assert!((above_top - at_top - 37_000.0).abs() < 0.01);
    }

    #[test]
    fn tax_is_monotone_in_income() {
        let mut prev = 0.0;
        let mut income = 0.0;
        while income <= 800_000.0 {
            let tax = estimate_tax(income);
            assert!(
                tax >= prev,
                "tax decreased: f({}) = {} < {}",
                income,
                tax,
                prev
            );
            prev = tax;
            income += 1_234.5;
        }
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // Midpoints chosen to be exactly representable in binary, where
        // half-away-from-zero and banker's rounding disagree: banker's
        // would give 2.12 for the first case.
        assert_eq!(round_cents(2.125), 2.13);
        assert_eq!(round_cents(2.375), 2.38);
    }

    #[test]
    fn summary_with_income() {
        let summary = summarize(60_000.0, 6_000.0);
        // Taxable 45400: 11600 * 0.10 + 33800 * 0.12
        assert_eq!(summary.estimated_tax, 5_216.00);
        assert_eq!(summary.total_income, 60_000.0);
        assert_eq!(summary.paid_tax, 6_000.0);
        assert!((summary.effective_rate - 5_216.0 / 60_000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn summary_with_no_income_has_zero_rate() {
        let summary = summarize(0.0, 0.0);
        assert_eq!(summary.estimated_tax, 0.0);
        assert_eq!(summary.effective_rate, 0.0);
    }
}
