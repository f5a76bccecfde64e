//! Marginal bracket income tax.

use rust_decimal::Decimal;

use crate::models::BracketTable;

/// Computes the tax owed on `basis` under a progressive bracket table.
///
/// Each bracket taxes only the slice of `basis` that falls between the
/// previous bracket's upper bound and its own, at its own marginal rate.
/// A basis of zero or below owes nothing.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gross_net_core::{BracketTable, compute_tax};
///
/// let brackets = BracketTable::from_pairs(&[
///     (dec!(11000), dec!(0.00)),
///     (dec!(18000), dec!(0.20)),
///     (dec!(999999999), dec!(0.35)),
/// ]);
///
/// // 7000 taxed at 20% plus 2000 taxed at 35%
/// assert_eq!(compute_tax(dec!(20000), &brackets), dec!(2100));
/// ```
pub fn compute_tax(
    basis: Decimal,
    brackets: &BracketTable,
) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut bracket_start = Decimal::ZERO;

    for bracket in brackets {
        if basis < bracket_start {
            break;
        }

        let bracket_range = bracket.upper_bound - bracket_start;
        let value_in_bracket = bracket_range.min(basis - bracket_start);

        tax += value_in_bracket * bracket.marginal_rate;
        bracket_start = bracket.upper_bound;
    }

    tax
}
