//! Common utility functions for salary calculations.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to a whole number using banker's rounding.
///
/// Values exactly halfway between two integers go to the even neighbour, so
/// `362.5` becomes `362` while `363.5` becomes `364`. Every figure shown in
/// the generated reports goes through this function.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gross_net_core::calculations::common::round_to_whole;
///
/// assert_eq!(round_to_whole(dec!(362.4)), dec!(362));
/// assert_eq!(round_to_whole(dec!(362.5)), dec!(362));
/// assert_eq!(round_to_whole(dec!(363.5)), dec!(364));
/// assert_eq!(round_to_whole(dec!(-2.5)), dec!(-2));
/// ```
pub fn round_to_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Rounds to a whole number and converts to `i64` for display.
///
/// Saturates at the `i64` range, far beyond any salary this crate handles.
pub fn to_whole_number(value: Decimal) -> i64 {
    let rounded = round_to_whole(value);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
