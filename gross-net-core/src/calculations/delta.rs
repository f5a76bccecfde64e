//! Marginal comparison of two neighbouring payroll breakdowns.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::{DeltaInfo, PayrollBreakdown};

/// Errors that can occur when comparing two breakdowns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeltaError {
    #[error("yearly gross is zero, net percentage is undefined")]
    ZeroGross,

    /// The previous breakdown must belong to a strictly smaller monthly gross.
    #[error("previous monthly gross {previous} is not below current monthly gross {current}")]
    NonIncreasingGross { previous: Decimal, current: Decimal },
}

/// Compares `current` with the breakdown of the next smaller gross step.
///
/// All increment percentages divide a net delta by a gross delta. The
/// special payment delta is divided by the *monthly* gross delta, since one
/// special payment grows with one monthly gross.
///
/// # Errors
///
/// - [`DeltaError::ZeroGross`] if `current` has no yearly gross.
/// - [`DeltaError::NonIncreasingGross`] if `previous` does not have a smaller
///   monthly gross than `current`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gross_net_core::{PayrollConfig, compute_delta, compute_payroll};
///
/// let config = PayrollConfig::default();
/// let current = compute_payroll(dec!(2000), &config).unwrap();
/// let previous = compute_payroll(dec!(1900), &config).unwrap();
///
/// let delta = compute_delta(&current, &previous).unwrap();
/// assert!(delta.yearly_increment_percent < delta.percent);
/// ```
pub fn compute_delta(
    current: &PayrollBreakdown,
    previous: &PayrollBreakdown,
) -> Result<DeltaInfo, DeltaError> {
    if current.yearly_gross.is_zero() {
        return Err(DeltaError::ZeroGross);
    }

    let monthly_gross_delta = current.monthly_gross - previous.monthly_gross;
    let yearly_gross_delta = current.yearly_gross - previous.yearly_gross;
    if monthly_gross_delta <= Decimal::ZERO || yearly_gross_delta <= Decimal::ZERO {
        return Err(DeltaError::NonIncreasingGross {
            previous: previous.monthly_gross,
            current: current.monthly_gross,
        });
    }

    let percent = current.yearly_net * dec!(100) / current.yearly_gross;

    let yearly_net_delta = current.yearly_net - previous.yearly_net;
    let yearly_increment_percent = yearly_net_delta * dec!(100) / yearly_gross_delta;

    let monthly_net_delta = current.monthly_net - previous.monthly_net;
    let monthly_increment_percent = monthly_net_delta * dec!(100) / monthly_gross_delta;

    let special_net_delta = current.special_net - previous.special_net;
    let special_increment_percent = special_net_delta * dec!(100) / monthly_gross_delta;

    Ok(DeltaInfo {
        breakdown: current.clone(),
        percent,
        yearly_increment_percent,
        monthly_increment_percent,
        special_increment_percent,
    })
}
