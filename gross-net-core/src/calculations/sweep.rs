//! Evaluation of a whole range of monthly gross salaries.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::delta::{DeltaError, compute_delta};
use crate::calculations::payroll::{PayrollCalculator, PayrollError};
use crate::models::{DeltaInfo, PayrollConfig, PayrollConfigError, SweepConfig};

/// Errors that abort a sweep.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SweepError {
    #[error("sweep increment must be positive, got {0}")]
    InvalidIncrement(Decimal),

    #[error("sweep range is empty: start {start} is not below end {end}")]
    EmptyRange { start: Decimal, end: Decimal },

    #[error("invalid payroll configuration: {0}")]
    Config(#[from] PayrollConfigError),

    #[error("payroll calculation failed: {0}")]
    Payroll(#[from] PayrollError),

    #[error("delta calculation failed: {0}")]
    Delta(#[from] DeltaError),
}

impl SweepConfig {
    /// Checks that the sweep has a positive increment and a non-empty range.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.increment <= Decimal::ZERO {
            return Err(SweepError::InvalidIncrement(self.increment));
        }
        if self.start >= self.end {
            return Err(SweepError::EmptyRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Evaluates every gross value of `sweep` against its predecessor.
///
/// For each monthly gross `g` the breakdowns at `g` and `g - increment` are
/// computed and compared. The predecessor is always recomputed, so the first
/// value of the sweep needs a predecessor at or above the low-income floor
/// as well.
///
/// # Errors
///
/// Returns the first [`SweepError`] encountered; no partial result is kept.
///
/// # Example
///
/// ```
/// use gross_net_core::{PayrollConfig, SweepConfig, evaluate_sweep};
///
/// let infos = evaluate_sweep(&SweepConfig::default(), &PayrollConfig::default()).unwrap();
/// assert_eq!(infos.len(), 90);
/// ```
pub fn evaluate_sweep(
    sweep: &SweepConfig,
    config: &PayrollConfig,
) -> Result<Vec<DeltaInfo>, SweepError> {
    config.validate()?;
    sweep.validate()?;

    let calculator = PayrollCalculator::new(config);

    sweep
        .gross_values()
        .map(|monthly_gross| -> Result<DeltaInfo, SweepError> {
            let current = calculator.calculate(monthly_gross)?;
            let previous = calculator.calculate(monthly_gross - sweep.increment)?;
            let info = compute_delta(&current, &previous)?;

            debug!(
                %monthly_gross,
                yearly_net = %info.breakdown.yearly_net,
                percent = %info.percent.round_dp(2),
                "evaluated gross step"
            );

            Ok(info)
        })
        .collect()
}
