use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BracketTable, BracketTableError};

/// Errors that can occur when validating a [`PayrollConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollConfigError {
    #[error("regular social security rate must be between 0 and 1, got {0}")]
    InvalidNormalSvRate(Decimal),

    #[error("special payment social security rate must be between 0 and 1, got {0}")]
    InvalidSpecialSvRate(Decimal),

    #[error("social security basis cap must be positive, got {0}")]
    InvalidSvBasisCap(Decimal),

    #[error("low-income floor must be non-negative, got {0}")]
    InvalidLowIncomeFloor(Decimal),

    #[error("payment counts must be positive, got {regular} regular and {special} special")]
    InvalidPaymentCount { regular: u32, special: u32 },

    #[error("regular tax brackets: {0}")]
    NormalBrackets(#[source] BracketTableError),

    #[error("special payment tax brackets: {0}")]
    SpecialBrackets(#[source] BracketTableError),
}

/// Rates, caps and bracket tables used to turn a monthly gross salary into a
/// net salary.
///
/// The salary model has `regular_payments` monthly salaries plus
/// `special_payments` bonus installments per year, each installment equal to
/// one monthly gross. Regular and special income are taxed with separate
/// bracket tables and carry separate social security rates, both capped at
/// the same `sv_basis_cap`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use gross_net_core::PayrollConfig;
///
/// let config = PayrollConfig::default();
///
/// assert_eq!(config.sv_rate_normal, dec!(0.1812));
/// assert_eq!(config.sv_basis_cap, dec!(5500));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Yearly tax table applied to the twelve regular salaries.
    pub normal_brackets: BracketTable,

    /// Yearly tax table applied to the special payments.
    pub special_brackets: BracketTable,

    /// Social security share withheld from a regular salary.
    pub sv_rate_normal: Decimal,

    /// Social security share withheld from a special payment.
    pub sv_rate_special: Decimal,

    /// Maximum monthly gross subject to social security.
    pub sv_basis_cap: Decimal,

    /// Smallest monthly gross the calculator handles. The low-income
    /// exemption below this amount is not modelled.
    pub low_income_floor: Decimal,

    pub regular_payments: u32,
    pub special_payments: u32,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            normal_brackets: BracketTable::from_pairs(&[
                (dec!(11000), dec!(0.00)),
                (dec!(18000), dec!(0.20)),
                (dec!(31000), dec!(0.35)),
                (dec!(60000), dec!(0.42)),
                (dec!(90000), dec!(0.48)),
                (dec!(1000000), dec!(0.50)),
                (dec!(999999999), dec!(0.55)),
            ]),
            special_brackets: BracketTable::from_pairs(&[
                (dec!(620), dec!(0.00)),
                (dec!(25000), dec!(0.06)),
                (dec!(50000), dec!(0.27)),
                (dec!(83333), dec!(0.3575)),
                (dec!(999999999), dec!(0.55)),
            ]),
            sv_rate_normal: dec!(0.1812),
            sv_rate_special: dec!(0.1712),
            sv_basis_cap: dec!(5500),
            low_income_floor: dec!(500),
            regular_payments: 12,
            special_payments: 2,
        }
    }
}

impl PayrollConfig {
    /// Validates rates, caps and both bracket tables.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollConfigError`] if:
    /// - either social security rate is not in [0, 1]
    /// - `sv_basis_cap` is not positive
    /// - `low_income_floor` is negative
    /// - either payment count is zero
    /// - either bracket table fails [`BracketTable::validate`]
    pub fn validate(&self) -> Result<(), PayrollConfigError> {
        if self.sv_rate_normal < Decimal::ZERO || self.sv_rate_normal > Decimal::ONE {
            return Err(PayrollConfigError::InvalidNormalSvRate(self.sv_rate_normal));
        }
        if self.sv_rate_special < Decimal::ZERO || self.sv_rate_special > Decimal::ONE {
            return Err(PayrollConfigError::InvalidSpecialSvRate(
                self.sv_rate_special,
            ));
        }
        if self.sv_basis_cap <= Decimal::ZERO {
            return Err(PayrollConfigError::InvalidSvBasisCap(self.sv_basis_cap));
        }
        if self.low_income_floor < Decimal::ZERO {
            return Err(PayrollConfigError::InvalidLowIncomeFloor(
                self.low_income_floor,
            ));
        }
        if self.regular_payments == 0 || self.special_payments == 0 {
            return Err(PayrollConfigError::InvalidPaymentCount {
                regular: self.regular_payments,
                special: self.special_payments,
            });
        }
        self.normal_brackets
            .validate()
            .map_err(PayrollConfigError::NormalBrackets)?;
        self.special_brackets
            .validate()
            .map_err(PayrollConfigError::SpecialBrackets)?;
        Ok(())
    }
}
