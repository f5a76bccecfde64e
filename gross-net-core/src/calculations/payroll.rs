//! Gross-to-net payroll calculation.
//!
//! A year consists of twelve regular monthly salaries plus two special
//! payments, each special payment equal to one monthly gross. Regular and
//! special income are handled separately:
//!
//! | Step | Regular salaries | Special payments |
//! |------|------------------|------------------|
//! | Social security | `min(gross, cap) × sv_rate_normal` | `min(gross, cap) × sv_rate_special` |
//! | Tax basis | `gross × 12 − yearly SV` | `gross × 2 − yearly special SV` |
//! | Tax | normal bracket table | special bracket table |
//! | Net | `(gross × 12 − SV − tax) / 12` | `(gross × 2 − SV − tax) / 2` |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use gross_net_core::{PayrollCalculator, PayrollConfig};
//!
//! let config = PayrollConfig::default();
//! let calculator = PayrollCalculator::new(&config);
//! let breakdown = calculator.calculate(dec!(2000)).unwrap();
//!
//! assert_eq!(breakdown.yearly_gross, dec!(28000));
//! assert_eq!(breakdown.monthly_sv, dec!(362.4));
//! assert_eq!(breakdown.special_sv, dec!(342.4));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::tax::compute_tax;
use crate::models::{PayrollBreakdown, PayrollConfig, PayrollConfigError};

/// Errors that can occur during payroll calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollError {
    /// Salaries below the low-income floor fall under an exemption that is
    /// not modelled.
    #[error(
        "monthly gross {monthly_gross} is below the low-income floor {floor}: low-income exemption not implemented"
    )]
    BelowLowIncomeFloor {
        monthly_gross: Decimal,
        floor: Decimal,
    },

    #[error("invalid payroll configuration: {0}")]
    Config(#[from] PayrollConfigError),
}

/// Calculator turning a monthly gross salary into a [`PayrollBreakdown`].
#[derive(Debug, Clone)]
pub struct PayrollCalculator<'a> {
    config: &'a PayrollConfig,
}

impl<'a> PayrollCalculator<'a> {
    pub fn new(config: &'a PayrollConfig) -> Self {
        Self { config }
    }

    /// Calculates the full breakdown for one monthly gross salary.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::Config`] if the configuration fails
    ///   [`PayrollConfig::validate`].
    /// - [`PayrollError::BelowLowIncomeFloor`] if `monthly_gross` is below the
    ///   configured low-income floor.
    pub fn calculate(
        &self,
        monthly_gross: Decimal,
    ) -> Result<PayrollBreakdown, PayrollError> {
        self.config.validate()?;
        if monthly_gross < self.config.low_income_floor {
            return Err(PayrollError::BelowLowIncomeFloor {
                monthly_gross,
                floor: self.config.low_income_floor,
            });
        }

        let regular = Decimal::from(self.config.regular_payments);
        let special = Decimal::from(self.config.special_payments);

        let yearly_gross = monthly_gross * (regular + special);

        let monthly_sv = self.sv_basis(monthly_gross) * self.config.sv_rate_normal;
        let yearly_sv = monthly_sv * regular;

        let special_sv = self.sv_basis(monthly_gross) * self.config.sv_rate_special;
        let yearly_special_sv = special_sv * special;

        let regular_gross = monthly_gross * regular;
        let yearly_tax = compute_tax(regular_gross - yearly_sv, &self.config.normal_brackets);
        let monthly_tax = yearly_tax / regular;
        let monthly_net = (regular_gross - yearly_sv - yearly_tax) / regular;

        let special_gross = monthly_gross * special;
        let yearly_special_tax = compute_tax(
            special_gross - yearly_special_sv,
            &self.config.special_brackets,
        );
        let special_tax = yearly_special_tax / special;
        let special_net = (special_gross - yearly_special_sv - yearly_special_tax) / special;

        let yearly_net =
            yearly_gross - yearly_sv - yearly_special_sv - yearly_tax - yearly_special_tax;

        Ok(PayrollBreakdown {
            yearly_gross,
            yearly_net,
            monthly_gross,
            monthly_net,
            special_net,
            monthly_sv,
            special_sv,
            monthly_tax,
            special_tax,
        })
    }

    /// Part of the monthly gross subject to social security.
    fn sv_basis(
        &self,
        monthly_gross: Decimal,
    ) -> Decimal {
        monthly_gross.min(self.config.sv_basis_cap)
    }
}

/// Calculates the [`PayrollBreakdown`] for `monthly_gross` under `config`.
pub fn compute_payroll(
    monthly_gross: Decimal,
    config: &PayrollConfig,
) -> Result<PayrollBreakdown, PayrollError> {
    PayrollCalculator::new(config).calculate(monthly_gross)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn calculate(monthly_gross: Decimal) -> Result<PayrollBreakdown, PayrollError> {
        compute_payroll(monthly_gross, &PayrollConfig::default())
    }

    // =========================================================================
    // golden values at 2000 per month
    // =========================================================================

    #[test]
    fn social_security_at_2000() {
        let breakdown = calculate(dec!(2000)).unwrap();

        assert_eq!(breakdown.monthly_sv, dec!(362.4));
        assert_eq!(breakdown.special_sv, dec!(342.4));
    }

    #[test]
    fn exact_amounts_at_2000() {
        let breakdown = calculate(dec!(2000)).unwrap();

        // regular basis 24000 - 4348.8 = 19651.2
        // tax 7000 * 0.20 + 1651.2 * 0.35
        let yearly_tax = dec!(1400) + dec!(577.92);
        // special basis 4000 - 684.8 = 3315.2, tax 2695.2 * 0.06
        let yearly_special_tax = dec!(161.712);

        assert_eq!(breakdown.yearly_gross, dec!(28000));
        assert_eq!(breakdown.monthly_gross, dec!(2000));
        assert_eq!(
            breakdown.yearly_net,
            dec!(28000) - dec!(4348.8) - dec!(684.8) - yearly_tax - yearly_special_tax
        );
        assert_eq!(breakdown.yearly_net, dec!(20826.768));
        assert_eq!(breakdown.special_tax, dec!(80.856));
        assert_eq!(breakdown.special_net, dec!(1576.744));
    }

    #[test]
    fn repeating_fractions_at_2000() {
        let breakdown = calculate(dec!(2000)).unwrap();

        assert_eq!(
            breakdown.monthly_tax.round_dp(20),
            (dec!(1977.92) / dec!(12)).round_dp(20)
        );
        assert_eq!(
            breakdown.monthly_net.round_dp(20),
            ((dec!(24000) - dec!(4348.8) - dec!(1977.92)) / dec!(12)).round_dp(20)
        );
    }

    #[test]
    fn yearly_net_matches_components() {
        let breakdown = calculate(dec!(4300)).unwrap();
        let from_components = breakdown.monthly_net * dec!(12) + breakdown.special_net * dec!(2);

        assert_eq!(
            breakdown.yearly_net.round_dp(10),
            from_components.round_dp(10)
        );
    }

    // =========================================================================
    // social security cap
    // =========================================================================

    #[test]
    fn social_security_capped_above_basis_cap() {
        let at_cap = calculate(dec!(5500)).unwrap();
        let above_cap = calculate(dec!(9000)).unwrap();

        assert_eq!(at_cap.monthly_sv, dec!(996.6));
        assert_eq!(above_cap.monthly_sv, at_cap.monthly_sv);
        assert_eq!(above_cap.special_sv, at_cap.special_sv);
    }

    // =========================================================================
    // low-income floor
    // =========================================================================

    #[test]
    fn floor_value_is_accepted() {
        let breakdown = calculate(dec!(500)).unwrap();

        assert_eq!(breakdown.yearly_gross, dec!(7000));
        assert_eq!(breakdown.monthly_tax, Decimal::ZERO);
        // special basis 1000 - 171.2 = 828.8 exceeds the 620 allowance
        assert_eq!(breakdown.special_tax, dec!(6.264));
    }

    #[test]
    fn below_floor_is_rejected() {
        assert_eq!(
            calculate(dec!(499)),
            Err(PayrollError::BelowLowIncomeFloor {
                monthly_gross: dec!(499),
                floor: dec!(500),
            })
        );
    }

    #[test]
    fn negative_gross_is_rejected() {
        assert!(matches!(
            calculate(dec!(-100)),
            Err(PayrollError::BelowLowIncomeFloor { .. })
        ));
    }

    #[test]
    fn custom_floor_is_honoured() {
        let config = PayrollConfig {
            low_income_floor: dec!(1000),
            ..PayrollConfig::default()
        };
        let calculator = PayrollCalculator::new(&config);

        assert!(calculator.calculate(dec!(999.99)).is_err());
        assert!(calculator.calculate(dec!(1000)).is_ok());
    }

    // =========================================================================
    // configuration
    // =========================================================================

    #[test]
    fn zero_special_payments_are_rejected() {
        let config = PayrollConfig {
            special_payments: 0,
            ..PayrollConfig::default()
        };

        assert_eq!(
            compute_payroll(dec!(2000), &config),
            Err(PayrollError::Config(PayrollConfigError::InvalidPaymentCount {
                regular: 12,
                special: 0,
            }))
        );
    }

    #[test]
    fn zero_regular_payments_are_rejected() {
        let config = PayrollConfig {
            regular_payments: 0,
            ..PayrollConfig::default()
        };

        assert!(matches!(
            compute_payroll(dec!(2000), &config),
            Err(PayrollError::Config(PayrollConfigError::InvalidPaymentCount { .. }))
        ));
    }

    #[test]
    fn net_never_exceeds_gross() {
        for gross in [500, 1000, 2500, 5500, 8000, 25000] {
            let breakdown = calculate(Decimal::from(gross)).unwrap();

            assert!(breakdown.yearly_net < breakdown.yearly_gross);
            assert!(breakdown.monthly_net < breakdown.monthly_gross);
            assert!(breakdown.special_net < breakdown.monthly_gross);
        }
    }
}
