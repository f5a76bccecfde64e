use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PayrollBreakdown;

/// A [`PayrollBreakdown`] together with the share of gross that ends up as
/// net, overall and for the last gross increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaInfo {
    pub breakdown: PayrollBreakdown,

    /// Yearly net as a percentage of yearly gross.
    pub percent: Decimal,

    /// Percentage of the last yearly gross increment kept as yearly net.
    pub yearly_increment_percent: Decimal,

    /// Percentage of the last monthly gross increment kept as monthly net,
    /// special payments excluded.
    pub monthly_increment_percent: Decimal,

    /// Special payment net increase relative to the monthly gross increment.
    pub special_increment_percent: Decimal,
}
