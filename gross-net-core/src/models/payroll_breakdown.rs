use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gross and net amounts for one monthly gross salary.
///
/// "Special" fields refer to one special payment installment; "monthly"
/// fields to one regular salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    pub yearly_gross: Decimal,
    pub yearly_net: Decimal,
    pub monthly_gross: Decimal,
    pub monthly_net: Decimal,
    pub special_net: Decimal,
    /// Social security withheld from one regular salary.
    pub monthly_sv: Decimal,
    /// Social security withheld from one special payment.
    pub special_sv: Decimal,
    pub monthly_tax: Decimal,
    pub special_tax: Decimal,
}
