mod delta_info;
mod payroll_breakdown;
mod payroll_config;
mod sweep_config;
mod tax_bracket;

pub use delta_info::DeltaInfo;
pub use payroll_breakdown::PayrollBreakdown;
pub use payroll_config::{PayrollConfig, PayrollConfigError};
pub use sweep_config::{GrossValues, SweepConfig};
pub use tax_bracket::{BracketTable, BracketTableError, TaxBracket};
