pub mod calculations;
pub mod models;

pub use calculations::{
    DeltaError, PayrollCalculator, PayrollError, SweepError, compute_delta, compute_payroll,
    compute_tax, evaluate_sweep,
};
pub use models::*;
