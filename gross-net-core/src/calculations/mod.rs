//! Salary calculations: marginal income tax, gross-to-net payroll, marginal
//! deltas between neighbouring salaries, and the gross salary sweep.

pub mod common;
pub mod delta;
pub mod payroll;
pub mod sweep;
pub mod tax;

pub use delta::{DeltaError, compute_delta};
pub use payroll::{PayrollCalculator, PayrollError, compute_payroll};
pub use sweep::{SweepError, evaluate_sweep};
pub use tax::compute_tax;
