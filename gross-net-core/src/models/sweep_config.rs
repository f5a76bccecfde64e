use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Range of monthly gross salaries to tabulate.
///
/// Values run from `start` in steps of `increment` while they stay below
/// `end`; `end` itself is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub start: Decimal,
    pub end: Decimal,
    pub increment: Decimal,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: dec!(1000),
            end: dec!(10000),
            increment: dec!(100),
        }
    }
}

impl SweepConfig {
    /// Iterates the monthly gross values of the sweep.
    ///
    /// A non-positive increment yields no values; [`crate::evaluate_sweep`]
    /// rejects such a sweep before iterating.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use gross_net_core::SweepConfig;
    ///
    /// let sweep = SweepConfig { start: dec!(1000), end: dec!(1300), increment: dec!(100) };
    /// let values: Vec<_> = sweep.gross_values().collect();
    ///
    /// assert_eq!(values, vec![dec!(1000), dec!(1100), dec!(1200)]);
    /// ```
    pub fn gross_values(&self) -> GrossValues {
        GrossValues {
            next: self.start,
            end: self.end,
            increment: self.increment,
        }
    }
}

/// Iterator returned by [`SweepConfig::gross_values`].
#[derive(Debug, Clone)]
pub struct GrossValues {
    next: Decimal,
    end: Decimal,
    increment: Decimal,
}

impl Iterator for GrossValues {
    type Item = Decimal;

    fn next(&mut self) -> Option<Self::Item> {
        if self.increment <= Decimal::ZERO || self.next >= self.end {
            return None;
        }
        let value = self.next;
        self.next += self.increment;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_sweep_has_ninety_values() {
        let values: Vec<_> = SweepConfig::default().gross_values().collect();

        assert_eq!(values.len(), 90);
        assert_eq!(values.first(), Some(&dec!(1000)));
        assert_eq!(values.last(), Some(&dec!(9900)));
    }

    #[test]
    fn end_is_exclusive() {
        let sweep = SweepConfig {
            start: dec!(1000),
            end: dec!(1200),
            increment: dec!(100),
        };

        assert_eq!(
            sweep.gross_values().collect::<Vec<_>>(),
            vec![dec!(1000), dec!(1100)]
        );
    }

    #[test]
    fn zero_increment_yields_nothing() {
        let sweep = SweepConfig {
            increment: Decimal::ZERO,
            ..SweepConfig::default()
        };

        assert_eq!(sweep.gross_values().count(), 0);
    }

    #[test]
    fn empty_range_yields_nothing() {
        let sweep = SweepConfig {
            start: dec!(2000),
            end: dec!(2000),
            increment: dec!(100),
        };

        assert_eq!(sweep.gross_values().count(), 0);
    }
}
