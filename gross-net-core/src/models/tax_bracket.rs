use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One band of a progressive tax table.
///
/// A bracket covers the taxable range from the previous bracket's
/// `upper_bound` up to its own `upper_bound`. Income inside that range is
/// taxed at `marginal_rate` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Decimal,
    pub marginal_rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        upper_bound: Decimal,
        marginal_rate: Decimal,
    ) -> Self {
        Self {
            upper_bound,
            marginal_rate,
        }
    }
}

/// Errors reported when a bracket table breaks its ordering or rate invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table is empty")]
    Empty,

    #[error("bracket {index} has a non-positive upper bound {bound}")]
    NonPositiveBound { index: usize, bound: Decimal },

    #[error("bracket {index} upper bound {bound} does not exceed the previous bound {previous}")]
    NonIncreasingBound {
        index: usize,
        bound: Decimal,
        previous: Decimal,
    },

    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// An ordered sequence of [`TaxBracket`]s, lowest band first.
///
/// The last bracket acts as a sentinel: its bound must exceed any income the
/// table is used for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BracketTable(Vec<TaxBracket>);

impl BracketTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        Self(brackets)
    }

    /// Builds a table from `(upper_bound, marginal_rate)` pairs.
    pub fn from_pairs(pairs: &[(Decimal, Decimal)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|&(bound, rate)| TaxBracket::new(bound, rate))
                .collect(),
        )
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Upper bound of the last bracket.
    pub fn sentinel(&self) -> Option<Decimal> {
        self.0.last().map(|b| b.upper_bound)
    }

    /// Checks that bounds are positive and strictly increasing and that every
    /// rate lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), BracketTableError> {
        if self.is_empty() {
            return Err(BracketTableError::Empty);
        }

        let mut previous = Decimal::ZERO;
        for (index, bracket) in self.0.iter().enumerate() {
            if bracket.upper_bound <= Decimal::ZERO {
                return Err(BracketTableError::NonPositiveBound {
                    index,
                    bound: bracket.upper_bound,
                });
            }
            if index > 0 && bracket.upper_bound <= previous {
                return Err(BracketTableError::NonIncreasingBound {
                    index,
                    bound: bracket.upper_bound,
                    previous,
                });
            }
            if bracket.marginal_rate < Decimal::ZERO || bracket.marginal_rate > Decimal::ONE {
                return Err(BracketTableError::RateOutOfRange {
                    index,
                    rate: bracket.marginal_rate,
                });
            }
            previous = bracket.upper_bound;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a BracketTable {
    type Item = &'a TaxBracket;
    type IntoIter = std::slice::Iter<'a, TaxBracket>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
