//! Price table and cut plan records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{OptError, OptResult};

/// Largest integer magnitude an `f64` holds exactly.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Sale prices for uncut pieces, indexed by piece length.
///
/// Entry `i` (1-based) is the price of a piece of length `i`. Longer
/// pieces have no direct price and can only be assembled from shorter ones.
///
/// # Examples
///
/// ```
/// use u_batchcut::rod::PriceTable;
///
/// let prices = PriceTable::new(vec![2.0, 5.0, 7.0]).unwrap();
/// assert_eq!(prices.price(2), Some(5.0));
/// assert_eq!(prices.price(0), None);
/// assert_eq!(prices.price(4), None);
/// assert!(PriceTable::new(vec![1.0, -3.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceTable {
    prices: Vec<f64>,
}

impl PriceTable {
    /// Creates a price table, rejecting negative or non-finite prices.
    pub fn new(prices: Vec<f64>) -> OptResult<Self> {
        if let Some((i, p)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(OptError::InvalidInput(format!(
                "invalid price {p} for length {}",
                i + 1
            )));
        }
        Ok(Self { prices })
    }

    /// Builds a table from integer prices.
    ///
    /// Prices beyond 2^53 have no exact `f64` representation and are
    /// rejected.
    pub fn from_integers(prices: &[i64]) -> OptResult<Self> {
        if let Some((i, p)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| p.unsigned_abs() > MAX_EXACT_INTEGER)
        {
            return Err(OptError::InvalidInput(format!(
                "price {p} for length {} is not exactly representable",
                i + 1
            )));
        }
        Self::new(prices.iter().map(|&p| p as f64).collect())
    }

    /// Price of an uncut piece of `length`, if one is listed.
    pub fn price(&self, length: usize) -> Option<f64> {
        length
            .checked_sub(1)
            .and_then(|i| self.prices.get(i))
            .copied()
    }

    /// Longest piece with a listed price.
    pub fn max_piece(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    /// Fails if a rod of `length` cannot be sold at all.
    pub(crate) fn check_length(&self, length: usize) -> OptResult<()> {
        if length > 0 && self.is_empty() {
            return Err(OptError::InvalidInput(format!(
                "empty price table cannot price a rod of length {length}"
            )));
        }
        Ok(())
    }
}

/// Optimal way to cut one rod.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutPlan {
    /// Total sale value of the pieces.
    pub max_profit: f64,
    /// Piece lengths in cut order; they sum to the rod length.
    pub cuts: Vec<usize>,
    /// Number of cut operations: one fewer than the number of pieces,
    /// and zero for an empty plan.
    pub number_of_cuts: usize,
}

impl CutPlan {
    pub(crate) fn new(max_profit: f64, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Sum of all piece lengths.
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }

    /// Number of pieces sold.
    pub fn pieces(&self) -> usize {
        self.cuts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_lookup_is_one_based() {
        let table = PriceTable::from_integers(&[1, 3, 8]).unwrap();
        assert_eq!(table.max_piece(), 3);
        assert_eq!(table.price(1), Some(1.0));
        assert_eq!(table.price(3), Some(8.0));
        assert_eq!(table.price(0), None);
        assert_eq!(table.price(4), None);
    }

    #[test]
    fn test_rejects_bad_prices() {
        assert!(PriceTable::new(vec![f64::NAN]).is_err());
        assert!(PriceTable::new(vec![1.0, f64::INFINITY]).is_err());
        assert!(PriceTable::from_integers(&[2, -1]).is_err());
        assert!(PriceTable::new(vec![]).is_ok());
    }

    #[test]
    fn test_integer_prices_must_be_exact() {
        let limit = 1i64 << 53;
        let table = PriceTable::from_integers(&[1, limit]).unwrap();
        assert_eq!(table.price(2), Some(limit as f64));

        assert!(matches!(
            PriceTable::from_integers(&[1, limit + 1]),
            Err(OptError::InvalidInput(_))
        ));
        assert!(PriceTable::from_integers(&[i64::MAX]).is_err());
    }

    #[test]
    fn test_check_length() {
        let empty = PriceTable::new(vec![]).unwrap();
        assert!(empty.check_length(0).is_ok());
        assert!(empty.check_length(1).is_err());
    }

    #[test]
    fn test_cut_plan_counts() {
        let plan = CutPlan::new(12.0, vec![2, 3]);
        assert_eq!(plan.number_of_cuts, 1);
        assert_eq!(plan.pieces(), 2);
        assert_eq!(plan.total_length(), 5);

        let uncut = CutPlan::new(8.0, vec![3]);
        assert_eq!(uncut.number_of_cuts, 0);

        // Zero-length rod: no pieces and no cuts (never -1).
        let empty = CutPlan::new(0.0, vec![]);
        assert_eq!(empty.number_of_cuts, 0);
        assert_eq!(empty.pieces(), 0);
    }
}
