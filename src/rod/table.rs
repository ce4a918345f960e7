//! Bottom-up rod cutting.
//!
//! # Algorithm
//!
//! 1. `best[0] = 0` with an empty cut sequence
//! 2. For each length `i` in `1..=length`, for each piece `j` in
//!    `1..=min(i, |prices|)`: try `best[i - j] + prices[j]` with cuts
//!    `cuts[i - j]` followed by `j`
//! 3. Pick the winning piece according to the configured [`TieBreak`]
//! 4. Only the winning final piece is stored per length; the sequence is
//!    rebuilt once at the end
//!
//! With [`TieBreak::StrictImprovement`] (the default) the profit always
//! matches the memoized cutter, but the cut sequence may be a different
//! optimal one. [`TieBreak::Lexicographic`] reproduces the memoized
//! sequence exactly.

use tracing::debug;

use super::compare::select_piece;
use super::config::{CutConfig, TieBreak};
use super::plan::PlanTree;
use super::types::{CutPlan, PriceTable};
use crate::error::{OptError, OptResult};

/// Tabulated (bottom-up) rod cutter.
pub struct TableCutter;

impl TableCutter {
    /// Computes the most profitable way to cut a rod of `length`.
    ///
    /// # Errors
    ///
    /// [`OptError::InvalidInput`] if `length > 0` and `prices` is empty,
    /// or if `config` is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_batchcut::rod::{CutConfig, PriceTable, TableCutter, TieBreak};
    ///
    /// let prices = PriceTable::from_integers(&[2, 5, 7, 8, 10]).unwrap();
    ///
    /// let plan = TableCutter::run(5, &prices, &CutConfig::default()).unwrap();
    /// assert!((plan.max_profit - 12.0).abs() < 1e-10);
    /// assert_eq!(plan.cuts, vec![2, 2, 1]);
    ///
    /// let lex = CutConfig::default().with_tie_break(TieBreak::Lexicographic);
    /// let plan = TableCutter::run(5, &prices, &lex).unwrap();
    /// assert_eq!(plan.cuts, vec![1, 2, 2]);
    /// ```
    pub fn run(length: usize, prices: &PriceTable, config: &CutConfig) -> OptResult<CutPlan> {
        config.validate().map_err(OptError::InvalidInput)?;
        prices.check_length(length)?;

        let lexicographic = config.tie_break == TieBreak::Lexicographic;
        let mut table = PlanTree::new(length);

        let mut candidates = Vec::with_capacity(prices.max_piece());
        for i in 1..=length {
            candidates.clear();
            for (idx, &price) in prices.as_slice().iter().take(i).enumerate() {
                let piece = idx + 1;
                if let Some(base) = table.profit(i - piece) {
                    candidates.push((base + price, piece));
                }
            }

            let best = select_piece(&candidates, config.epsilon, lexicographic, |a, b| {
                table.compare_extended(i - a, a, i - b, b)
            });
            if let Some((profit, piece)) = best {
                table.record(i, piece, profit);
            }
        }

        let max_profit = table.profit(length).unwrap_or(0.0);
        let plan_cuts = table.cuts(length);

        debug!(
            length,
            max_profit,
            pieces = plan_cuts.len(),
            tie_break = ?config.tie_break,
            "tabulated cut solved"
        );

        Ok(CutPlan::new(max_profit, plan_cuts))
    }
}

/// Tabulated rod cutting with the default configuration.
pub fn cut_table(length: usize, prices: &PriceTable) -> OptResult<CutPlan> {
    TableCutter::run(length, prices, &CutConfig::default())
}

/// Tabulated rod cutting with an explicit configuration.
pub fn cut_table_with(
    length: usize,
    prices: &PriceTable,
    config: &CutConfig,
) -> OptResult<CutPlan> {
    TableCutter::run(length, prices, config)
}
