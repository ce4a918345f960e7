//! Top-down rod cutting with a call-scoped memo cache.
//!
//! # Recurrence
//!
//! ```text
//! value(0) = 0, []
//! value(n) = max over i in 1..=min(n, |prices|) of prices[i] + value(n - i)
//! ```
//!
//! The winning sequence is `value(n - i).cuts` followed by `i`. Equal
//! profits go to the lexicographically smaller sequence.
//!
//! Sub-lengths are resolved on demand in the same order plain recursion
//! would visit them, but pending lengths live on a heap-allocated frame
//! stack, so long rods cannot exhaust the thread stack.

use tracing::{debug, trace};

use super::compare::select_piece;
use super::config::CutConfig;
use super::plan::PlanTree;
use super::types::{CutPlan, PriceTable};
use crate::error::{OptError, OptResult};

/// A length waiting for its sub-lengths, and the next piece to look up.
struct Frame {
    length: usize,
    next_piece: usize,
}

struct MemoSolver<'a> {
    prices: &'a [f64],
    epsilon: f64,
    /// Memo cache keyed by remaining length.
    cache: PlanTree,
    hits: usize,
    candidates: Vec<(f64, usize)>,
}

impl MemoSolver<'_> {
    fn solve(&mut self, length: usize) {
        let mut frames = vec![Frame {
            length,
            next_piece: 1,
        }];

        while let Some(frame) = frames.last_mut() {
            let n = frame.length;
            if self.cache.is_solved(n) {
                frames.pop();
                continue;
            }

            let reach = n.min(self.prices.len());
            let mut piece = frame.next_piece;
            while piece <= reach && self.cache.is_solved(n - piece) {
                self.hits += 1;
                piece += 1;
            }

            if piece <= reach {
                frame.next_piece = piece + 1;
                frames.push(Frame {
                    length: n - piece,
                    next_piece: 1,
                });
                continue;
            }

            self.settle(n);
            frames.pop();
        }
    }

    /// Picks the best final piece for `n`; every sub-length is cached.
    fn settle(&mut self, n: usize) {
        let cache = &self.cache;
        self.candidates.clear();
        for (idx, &price) in self.prices.iter().take(n).enumerate() {
            let piece = idx + 1;
            if let Some(rest) = cache.profit(n - piece) {
                self.candidates.push((rest + price, piece));
            }
        }

        let best = select_piece(&self.candidates, self.epsilon, true, |a, b| {
            cache.compare_extended(n - a, a, n - b, b)
        });

        // An empty table is rejected before solving, so `best` is set here.
        if let Some((profit, piece)) = best {
            trace!(length = n, piece, profit, "memo entry stored");
            self.cache.record(n, piece, profit);
        }
    }
}

/// Memoized (top-down) rod cutter.
pub struct MemoCutter;

impl MemoCutter {
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
    /// use u_batchcut::rod::{CutConfig, MemoCutter, PriceTable};
    ///
    /// let prices = PriceTable::from_integers(&[2, 5, 7, 8, 10]).unwrap();
    /// let plan = MemoCutter::run(5, &prices, &CutConfig::default()).unwrap();
    /// assert!((plan.max_profit - 12.0).abs() < 1e-10);
    /// assert_eq!(plan.cuts, vec![1, 2, 2]);
    /// assert_eq!(plan.number_of_cuts, 2);
    /// ```
    pub fn run(length: usize, prices: &PriceTable, config: &CutConfig) -> OptResult<CutPlan> {
        config.validate().map_err(OptError::InvalidInput)?;
        prices.check_length(length)?;

        let mut solver = MemoSolver {
            prices: prices.as_slice(),
            epsilon: config.epsilon,
            cache: PlanTree::new(length),
            hits: 0,
            candidates: Vec::with_capacity(prices.max_piece()),
        };
        solver.solve(length);

        let max_profit = solver.cache.profit(length).unwrap_or(0.0);
        let cuts = solver.cache.cuts(length);

        debug!(
            length,
            max_profit,
            pieces = cuts.len(),
            cache_entries = solver.cache.solved_count(),
            cache_hits = solver.hits,
            "memoized cut solved"
        );

        Ok(CutPlan::new(max_profit, cuts))
    }
}

/// Memoized rod cutting with the default configuration.
pub fn cut_memo(length: usize, prices: &PriceTable) -> OptResult<CutPlan> {
    MemoCutter::run(length, prices, &CutConfig::default())
}

/// Memoized rod cutting with an explicit configuration.
pub fn cut_memo_with(length: usize, prices: &PriceTable, config: &CutConfig) -> OptResult<CutPlan> {
    MemoCutter::run(length, prices, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(p: &[i64]) -> PriceTable {
        PriceTable::from_integers(p).unwrap()
    }

    #[test]
    fn test_classic_instance() {
        let plan = cut_memo(5, &prices(&[2, 5, 7, 8, 10])).unwrap();
        assert!((plan.max_profit - 12.0).abs() < 1e-10);
        assert_eq!(plan.total_length(), 5);
        // [1, 2, 2], [2, 3] and [2, 2, 1] all earn 12; the smallest wins.
        assert_eq!(plan.cuts, vec![1, 2, 2]);
        assert_eq!(plan.number_of_cuts, 2);
    }

    #[test]
    fn test_no_cut_is_optimal() {
        let plan = cut_memo(3, &prices(&[1, 3, 8])).unwrap();
        assert!((plan.max_profit - 8.0).abs() < 1e-10);
        assert_eq!(plan.cuts, vec![3]);
        assert_eq!(plan.number_of_cuts, 0);
    }

    #[test]
    fn test_unit_pieces_are_optimal() {
        let plan = cut_memo(4, &prices(&[3, 5, 6, 7])).unwrap();
        assert!((plan.max_profit - 12.0).abs() < 1e-10);
        assert_eq!(plan.cuts, vec![1, 1, 1, 1]);
        assert_eq!(plan.number_of_cuts, 3);
    }

    #[test]
    fn test_zero_length() {
        let plan = cut_memo(0, &prices(&[2, 5])).unwrap();
        assert!(plan.max_profit.abs() < 1e-10);
        assert!(plan.cuts.is_empty());
        // Clamped: an empty plan has no cuts rather than -1.
        assert_eq!(plan.number_of_cuts, 0);

        let empty = PriceTable::new(vec![]).unwrap();
        assert!(cut_memo(0, &empty).unwrap().cuts.is_empty());
    }

    #[test]
    fn test_length_beyond_table() {
        // Only pieces up to 2 are sellable; 7 = 2 + 2 + 2 + 1.
        let plan = cut_memo(7, &prices(&[1, 5])).unwrap();
        assert!((plan.max_profit - 16.0).abs() < 1e-10);
        assert_eq!(plan.total_length(), 7);
        assert_eq!(plan.cuts, vec![1, 2, 2, 2]);
    }

    #[test]
    fn test_zero_prices_still_cover_rod() {
        let plan = cut_memo(3, &prices(&[0, 0])).unwrap();
        assert!(plan.max_profit.abs() < 1e-10);
        assert_eq!(plan.total_length(), 3);
        assert_eq!(plan.cuts, vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_table_is_invalid() {
        let empty = PriceTable::new(vec![]).unwrap();
        assert!(matches!(cut_memo(3, &empty), Err(OptError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_config() {
        let config = CutConfig::default().with_epsilon(-1.0);
        assert!(matches!(
            cut_memo_with(3, &prices(&[1]), &config),
            Err(OptError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_calls_do_not_share_cache() {
        let a = cut_memo(4, &prices(&[1, 5, 8, 9])).unwrap();
        let b = cut_memo(4, &prices(&[3, 1, 1, 1])).unwrap();
        let a_again = cut_memo(4, &prices(&[1, 5, 8, 9])).unwrap();

        assert!((a.max_profit - 10.0).abs() < 1e-10);
        assert_eq!(a.cuts, vec![2, 2]);
        assert!((b.max_profit - 12.0).abs() < 1e-10);
        assert_eq!(b.cuts, vec![1, 1, 1, 1]);
        assert_eq!(a, a_again);
    }

    #[test]
    fn test_long_rod_does_not_exhaust_stack() {
        let plan = cut_memo(100_000, &prices(&[1, 2])).unwrap();
        assert!((plan.max_profit - 100_000.0).abs() < 1e-6);
        assert_eq!(plan.total_length(), 100_000);
        // Every composition earns the same; all unit pieces is the smallest.
        assert!(plan.cuts.iter().all(|&c| c == 1));
        assert_eq!(plan.number_of_cuts, 99_999);
    }

    #[test]
    fn test_long_rod_prefers_valuable_pieces() {
        let plan = cut_memo(100_001, &prices(&[1, 3])).unwrap();
        assert!((plan.max_profit - 150_001.0).abs() < 1e-6);
        assert_eq!(plan.pieces(), 50_001);
        assert_eq!(plan.cuts[0], 1);
        assert!(plan.cuts[1..].iter().all(|&c| c == 2));
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (1..=8usize)
            .map(|len| {
                std::thread::spawn(move || {
                    let table = PriceTable::from_integers(&[1, 5, 8, 9, 10, 17, 17, 20]).unwrap();
                    cut_memo(len, &table).unwrap()
                })
            })
            .collect();

        let expected = [1.0, 5.0, 8.0, 10.0, 13.0, 17.0, 18.0, 22.0];
        for (handle, want) in handles.into_iter().zip(expected) {
            let plan = handle.join().unwrap();
            assert!((plan.max_profit - want).abs() < 1e-10);
        }
    }
}
