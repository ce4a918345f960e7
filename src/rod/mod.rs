//! Rod cutting by dynamic programming.
//!
//! Finds the most profitable way to cut a rod of integer length into
//! pieces, given a price for each sellable piece length. Two independent
//! solvers are provided:
//!
//! - **Memoized**: top-down recursion over the remaining length with a
//!   cache that lives for one call only. Ties between equally profitable
//!   sequences go to the lexicographically smallest one.
//! - **Tabulated**: bottom-up table over all lengths up to the target.
//!   By default a candidate only replaces the incumbent on strict
//!   improvement; [`TieBreak::Lexicographic`] aligns it with the memoized
//!   solver.
//!
//! Both solvers always agree on `max_profit`.
//!
//! # References
//!
//! Cormen, Leiserson, Rivest & Stein (2009), "Introduction to Algorithms",
//! 3rd ed., §15.1

mod compare;
mod config;
mod memo;
mod plan;
mod table;
mod types;

pub use compare::compare_cuts;
pub use config::{CutConfig, TieBreak};
pub use memo::{cut_memo, cut_memo_with, MemoCutter};
pub use table::{cut_table, cut_table_with, TableCutter};
pub use types::{CutPlan, PriceTable};
