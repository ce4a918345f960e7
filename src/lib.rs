//! Capacity-bounded batch scheduling and rod-cutting optimization.
//!
//! Provides two independent combinatorial-optimization routines:
//!
//! - **Batching**: Greedy, priority-ordered grouping of jobs into batches
//!   bounded by volume and item count. Reports the processing order and
//!   the total elapsed time.
//! - **Rod cutting**: Maximum revenue from cutting a rod into priced
//!   pieces, solved both top-down (memoized) and bottom-up (tabulated).
//!
//! Every entry point is a pure function over borrowed input. Caches and
//! tables are allocated per call, so calls may run on separate threads
//! without synchronization.
//!
//! # Examples
//!
//! ```
//! use u_batchcut::{cut_memo, cut_table, schedule};
//! use u_batchcut::batching::{Constraints, Job};
//! use u_batchcut::rod::PriceTable;
//!
//! let prices = PriceTable::from_integers(&[2, 5, 7, 8, 10]).unwrap();
//! let memo = cut_memo(5, &prices).unwrap();
//! let table = cut_table(5, &prices).unwrap();
//! assert_eq!(memo.max_profit, table.max_profit);
//!
//! let jobs = vec![Job::new("M1", 100.0, 1, 120.0), Job::new("M2", 150.0, 1, 90.0)];
//! let result = schedule(&jobs, &Constraints::new(300.0, 2)).unwrap();
//! assert_eq!(result.order, vec!["M1", "M2"]);
//! ```

pub mod batching;
pub mod error;
pub mod rod;

pub use batching::schedule;
pub use error::{OptError, OptResult};
pub use rod::{cut_memo, cut_table};
