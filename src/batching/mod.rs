//! Capacity-bounded batch scheduling.
//!
//! Groups discrete jobs into batches limited by accumulated volume and
//! item count. Jobs are taken in priority order; each batch runs its jobs
//! concurrently, so a batch lasts as long as its slowest job.
//!
//! # Design
//!
//! The scheduler is greedy and single-shot: no preemption, no partial
//! batches, no reclamation of capacity once a batch closes. A job that
//! cannot fit an empty batch is reported as a capacity violation instead
//! of stalling the scheduler.
//!
//! # References
//!
//! Batch scheduling with capacity constraints: Pinedo (2016), "Scheduling:
//! Theory, Algorithms, and Systems", ch. 4

mod scheduler;
mod types;

pub use scheduler::{schedule, BatchScheduler};
pub use types::{Batch, BatchSchedule, Constraints, Job};
