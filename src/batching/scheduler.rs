//! Greedy batch formation.
//!
//! # Algorithm
//!
//! 1. Stable-sort jobs by ascending priority
//! 2. Each pass scans the remaining jobs from the front:
//!    a. Add a job if the batch has room for one more item and its volume fits
//!    b. Skipped jobs stay in line for the next pass
//! 3. Close the batch at the end of the scan; its duration is the slowest job
//! 4. Repeat until every job is placed
//!
//! A pass that places nothing can never be followed by one that does, so
//! it ends the call with [`OptError::CapacityViolation`].

use std::collections::HashSet;

use tracing::{debug, warn};

use super::types::{Batch, BatchSchedule, Constraints, Job};
use crate::error::{OptError, OptResult};

/// Capacity-bounded batch scheduler.
pub struct BatchScheduler;

impl BatchScheduler {
    /// Partitions `jobs` into ordered batches that respect `constraints`.
    ///
    /// The input slice is only borrowed; calling twice with the same
    /// arguments yields the same schedule.
    ///
    /// # Errors
    ///
    /// - [`OptError::InvalidInput`] for negative or non-finite numbers,
    ///   or duplicate job ids.
    /// - [`OptError::CapacityViolation`] if some job cannot be placed in
    ///   any batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_batchcut::batching::{BatchScheduler, Constraints, Job};
    ///
    /// let jobs = vec![
    ///     Job::new("M1", 100.0, 1, 120.0),
    ///     Job::new("M2", 150.0, 1, 90.0),
    ///     Job::new("M3", 120.0, 1, 150.0),
    /// ];
    /// let result = BatchScheduler::schedule(&jobs, &Constraints::new(300.0, 2)).unwrap();
    /// assert_eq!(result.order, vec!["M1", "M2", "M3"]);
    /// assert!((result.total_time - 270.0).abs() < 1e-10);
    /// ```
    pub fn schedule(jobs: &[Job], constraints: &Constraints) -> OptResult<BatchSchedule> {
        Self::validate(jobs, constraints)?;

        // Vec::sort_by_key is stable: equal priorities keep input order.
        let mut remaining: Vec<&Job> = jobs.iter().collect();
        remaining.sort_by_key(|job| job.priority);

        let mut order = Vec::with_capacity(jobs.len());
        let mut batches = Vec::new();
        let mut total_time = 0.0;

        while !remaining.is_empty() {
            let mut selected: Vec<&Job> = Vec::new();
            let mut skipped: Vec<&Job> = Vec::with_capacity(remaining.len());
            let mut volume = 0.0;

            for job in remaining {
                if selected.len() < constraints.max_items
                    && volume + job.volume <= constraints.max_volume
                {
                    volume += job.volume;
                    selected.push(job);
                } else {
                    skipped.push(job);
                }
            }

            if selected.is_empty() {
                // Every remaining job was skipped; the next pass would repeat this one.
                let stuck = skipped[0];
                warn!(
                    job_id = %stuck.id,
                    volume = stuck.volume,
                    max_volume = constraints.max_volume,
                    max_items = constraints.max_items,
                    unplaced = skipped.len(),
                    "scheduling pass placed no job"
                );
                return Err(OptError::CapacityViolation {
                    job_id: stuck.id.clone(),
                    volume: stuck.volume,
                    max_volume: constraints.max_volume,
                    max_items: constraints.max_items,
                });
            }

            let time = selected
                .iter()
                .map(|job| job.print_time)
                .fold(0.0, f64::max);
            let job_ids: Vec<String> = selected.iter().map(|job| job.id.clone()).collect();

            debug!(
                batch = batches.len(),
                items = job_ids.len(),
                volume,
                time,
                "batch closed"
            );

            order.extend(job_ids.iter().cloned());
            total_time += time;
            batches.push(Batch {
                job_ids,
                volume,
                time,
            });
            remaining = skipped;
        }

        debug!(
            jobs = jobs.len(),
            batches = batches.len(),
            total_time,
            "schedule complete"
        );

        Ok(BatchSchedule {
            order,
            total_time,
            batches,
        })
    }

    fn validate(jobs: &[Job], constraints: &Constraints) -> OptResult<()> {
        constraints.validate().map_err(OptError::InvalidInput)?;

        let mut seen = HashSet::with_capacity(jobs.len());
        for job in jobs {
            job.validate().map_err(OptError::InvalidInput)?;
            if !seen.insert(job.id.as_str()) {
                return Err(OptError::InvalidInput(format!(
                    "duplicate job id {}",
                    job.id
                )));
            }
        }
        Ok(())
    }
}

/// Convenience wrapper around [`BatchScheduler::schedule`].
pub fn schedule(jobs: &[Job], constraints: &Constraints) -> OptResult<BatchSchedule> {
    BatchScheduler::schedule(jobs, constraints)
}
