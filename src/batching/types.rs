//! Job and capacity records consumed by the batch scheduler.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A discrete job to be placed into a batch.
///
/// Lower `priority` values are scheduled first.
///
/// # Examples
///
/// ```
/// use u_batchcut::batching::Job;
///
/// let job = Job::new("M1", 100.0, 1, 120.0);
/// assert_eq!(job.id, "M1");
/// assert_eq!(job.priority, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    /// Identifier, unique within one scheduling call.
    pub id: String,
    /// Capacity consumed in a batch.
    pub volume: f64,
    /// Ordering key (lower = higher priority).
    pub priority: i64,
    /// Processing time. A batch takes as long as its slowest job.
    pub print_time: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, volume: f64, priority: i64, print_time: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            print_time,
        }
    }

    /// Validates that volume and time are finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(format!(
                "job {} has invalid volume {}",
                self.id, self.volume
            ));
        }
        if !self.print_time.is_finite() || self.print_time < 0.0 {
            return Err(format!(
                "job {} has invalid print_time {}",
                self.id, self.print_time
            ));
        }
        Ok(())
    }
}

/// Capacity limits applied to every batch.
///
/// # Examples
///
/// ```
/// use u_batchcut::batching::Constraints;
///
/// let c = Constraints::new(300.0, 2);
/// assert!(c.validate().is_ok());
/// assert!(Constraints::new(-1.0, 2).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraints {
    /// Maximum accumulated volume of one batch.
    pub max_volume: f64,
    /// Maximum number of jobs in one batch.
    pub max_items: usize,
}

impl Constraints {
    /// Creates new capacity limits.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Validates that `max_volume` is finite and non-negative.
    ///
    /// A zero `max_items` is accepted here; it surfaces as a capacity
    /// violation once there is a job to place.
    pub fn validate(&self) -> Result<(), String> {
        if !self.max_volume.is_finite() || self.max_volume < 0.0 {
            return Err(format!("invalid max_volume {}", self.max_volume));
        }
        Ok(())
    }

    /// Returns true if a job could be placed in an otherwise empty batch.
    pub fn admits(&self, job: &Job) -> bool {
        self.max_items > 0 && job.volume <= self.max_volume
    }
}

/// One closed batch of jobs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Batch {
    /// Job ids in selection order.
    pub job_ids: Vec<String>,
    /// Accumulated volume.
    pub volume: f64,
    /// Batch duration: the maximum `print_time` among its jobs.
    pub time: f64,
}

impl Batch {
    /// Number of jobs in the batch.
    pub fn len(&self) -> usize {
        self.job_ids.len()
    }

    /// Returns true if the batch holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }
}

/// Result of a scheduling call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchSchedule {
    /// All job ids, batch by batch, in selection order.
    pub order: Vec<String>,
    /// Sum of batch durations.
    pub total_time: f64,
    /// Per-batch breakdown, in processing order.
    pub batches: Vec<Batch>,
}

impl BatchSchedule {
    /// Number of batches formed.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }
}
