//! Error types shared by the batching and rod-cutting routines.

use thiserror::Error;

/// Errors returned by the optimization entry points.
///
/// Every failure is reported before any result is produced; there are no
/// partial schedules or partially filled cut plans.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptError {
    /// A scheduling pass could not place a single job.
    ///
    /// `job_id` names the highest-priority job still waiting when the
    /// scheduler stopped making progress.
    #[error(
        "capacity violation: job {job_id} (volume {volume}) cannot fit a batch \
         with max_volume {max_volume} and max_items {max_items}"
    )]
    CapacityViolation {
        job_id: String,
        volume: f64,
        max_volume: f64,
        max_items: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type OptResult<T> = Result<T, OptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_violation_message() {
        let err = OptError::CapacityViolation {
            job_id: "M1".into(),
            volume: 400.0,
            max_volume: 300.0,
            max_items: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("M1"));
        assert!(msg.contains("400"));
        assert!(msg.contains("300"));
    }

    #[test]
    fn test_invalid_input_message() {
        let err = OptError::InvalidInput("negative price at length 2".into());
        assert_eq!(err.to_string(), "invalid input: negative price at length 2");
    }
}
