//! Rod-cutting configuration.

/// How equally profitable cut sequences are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep the first optimal sequence found; replace only on strict
    /// improvement.
    #[default]
    StrictImprovement,

    /// Prefer the lexicographically smallest optimal sequence.
    Lexicographic,
}

/// Configuration for the rod cutters.
///
/// The memoized cutter always breaks ties lexicographically and only
/// reads `epsilon`. The tabulated cutter honors both fields.
///
/// # Examples
///
/// ```
/// use u_batchcut::rod::{CutConfig, TieBreak};
///
/// let config = CutConfig::default()
///     .with_tie_break(TieBreak::Lexicographic)
///     .with_epsilon(1e-6);
/// assert_eq!(config.tie_break, TieBreak::Lexicographic);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CutConfig {
    /// Tie resolution for the tabulated cutter.
    pub tie_break: TieBreak,
    /// Profits closer than this are treated as equal.
    ///
    /// A tie may keep or select a sequence up to `epsilon` below the best
    /// candidate for that sub-length. The losses add up along the plan, so
    /// the reported `max_profit` can fall short of the exact optimum by at
    /// most `epsilon` times the rod length. It is always the sale value of
    /// the returned cuts.
    pub epsilon: f64,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::StrictImprovement,
            epsilon: 1e-9,
        }
    }
}

impl CutConfig {
    /// Sets the tie-breaking strategy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the epsilon for floating-point comparison.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            ));
        }
        Ok(())
    }
}
