//! Tolerances and hull configuration.
//!
//! Policy
//! - The collinearity threshold is absolute, not scale-relative. Inputs with
//!   very large coordinates can therefore report false (non-)collinearity; use
//!   `is_collinear_eps` with a tolerance matched to the dataset's magnitude.
//! - The hull itself takes no tolerance: the angular order and the sweep use
//!   exact comparisons, so results do not shift with the coordinate scale.

/// Default absolute threshold on `|orientation|` below which three points count as collinear.
pub const COLLINEAR_EPS: f64 = 1e-6;

/// Hull computation settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    /// Worker count for the angular sort. Values below 1 are treated as 1.
    pub threads: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Thread count after clamping to at least one worker.
    #[inline]
    pub fn effective_threads(&self) -> usize {
        self.threads.max(1)
    }
}
