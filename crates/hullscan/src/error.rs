use std::fmt;

/// Failure of a hull computation. Every variant is terminal for that call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than three input points.
    TooFewPoints { count: usize },
    /// A coordinate of the point at `index` is `NaN` or infinite.
    NonFinite { index: usize },
    /// The sort worker pool could not be started.
    ThreadPool { reason: String },
}

impl HullError {
    pub(crate) fn thread_pool(reason: impl fmt::Display) -> Self {
        Self::ThreadPool {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { count } => {
                write!(f, "convex hull requires at least 3 points, got {count}")
            }
            Self::NonFinite { index } => write!(f, "non-finite coordinate in point {index}"),
            Self::ThreadPool { reason } => write!(f, "failed to start sort workers: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}
