use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("page {0:?} is not part of the corpus")]
    InvalidPage(String),

    #[error("damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f64),

    #[error("convergence threshold must be positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("number of samples must be at least 1")]
    InvalidSampleCount,

    #[error("the corpus has no pages")]
    EmptyGraph,

    #[error("no convergence after {iterations} iterations (largest change {delta})")]
    ConvergenceFailure { iterations: usize, delta: f64 },

    #[error("cannot build transition sampler: {0}")]
    Sampling(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk directory error: {0}")]
    Walk(#[from] walkdir::Error),
}
