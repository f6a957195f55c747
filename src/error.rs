use thiserror::Error;

/// Precondition and setup failures of a scoring run.
///
/// Every variant is fatal for the run: it is reported before any job is
/// dispatched and never retried.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("the coordinator node isn't supposed to do classification jobs")]
    CoordinatorRole,

    #[error("fold count must be at least 2, got {0}")]
    InvalidFoldCount(usize),

    #[error("fold count {folds} exceeds the number of training samples {samples}")]
    FoldCountExceedsSamples { folds: usize, samples: usize },

    #[error("expected {expected} training samples, feature source holds {found}")]
    SampleCountMismatch { expected: usize, found: usize },

    #[error("expected {expected} labels, found {found}")]
    LabelCountMismatch { expected: usize, found: usize },

    #[error("labels must take at most two class values, found {0:?}")]
    TooManyClasses(Vec<i8>),

    #[error("feature length mismatch at {context}: expected {expected}, found {found}")]
    FeatureLengthMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("requested {requested} positions, source provides {available}")]
    PositionCountMismatch { requested: usize, available: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
