mod kernel_mode;
mod problem;
mod similarity;

pub use kernel_mode::KernelMode;
pub use problem::{KernelNode, KernelRow, SENTINEL_INDEX, TrainingProblem};
pub use similarity::SimilarityMatrix;
