pub mod classifiers;
pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod generators;
pub mod kernels;
pub mod tasks;
pub mod telemetry;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::ScoringError;
pub use tasks::{RunStats, ScoringOptions, VoxelScorer, score_voxels};
