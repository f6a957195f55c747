mod job;
mod voxel_scoring;

pub use job::{InFlightGauge, JobPermit, ScoringJob};
pub use voxel_scoring::{RunStats, ScoringOptions, VoxelScorer, score_voxels};
