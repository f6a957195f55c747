mod correlation_stack;
mod feature_source;
mod voxel_set;

pub use correlation_stack::{CorrelationBlock, CorrelationStack};
pub use feature_source::FeatureSource;
pub use voxel_set::{VoxelSet, VoxelUnit};
