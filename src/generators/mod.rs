mod synthetic_voxels;

pub use synthetic_voxels::SyntheticVoxels;
