mod kernel_solver;
mod nearest_centroid;
mod solver_parameter;

pub use kernel_solver::{KernelModel, KernelSolver};
pub use nearest_centroid::{NearestCentroid, NearestCentroidModel};
pub use solver_parameter::SolverParameter;
