mod scoring_config;
mod solver_choice;

pub use scoring_config::ScoringConfig;
pub use solver_choice::{NearestCentroidParameters, SolverChoice, SolverKind};
