pub mod constant_solver;
pub mod counting_solver;
pub mod oracle_solver;

pub use constant_solver::ConstantSolver;
pub use counting_solver::{CountingHandle, CountingSolver};
pub use oracle_solver::OracleSolver;
