use crate::classifiers::{KernelModel, KernelSolver, SolverParameter};
use crate::core::Label;
use crate::kernels::TrainingProblem;

/// Always predicts the wrapped label.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSolver(pub Label);

impl KernelModel for ConstantSolver {
    fn predict(&self, _: &TrainingProblem, _: usize) -> Label {
        self.0
    }
}

impl KernelSolver for ConstantSolver {
    type Model = ConstantSolver;

    fn fit(&self, _: &TrainingProblem, _: &[usize], _: &SolverParameter) -> ConstantSolver {
        *self
    }
}
