use crate::classifiers::SolverParameter;
use crate::core::Label;
use crate::evaluation::FoldPlan;
use crate::kernels::TrainingProblem;

/// Classifier fitted on a subset of a [`TrainingProblem`]'s samples.
pub trait KernelModel {
    /// Predicts the label of sample `sample` of the same problem.
    fn predict(&self, problem: &TrainingProblem, sample: usize) -> Label;
}

/// Solver that fits classifiers over the kernel values of a problem.
///
/// Implementations are shared read-only across worker threads, hence `Sync`.
pub trait KernelSolver: Sync {
    type Model: KernelModel;

    /// Fits on the samples listed in `train`.
    fn fit(
        &self,
        problem: &TrainingProblem,
        train: &[usize],
        param: &SolverParameter,
    ) -> Self::Model;

    /// Predicts every sample once, each by a model fitted without its fold.
    ///
    /// Folds follow `plan` exactly; there is no shuffling.
    fn cross_validate_no_shuffle(
        &self,
        problem: &TrainingProblem,
        param: &SolverParameter,
        plan: &FoldPlan,
    ) -> Vec<Label> {
        let mut predictions = vec![Label::default(); problem.len()];
        for f in 0..plan.n_folds() {
            let train = plan.training_indices(f);
            let model = self.fit(problem, &train, param);
            for i in plan.fold(f) {
                predictions[i] = model.predict(problem, i);
            }
        }
        predictions
    }
}
