use crate::classifiers::{KernelSolver, SolverParameter};
use crate::core::Label;
use crate::error::ScoringError;
use crate::evaluation::cross_validation::FoldPlan;
use crate::evaluation::{BasicEstimator, Estimator};
use crate::kernels::TrainingProblem;

/// Outcome of one no-shuffle cross-validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidation {
    /// Predicted label of every sample, in sample order.
    pub predictions: Vec<Label>,
    pub accuracy: f64,
}

/// Runs order-preserving k-fold cross-validation of `problem`.
///
/// Fails only on fold-count preconditions, before the solver is touched.
pub fn cross_validate<S>(
    solver: &S,
    problem: &TrainingProblem,
    param: &SolverParameter,
    n_folds: usize,
) -> Result<CrossValidation, ScoringError>
where
    S: KernelSolver + ?Sized,
{
    let plan = FoldPlan::no_shuffle(problem.len(), n_folds)?;
    let predictions = solver.cross_validate_no_shuffle(problem, param, &plan);
    let accuracy = cross_validation_accuracy(problem.labels(), &predictions);
    Ok(CrossValidation {
        predictions,
        accuracy,
    })
}

/// Fraction of predictions equal to the ground truth.
pub fn cross_validation_accuracy(truth: &[Label], predictions: &[Label]) -> f64 {
    debug_assert_eq!(truth.len(), predictions.len());
    let mut hits = BasicEstimator::default();
    for (y, y_hat) in truth.iter().zip(predictions) {
        hits.add_indicator(y == y_hat);
    }
    if hits.count() == 0 {
        0.0
    } else {
        hits.estimation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::NearestCentroid;
    use crate::kernels::SimilarityMatrix;
    use crate::testing::dummies::{scenario_features, scenario_labels};
    use crate::testing::stubs::{ConstantSolver, CountingSolver, OracleSolver};
    use ndarray::Array2;

    fn scenario_problem() -> TrainingProblem {
        let s = SimilarityMatrix::from_features(scenario_features().view());
        TrainingProblem::precomputed(&s, &scenario_labels())
    }

    #[test]
    fn oracle_scores_one() {
        let p = scenario_problem();
        let cv = cross_validate(&OracleSolver, &p, &SolverParameter::precomputed(), 2).unwrap();
        assert_eq!(cv.accuracy, 1.0);
        assert_eq!(cv.predictions, p.labels());
    }

    #[test]
    fn constant_solver_scores_class_share() {
        let p = scenario_problem();
        let cv = cross_validate(&ConstantSolver(1), &p, &SolverParameter::precomputed(), 2)
            .unwrap();
        assert_eq!(cv.accuracy, 0.5);
    }

    #[test]
    fn scenario_accuracy_is_a_quarter_step() {
        let p = scenario_problem();
        let cv = cross_validate(&NearestCentroid, &p, &SolverParameter::precomputed(), 2)
            .unwrap();
        assert!((0.0..=1.0).contains(&cv.accuracy));
        assert!([0.0, 0.25, 0.5, 0.75, 1.0].contains(&cv.accuracy));
        assert_eq!(cv.predictions.len(), 4);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let x = Array2::from_shape_fn((12, 5), |(i, j)| {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            sign + ((i * 7 + j * 3) % 5) as f32 * 0.1
        });
        let labels: Vec<Label> = (0..12).map(|i| if i % 2 == 0 { 1 } else { -1 }).collect();
        let s = SimilarityMatrix::from_features(x.view());
        let p = TrainingProblem::precomputed(&s, &labels);
        let param = SolverParameter::precomputed();

        let a = cross_validate(&NearestCentroid, &p, &param, 4).unwrap();
        let b = cross_validate(&NearestCentroid, &p, &param, 4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.accuracy, 1.0);
    }

    #[test]
    fn one_fit_per_fold() {
        let p = scenario_problem();
        let (spy, handle) = CountingSolver::new();
        cross_validate(&spy, &p, &SolverParameter::precomputed(), 4).unwrap();
        assert_eq!(handle.fits(), 4);
    }

    #[test]
    fn rejects_more_folds_than_samples() {
        let p = scenario_problem();
        let err = cross_validate(&OracleSolver, &p, &SolverParameter::precomputed(), 5)
            .unwrap_err();
        assert!(matches!(err, ScoringError::FoldCountExceedsSamples { .. }));
    }

    #[test]
    fn accuracy_counts_matches() {
        assert_eq!(cross_validation_accuracy(&[1, 1, -1, -1], &[1, -1, -1, 1]), 0.5);
        assert_eq!(cross_validation_accuracy(&[], &[]), 0.0);
    }
}
