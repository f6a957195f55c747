use crate::classifiers::{KernelModel, KernelSolver, SolverParameter};
use crate::core::Label;
use crate::kernels::TrainingProblem;

/// Kernel nearest-class-mean classifier.
///
/// For a sample `x` and class `c` with training members `T_c` the decision
/// value is
///
/// ```text
/// mean_{t in T_c} K(x, t) - 0.5 * mean_{s, t in T_c} K(s, t)
/// ```
///
/// i.e. the negated half squared distance to the class mean in kernel space,
/// up to a term that does not depend on `c`. The class with the largest value
/// wins; ties go to the class seen first in the training indices.
///
/// Fully deterministic, so cross-validation scores are reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestCentroid;

#[derive(Debug, Clone)]
struct ClassCentroid {
    label: Label,
    members: Vec<usize>,
    half_sq_norm: f64,
}

/// Fitted [`NearestCentroid`].
#[derive(Debug, Clone)]
pub struct NearestCentroidModel {
    centroids: Vec<ClassCentroid>,
}

impl NearestCentroidModel {
    /// Classes known to the model, in first-seen order.
    pub fn classes(&self) -> Vec<Label> {
        self.centroids.iter().map(|c| c.label).collect()
    }

    /// Decision value of `sample` for every class, in [`classes`] order.
    ///
    /// [`classes`]: NearestCentroidModel::classes
    pub fn decision_values(&self, problem: &TrainingProblem, sample: usize) -> Vec<f64> {
        self.centroids
            .iter()
            .map(|c| {
                let affinity: f64 = c.members.iter().map(|&t| problem.kernel(sample, t)).sum();
                affinity / c.members.len() as f64 - c.half_sq_norm
            })
            .collect()
    }
}

impl KernelModel for NearestCentroidModel {
    fn predict(&self, problem: &TrainingProblem, sample: usize) -> Label {
        let values = self.decision_values(problem, sample);
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, b)| v > b) {
                best = Some((i, v));
            }
        }
        match best {
            Some((i, _)) => self.centroids[i].label,
            None => self
                .centroids
                .first()
                .map(|c| c.label)
                .unwrap_or_default(),
        }
    }
}

impl KernelSolver for NearestCentroid {
    type Model = NearestCentroidModel;

    fn fit(
        &self,
        problem: &TrainingProblem,
        train: &[usize],
        param: &SolverParameter,
    ) -> Self::Model {
        debug_assert_eq!(param.kernel, problem.mode());

        let mut centroids: Vec<ClassCentroid> = Vec::with_capacity(2);
        for &t in train {
            let label = problem.labels()[t];
            match centroids.iter_mut().find(|c| c.label == label) {
                Some(c) => c.members.push(t),
                None => centroids.push(ClassCentroid {
                    label,
                    members: vec![t],
                    half_sq_norm: 0.0,
                }),
            }
        }

        for c in &mut centroids {
            let mut total = 0.0;
            for &s in &c.members {
                for &t in &c.members {
                    total += problem.kernel(s, t);
                }
            }
            let n = c.members.len() as f64;
            c.half_sq_norm = 0.5 * total / (n * n);
        }

        NearestCentroidModel { centroids }
    }
}
