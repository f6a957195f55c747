use crate::classifiers::{KernelSolver, SolverParameter};
use crate::core::features::FeatureSource;
use crate::core::{Label, ScoreRecord};
use crate::evaluation::{FoldPlan, cross_validation_accuracy};
use crate::kernels::{KernelMode, SimilarityMatrix, TrainingProblem};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts jobs alive at the same time and remembers the peak.
///
/// A job holds a [`JobPermit`] from preparation until its record is produced;
/// dropping the permit releases the slot.
#[derive(Debug, Default)]
pub struct InFlightGauge {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl InFlightGauge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> JobPermit<'_> {
        let now = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        self.peak.fetch_max(now, Ordering::AcqRel);
        JobPermit { gauge: self }
    }

    pub fn current(&self) -> usize {
        self.current.load(Ordering::Acquire)
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct JobPermit<'g> {
    gauge: &'g InFlightGauge,
}

impl Drop for JobPermit<'_> {
    fn drop(&mut self) {
        self.gauge.current.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Everything one position needs to be scored, owned for exactly the job's
/// lifetime.
///
/// [`ScoringJob::run`] consumes the job, so the similarity matrix, the
/// problem's label and node arrays and the solver parameter are all dropped
/// once the record exists.
#[derive(Debug)]
pub struct ScoringJob<'g> {
    position_id: usize,
    similarity: Option<SimilarityMatrix>,
    problem: TrainingProblem,
    param: SolverParameter,
    _permit: JobPermit<'g>,
}

impl<'g> ScoringJob<'g> {
    pub fn prepare<F>(
        source: &F,
        position: usize,
        labels: &[Label],
        kernel: KernelMode,
        permit: JobPermit<'g>,
    ) -> Self
    where
        F: FeatureSource + ?Sized,
    {
        let features = source.features(position);
        let (similarity, problem) = match kernel {
            KernelMode::Precomputed => {
                let similarity = SimilarityMatrix::from_features(features.view());
                let problem = TrainingProblem::precomputed(&similarity, labels);
                (Some(similarity), problem)
            }
            KernelMode::Linear => (None, TrainingProblem::linear(features.view(), labels)),
        };

        Self {
            position_id: source.position_id(position),
            similarity,
            problem,
            param: SolverParameter::new(kernel),
            _permit: permit,
        }
    }

    pub fn position_id(&self) -> usize {
        self.position_id
    }

    pub fn problem(&self) -> &TrainingProblem {
        &self.problem
    }

    /// Heap bytes owned by this job.
    pub fn footprint_bytes(&self) -> usize {
        self.similarity.as_ref().map_or(0, SimilarityMatrix::heap_bytes) + self.problem.heap_bytes()
    }

    pub fn run<S>(self, solver: &S, plan: &FoldPlan) -> ScoreRecord
    where
        S: KernelSolver + ?Sized,
    {
        let predictions = solver.cross_validate_no_shuffle(&self.problem, &self.param, plan);
        let accuracy = cross_validation_accuracy(self.problem.labels(), &predictions);
        ScoreRecord::new(self.position_id, accuracy)
    }
}
