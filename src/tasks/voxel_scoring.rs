use crate::classifiers::{KernelSolver, NearestCentroid};
use crate::config::ScoringConfig;
use crate::core::features::FeatureSource;
use crate::core::labels::collect_binary_labels;
use crate::core::{Label, LabelSource, NodeRole, ScoreRecord};
use crate::error::ScoringError;
use crate::evaluation::{FoldPlan, ScoreTable};
use crate::kernels::KernelMode;
use crate::tasks::job::{InFlightGauge, ScoringJob};
use crate::utils::system::{format_bytes, resident_memory_gb};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Observations from one [`VoxelScorer::run_with_stats`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Largest number of jobs alive at once during the run.
    pub peak_in_flight: usize,
    pub seconds: f64,
}

/// Knobs of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringOptions {
    pub n_folds: usize,
    pub threads: Option<usize>,
    pub kernel: KernelMode,
}

impl ScoringOptions {
    pub fn new(n_folds: usize) -> Self {
        Self {
            n_folds,
            threads: None,
            kernel: KernelMode::Precomputed,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_kernel(mut self, kernel: KernelMode) -> Self {
        self.kernel = kernel;
        self
    }
}

impl From<&ScoringConfig> for ScoringOptions {
    fn from(c: &ScoringConfig) -> Self {
        Self {
            n_folds: c.n_folds,
            threads: c.threads,
            kernel: c.kernel,
        }
    }
}

/// Scores every position of a feature source independently and in parallel.
///
/// All preconditions are checked up front; once jobs are dispatched nothing
/// can fail. Record `i` of the returned table always belongs to local
/// position `i`, whatever order the workers finish in.
///
/// Each run counts its own in-flight jobs, so concurrent runs on one scorer
/// never mix their peaks.
pub struct VoxelScorer<S: KernelSolver> {
    role: NodeRole,
    solver: S,
    options: ScoringOptions,
}

impl<S: KernelSolver> VoxelScorer<S> {
    pub fn new(role: NodeRole, solver: S, options: ScoringOptions) -> Result<Self, ScoringError> {
        if role.is_coordinator() {
            return Err(ScoringError::CoordinatorRole);
        }
        if options.n_folds < 2 {
            return Err(ScoringError::InvalidFoldCount(options.n_folds));
        }
        if options.threads == Some(0) {
            return Err(ScoringError::InvalidParameter(
                "threads must be > 0".into(),
            ));
        }

        Ok(Self {
            role,
            solver,
            options,
        })
    }

    pub fn run<F, L>(
        &self,
        features: &F,
        labels: &L,
        n_positions: usize,
        n_trainings: usize,
    ) -> Result<ScoreTable, ScoringError>
    where
        F: FeatureSource + ?Sized,
        L: LabelSource + ?Sized,
    {
        self.run_with_stats(features, labels, n_positions, n_trainings)
            .map(|(table, _)| table)
    }

    pub fn run_with_stats<F, L>(
        &self,
        features: &F,
        labels: &L,
        n_positions: usize,
        n_trainings: usize,
    ) -> Result<(ScoreTable, RunStats), ScoringError>
    where
        F: FeatureSource + ?Sized,
        L: LabelSource + ?Sized,
    {
        if n_positions > features.n_positions() {
            return Err(ScoringError::PositionCountMismatch {
                requested: n_positions,
                available: features.n_positions(),
            });
        }
        if features.n_trainings() != n_trainings {
            return Err(ScoringError::SampleCountMismatch {
                expected: n_trainings,
                found: features.n_trainings(),
            });
        }
        features.validate()?;
        let labels = collect_binary_labels(labels, n_trainings)?;
        let plan = FoldPlan::no_shuffle(n_trainings, self.options.n_folds)?;

        info!(
            role = ?self.role,
            positions = n_positions,
            trainings = n_trainings,
            feature_len = features.feature_len(),
            folds = self.options.n_folds,
            kernel = %self.options.kernel,
            "scoring voxels"
        );

        let gauge = InFlightGauge::new();
        let start = Instant::now();
        let records = match self.options.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                pool.install(|| self.score_all(features, &labels, n_positions, &plan, &gauge))
            }
            None => self.score_all(features, &labels, n_positions, &plan, &gauge),
        };
        let table = ScoreTable::from_records(records);
        let stats = RunStats {
            peak_in_flight: gauge.peak(),
            seconds: start.elapsed().as_secs_f64(),
        };

        info!(
            seconds = stats.seconds,
            peak_in_flight = stats.peak_in_flight,
            rss_gb = resident_memory_gb().unwrap_or(f64::NAN),
            "{}",
            table.summary()
        );
        Ok((table, stats))
    }

    fn score_all<F>(
        &self,
        features: &F,
        labels: &[Label],
        n_positions: usize,
        plan: &FoldPlan,
        gauge: &InFlightGauge,
    ) -> Vec<ScoreRecord>
    where
        F: FeatureSource + ?Sized,
    {
        (0..n_positions)
            .into_par_iter()
            .map(|position| {
                let job = ScoringJob::prepare(
                    features,
                    position,
                    labels,
                    self.options.kernel,
                    gauge.acquire(),
                );
                if position == 0 {
                    debug!(
                        footprint = %format_bytes(job.footprint_bytes()),
                        threads = rayon::current_num_threads(),
                        "per-job allocation"
                    );
                }
                let record = job.run(&self.solver, plan);
                trace!(voxel = record.position_id, accuracy = record.accuracy, "scored");
                record
            })
            .collect()
    }
}

/// Scores the first `n_positions` positions of `features` with the default
/// solver in precomputed-kernel mode.
pub fn score_voxels<F, L>(
    role: NodeRole,
    features: &F,
    labels: &L,
    n_positions: usize,
    n_trainings: usize,
    n_folds: usize,
) -> Result<ScoreTable, ScoringError>
where
    F: FeatureSource + ?Sized,
    L: LabelSource + ?Sized,
{
    VoxelScorer::new(role, NearestCentroid, ScoringOptions::new(n_folds))?.run(
        features,
        labels,
        n_positions,
        n_trainings,
    )
}
