use crate::classifiers::{KernelSolver, NearestCentroid, NearestCentroidModel, SolverParameter};
use crate::kernels::TrainingProblem;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// [`NearestCentroid`] that counts how often it is fitted, across threads.
pub struct CountingSolver {
    inner: NearestCentroid,
    fits: Arc<AtomicUsize>,
}

#[derive(Clone)]
pub struct CountingHandle {
    fits: Arc<AtomicUsize>,
}

impl CountingHandle {
    pub fn fits(&self) -> usize {
        self.fits.load(Ordering::SeqCst)
    }
}

impl CountingSolver {
    pub fn new() -> (Self, CountingHandle) {
        let fits = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner: NearestCentroid,
                fits: Arc::clone(&fits),
            },
            CountingHandle { fits },
        )
    }
}

impl KernelSolver for CountingSolver {
    type Model = NearestCentroidModel;

    fn fit(
        &self,
        problem: &TrainingProblem,
        train: &[usize],
        param: &SolverParameter,
    ) -> NearestCentroidModel {
        self.fits.fetch_add(1, Ordering::SeqCst);
        self.inner.fit(problem, train, param)
    }
}
