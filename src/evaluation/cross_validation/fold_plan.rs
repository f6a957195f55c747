use crate::error::ScoringError;
use std::ops::Range;

/// Contiguous, order-preserving k-fold partition of `0..n`.
///
/// Fold `f` holds `n / k + 1` samples when `f < n % k` and `n / k` otherwise,
/// so any remainder lands in the earliest folds. No randomization is
/// involved: equal `(n, k)` always yield the same partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldPlan {
    bounds: Vec<usize>,
}

impl FoldPlan {
    pub fn no_shuffle(n_samples: usize, n_folds: usize) -> Result<Self, ScoringError> {
        if n_folds < 2 {
            return Err(ScoringError::InvalidFoldCount(n_folds));
        }
        if n_folds > n_samples {
            return Err(ScoringError::FoldCountExceedsSamples {
                folds: n_folds,
                samples: n_samples,
            });
        }

        let base = n_samples / n_folds;
        let extra = n_samples % n_folds;
        let mut bounds = Vec::with_capacity(n_folds + 1);
        bounds.push(0);
        let mut end = 0;
        for f in 0..n_folds {
            end += base + usize::from(f < extra);
            bounds.push(end);
        }
        Ok(Self { bounds })
    }

    #[inline]
    pub fn n_folds(&self) -> usize {
        self.bounds.len() - 1
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.bounds[self.bounds.len() - 1]
    }

    /// Held-out sample range of fold `f`.
    pub fn fold(&self, f: usize) -> Range<usize> {
        self.bounds[f]..self.bounds[f + 1]
    }

    pub fn folds(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.bounds.windows(2).map(|w| w[0]..w[1])
    }

    /// Every sample outside fold `f`, in order.
    pub fn training_indices(&self, f: usize) -> Vec<usize> {
        let held_out = self.fold(f);
        (0..held_out.start)
            .chain(held_out.end..self.n_samples())
            .collect()
    }
}
