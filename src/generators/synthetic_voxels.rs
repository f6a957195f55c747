use crate::core::Label;
use crate::core::features::{CorrelationBlock, CorrelationStack, VoxelSet, VoxelUnit};
use crate::error::ScoringError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator of correlation-like voxel data for two conditions.
///
/// Samples alternate between class `1` (even index) and class `-1` (odd
/// index). Every value is uniform noise in `[-1, 1)`; at informative voxels
/// samples of class `1` are shifted by `+signal` and samples of class `-1`
/// by `-signal`. The same seed always yields the same values, whichever
/// layout is requested.
#[derive(Debug, Clone)]
pub struct SyntheticVoxels {
    n_trainings: usize,
    n_voxels: usize,
    row_len: usize,
    informative: Vec<usize>,
    signal: f32,
    seed: u64,
}

impl SyntheticVoxels {
    pub fn new(n_trainings: usize, n_voxels: usize, row_len: usize) -> Self {
        Self {
            n_trainings,
            n_voxels,
            row_len,
            informative: Vec::new(),
            signal: 1.5,
            seed: 0,
        }
    }

    pub fn informative(mut self, voxels: &[usize]) -> Self {
        self.informative = voxels.to_vec();
        self
    }

    pub fn signal(mut self, signal: f32) -> Self {
        self.signal = signal;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn labels(&self) -> Vec<Label> {
        (0..self.n_trainings)
            .map(|i| if i % 2 == 0 { 1 } else { -1 })
            .collect()
    }

    /// `n_voxels x n_trainings x row_len` values, voxel-major.
    fn cube(&self) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let labels = self.labels();
        let mut out = Vec::with_capacity(self.n_voxels * self.n_trainings * self.row_len);
        for v in 0..self.n_voxels {
            let shift = if self.informative.contains(&v) {
                self.signal
            } else {
                0.0
            };
            for &y in &labels {
                let offset = shift * y as f32;
                for _ in 0..self.row_len {
                    out.push(rng.random_range(-1.0f32..1.0) + offset);
                }
            }
        }
        out
    }

    /// One owned block per voxel; voxel ids are `0..n_voxels`.
    pub fn voxel_set(&self) -> Result<VoxelSet, ScoringError> {
        let per_voxel = self.n_trainings * self.row_len;
        let cube = self.cube();
        let voxels = cube
            .chunks(per_voxel.max(1))
            .take(self.n_voxels)
            .enumerate()
            .map(|(v, chunk)| VoxelUnit::new(v, self.n_trainings, self.row_len, chunk.to_vec()))
            .collect::<Result<Vec<_>, _>>()?;
        VoxelSet::new(self.n_trainings, self.row_len, voxels)
    }

    /// One labelled correlation block per sample covering voxels
    /// `first_voxel..first_voxel + n_voxels`.
    pub fn correlation_stack(&self, first_voxel: usize) -> Result<CorrelationStack, ScoringError> {
        let cube = self.cube();
        let labels = self.labels();
        let blocks = labels
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let mut values = Vec::with_capacity(self.n_voxels * self.row_len);
                for v in 0..self.n_voxels {
                    let start = (v * self.n_trainings + i) * self.row_len;
                    values.extend_from_slice(&cube[start..start + self.row_len]);
                }
                CorrelationBlock::new(y, values)
            })
            .collect();
        CorrelationStack::new(first_voxel, self.n_voxels, self.row_len, blocks)
    }
}
