use crate::core::features::FeatureSource;
use crate::error::ScoringError;
use ndarray::{Array2, CowArray, Ix2};

/// One voxel and the correlation vectors of every training sample at it.
#[derive(Debug, Clone)]
pub struct VoxelUnit {
    pub id: usize,
    pub corr_vecs: Array2<f32>,
}

impl VoxelUnit {
    /// Wraps a row-major `n_trainings x row_len` buffer.
    pub fn new(
        id: usize,
        n_trainings: usize,
        row_len: usize,
        corr_vecs: Vec<f32>,
    ) -> Result<Self, ScoringError> {
        let found = corr_vecs.len();
        let corr_vecs = Array2::from_shape_vec((n_trainings, row_len), corr_vecs).map_err(|_| {
            ScoringError::FeatureLengthMismatch {
                context: format!("voxel {id}"),
                expected: n_trainings * row_len,
                found,
            }
        })?;
        Ok(Self { id, corr_vecs })
    }
}

/// Voxels that each own their correlation vectors.
///
/// Rows are already contiguous, so [`FeatureSource::features`] borrows them.
#[derive(Debug, Clone)]
pub struct VoxelSet {
    n_trainings: usize,
    row_len: usize,
    voxels: Vec<VoxelUnit>,
}

impl VoxelSet {
    pub fn new(
        n_trainings: usize,
        row_len: usize,
        voxels: Vec<VoxelUnit>,
    ) -> Result<Self, ScoringError> {
        let set = Self {
            n_trainings,
            row_len,
            voxels,
        };
        set.validate()?;
        Ok(set)
    }
}

impl FeatureSource for VoxelSet {
    fn n_positions(&self) -> usize {
        self.voxels.len()
    }

    fn n_trainings(&self) -> usize {
        self.n_trainings
    }

    fn feature_len(&self) -> usize {
        self.row_len
    }

    fn position_id(&self, position: usize) -> usize {
        self.voxels[position].id
    }

    fn features(&self, position: usize) -> CowArray<'_, f32, Ix2> {
        CowArray::from(self.voxels[position].corr_vecs.view())
    }

    fn validate(&self) -> Result<(), ScoringError> {
        let expected = (self.n_trainings, self.row_len);
        for voxel in &self.voxels {
            if voxel.corr_vecs.dim() != expected {
                let (rows, cols) = voxel.corr_vecs.dim();
                return Err(ScoringError::FeatureLengthMismatch {
                    context: format!("voxel {}", voxel.id),
                    expected: self.n_trainings * self.row_len,
                    found: rows * cols,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrows_owned_rows() {
        let v = VoxelUnit::new(42, 2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let set = VoxelSet::new(2, 3, vec![v]).unwrap();
        let f = set.features(0);
        assert!(f.is_view());
        assert_eq!(f.row(1).to_vec(), vec![4.0, 5.0, 6.0]);
        assert_eq!(set.position_id(0), 42);
    }

    #[test]
    fn unit_rejects_wrong_buffer_length() {
        let err = VoxelUnit::new(7, 2, 3, vec![0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::FeatureLengthMismatch {
                expected: 6,
                found: 5,
                ..
            }
        ));
    }

    #[test]
    fn set_rejects_mixed_feature_lengths() {
        let a = VoxelUnit::new(0, 2, 3, vec![0.0; 6]).unwrap();
        let b = VoxelUnit::new(1, 2, 2, vec![0.0; 4]).unwrap();
        let err = VoxelSet::new(2, 3, vec![a, b]).unwrap_err();
        assert!(matches!(err, ScoringError::FeatureLengthMismatch { .. }));
    }
}
