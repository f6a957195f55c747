use crate::core::features::FeatureSource;
use crate::core::labels::{Label, LabelSource};
use crate::error::ScoringError;
use ndarray::{Array2, ArrayView1, CowArray, Ix2};

/// Correlation matrix of one training sample restricted to a block of voxels.
///
/// `values` is row-major `n_positions x row_len`: row `p` is the correlation
/// vector of voxel `first_voxel + p` against the whole brain.
#[derive(Debug, Clone)]
pub struct CorrelationBlock {
    pub label: Label,
    pub values: Vec<f32>,
}

impl CorrelationBlock {
    pub fn new(label: Label, values: Vec<f32>) -> Self {
        Self { label, values }
    }
}

/// Shared block buffer: one [`CorrelationBlock`] per training sample, all
/// covering the same voxel range with the same row length.
///
/// Feature rows are strided across blocks, so [`FeatureSource::features`]
/// gathers them into a fresh contiguous matrix.
#[derive(Debug, Clone)]
pub struct CorrelationStack {
    first_voxel: usize,
    n_positions: usize,
    row_len: usize,
    blocks: Vec<CorrelationBlock>,
}

impl CorrelationStack {
    pub fn new(
        first_voxel: usize,
        n_positions: usize,
        row_len: usize,
        blocks: Vec<CorrelationBlock>,
    ) -> Result<Self, ScoringError> {
        let stack = Self {
            first_voxel,
            n_positions,
            row_len,
            blocks,
        };
        stack.validate()?;
        Ok(stack)
    }
}

impl FeatureSource for CorrelationStack {
    fn n_positions(&self) -> usize {
        self.n_positions
    }

    fn n_trainings(&self) -> usize {
        self.blocks.len()
    }

    fn feature_len(&self) -> usize {
        self.row_len
    }

    fn position_id(&self, position: usize) -> usize {
        self.first_voxel + position
    }

    fn features(&self, position: usize) -> CowArray<'_, f32, Ix2> {
        let start = position * self.row_len;
        let end = start + self.row_len;
        let mut gathered = Array2::<f32>::zeros((self.blocks.len(), self.row_len));
        for (mut dst, block) in gathered.rows_mut().into_iter().zip(&self.blocks) {
            dst.assign(&ArrayView1::from(&block.values[start..end]));
        }
        CowArray::from(gathered)
    }

    fn validate(&self) -> Result<(), ScoringError> {
        let expected = self.n_positions * self.row_len;
        for (i, block) in self.blocks.iter().enumerate() {
            if block.values.len() != expected {
                return Err(ScoringError::FeatureLengthMismatch {
                    context: format!("correlation block of sample {i}"),
                    expected,
                    found: block.values.len(),
                });
            }
        }
        Ok(())
    }
}

impl LabelSource for CorrelationStack {
    fn len(&self) -> usize {
        self.blocks.len()
    }

    fn label(&self, index: usize) -> Label {
        self.blocks[index].label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> CorrelationStack {
        // two samples, three voxels starting at 10, rows of length 2
        CorrelationStack::new(
            10,
            3,
            2,
            vec![
                CorrelationBlock::new(1, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]),
                CorrelationBlock::new(-1, vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn gathers_strided_rows_per_position() {
        let s = stack();
        let f = s.features(1);
        assert_eq!(f.shape(), &[2, 2]);
        assert_eq!(f.row(0).to_vec(), vec![2.0, 3.0]);
        assert_eq!(f.row(1).to_vec(), vec![8.0, 9.0]);
    }

    #[test]
    fn position_ids_are_offset_by_first_voxel() {
        let s = stack();
        assert_eq!(s.position_id(0), 10);
        assert_eq!(s.position_id(2), 12);
    }

    #[test]
    fn labels_come_from_blocks() {
        let s = stack();
        assert_eq!(LabelSource::len(&s), 2);
        assert_eq!(s.label(0), 1);
        assert_eq!(s.label(1), -1);
    }

    #[test]
    fn rejects_short_block() {
        let err = CorrelationStack::new(
            0,
            2,
            2,
            vec![
                CorrelationBlock::new(0, vec![0.0; 4]),
                CorrelationBlock::new(1, vec![0.0; 3]),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::FeatureLengthMismatch {
                expected: 4,
                found: 3,
                ..
            }
        ));
    }
}
