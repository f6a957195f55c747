use ndarray::{Array2, ArrayView2};

/// Dense `N x N` Gram matrix of one job's samples.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    values: Array2<f32>,
}

impl SimilarityMatrix {
    /// `S = X * X^T` for the `N x R` feature matrix `X`.
    pub fn from_features(features: ArrayView2<'_, f32>) -> Self {
        Self {
            values: features.dot(&features.t()),
        }
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.values[[i, j]]
    }

    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.values.view()
    }

    /// Heap bytes held by the matrix.
    pub fn heap_bytes(&self) -> usize {
        self.values.len() * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn pairwise_dot_products() {
        let x = array![[1.0f32, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]];
        let s = SimilarityMatrix::from_features(x.view());
        let want = array![
            [1.0f32, 0.0, 1.0, 0.0],
            [0.0, 1.0, 1.0, 0.0],
            [1.0, 1.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 0.0]
        ];
        assert_eq!(s.view(), want.view());
    }

    #[test]
    fn symmetric_with_non_negative_diagonal() {
        let x = Array2::from_shape_fn((7, 13), |(i, j)| ((i * 31 + j * 17) % 11) as f32 - 5.3);
        let s = SimilarityMatrix::from_features(x.view());
        assert_eq!(s.n_samples(), 7);
        for i in 0..7 {
            assert!(s.get(i, i) >= 0.0);
            for j in 0..7 {
                assert_abs_diff_eq!(s.get(i, j), s.get(j, i), epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn heap_bytes_counts_every_entry() {
        let x = Array2::<f32>::zeros((5, 2));
        let s = SimilarityMatrix::from_features(x.view());
        assert_eq!(s.heap_bytes(), 25 * 4);
    }
}
