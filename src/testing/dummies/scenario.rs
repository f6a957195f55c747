use crate::core::Label;
use ndarray::{Array2, array};

/// Four samples of length two: `(1,0), (0,1), (1,1), (0,0)`.
pub fn scenario_features() -> Array2<f32> {
    array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]]
}

pub fn scenario_labels() -> Vec<Label> {
    vec![1, 1, -1, -1]
}
