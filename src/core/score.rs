use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Cross-validated accuracy of one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub position_id: usize,
    pub accuracy: f64,
}

impl ScoreRecord {
    #[inline]
    pub fn new(position_id: usize, accuracy: f64) -> Self {
        Self {
            position_id,
            accuracy,
        }
    }
}

impl Display for ScoreRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "voxel={}, acc={:.6}", self.position_id, self.accuracy)
    }
}
