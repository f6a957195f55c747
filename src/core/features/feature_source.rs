use crate::error::ScoringError;
use ndarray::{CowArray, Ix2};

/// Read-only access to the correlation feature vectors of every position.
///
/// For a position `p`, [`features`] yields an `n_trainings x feature_len`
/// matrix whose row `i` is sample `i`'s correlation vector at that position.
/// Implementations may borrow the rows in place or gather them into an owned
/// buffer; the consumer does not care which.
///
/// [`features`]: FeatureSource::features
pub trait FeatureSource: Sync {
    /// Number of positions this source can serve.
    fn n_positions(&self) -> usize;

    /// Number of training samples behind every position.
    fn n_trainings(&self) -> usize;

    /// Length `R` of every feature vector.
    fn feature_len(&self) -> usize;

    /// Dataset-wide id of the position at local index `position`.
    fn position_id(&self, position: usize) -> usize;

    /// Sample-by-feature matrix of one position.
    fn features(&self, position: usize) -> CowArray<'_, f32, Ix2>;

    /// Checks that every buffer agrees with the declared shape.
    fn validate(&self) -> Result<(), ScoringError>;
}
