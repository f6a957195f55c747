pub mod cross_validation;
mod estimators;
mod score_table;

pub use cross_validation::{CrossValidation, FoldPlan, cross_validate, cross_validation_accuracy};
pub use estimators::{BasicEstimator, Estimator};
pub use score_table::{ScoreFormat, ScoreSummary, ScoreTable};
