mod executor;
mod fold_plan;

pub use executor::{CrossValidation, cross_validate, cross_validation_accuracy};
pub use fold_plan::FoldPlan;
