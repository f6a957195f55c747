use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// How a solver obtains kernel values from a [`TrainingProblem`].
///
/// [`TrainingProblem`]: crate::kernels::TrainingProblem
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KernelMode {
    /// Rows carry a sample ordinal followed by the similarity row.
    #[default]
    Precomputed,
    /// Rows carry raw feature vectors; kernel is their dot product.
    Linear,
}
