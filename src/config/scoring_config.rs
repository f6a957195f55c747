use crate::config::SolverChoice;
use crate::error::ScoringError;
use crate::kernels::KernelMode;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_folds() -> usize {
    8
}

/// Run-level settings of a voxel scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScoringConfig {
    #[serde(default = "default_folds")]
    #[schemars(
        title = "Folds",
        description = "Number of contiguous, unshuffled cross-validation folds",
        range(min = 2),
        default = "default_folds"
    )]
    pub n_folds: usize,

    #[serde(default)]
    #[schemars(
        title = "Threads",
        description = "Worker threads for the voxel pool (None = rayon's global pool)"
    )]
    pub threads: Option<usize>,

    #[serde(default)]
    #[schemars(
        title = "Kernel",
        description = "How kernel values reach the solver"
    )]
    pub kernel: KernelMode,

    #[serde(default)]
    #[schemars(title = "Solver")]
    pub solver: SolverChoice,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            n_folds: default_folds(),
            threads: None,
            kernel: KernelMode::default(),
            solver: SolverChoice::default(),
        }
    }
}

impl ScoringConfig {
    pub fn schema() -> Schema {
        schema_for!(ScoringConfig)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ScoringError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScoringError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.n_folds < 2 {
            return Err(ScoringError::InvalidFoldCount(self.n_folds));
        }
        if self.threads == Some(0) {
            return Err(ScoringError::InvalidParameter(
                "threads must be > 0".into(),
            ));
        }
        Ok(())
    }
}
