use crate::kernels::KernelMode;

/// Per-job solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverParameter {
    pub kernel: KernelMode,
}

impl SolverParameter {
    pub fn new(kernel: KernelMode) -> Self {
        Self { kernel }
    }

    pub fn precomputed() -> Self {
        Self::new(KernelMode::Precomputed)
    }

    pub fn linear() -> Self {
        Self::new(KernelMode::Linear)
    }
}
