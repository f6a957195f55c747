use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT_GUARD: OnceLock<bool> = OnceLock::new();

/// Installs the process-wide fmt subscriber, filtered by `RUST_LOG`
/// (default `info`).
///
/// Safe to call more than once; only the first call installs anything.
/// Returns `false` when another subscriber was already in place.
pub fn init_tracing() -> bool {
    *INIT_GUARD.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_stable() {
        let first = init_tracing();
        assert_eq!(init_tracing(), first);
    }
}
