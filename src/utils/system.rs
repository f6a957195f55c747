/// Resident set size of the current process in GiB, where the platform
/// exposes it.
#[inline]
pub fn resident_memory_gb() -> Option<f64> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| parse_vm_rss_gb(&status))
    }

    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Extracts `VmRSS` (reported in kB) from a `/proc/<pid>/status` dump.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_vm_rss_gb(status: &str) -> Option<f64> {
    status
        .lines()
        .filter_map(|line| line.strip_prefix("VmRSS:"))
        .find_map(|rest| rest.split_whitespace().find_map(|t| t.parse::<u64>().ok()))
        .map(|kb| kb as f64 / (1024.0 * 1024.0))
}

/// Human-readable byte count, e.g. `"1.50 MiB"`.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}
