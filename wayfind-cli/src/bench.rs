use std::fs;
use std::time::Instant;

use wayfind_core::SearchResult;

/// One instrumented search run. The engine itself stays a pure function;
/// timing and memory sampling happen entirely out here.
pub struct Measured {
    pub result: SearchResult,
    pub time_ms: f64,
    /// Resident-set delta across the call, in MiB. `None` when the
    /// platform offers no `/proc/self/status`.
    pub memory_mb: Option<f64>,
}

pub fn measure<F: FnOnce() -> SearchResult>(f: F) -> Measured {
    let before = rss_kib();
    let t0 = Instant::now();
    let result = f();
    let time_ms = t0.elapsed().as_secs_f64() * 1000.0;
    let after = rss_kib();

    let memory_mb = match (before, after) {
        (Some(b), Some(a)) => Some((a as f64 - b as f64) / 1024.0),
        _ => None,
    };
    Measured {
        result,
        time_ms,
        memory_mb,
    }
}

/// VmRSS of the current process in KiB, when the kernel exposes it.
fn rss_kib() -> Option<u64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    line.split_whitespace().nth(1)?.parse().ok()
}
