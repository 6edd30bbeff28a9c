//! Process memory queries.
//!
//! Implemented with `getrusage` from libc on unix targets. Other platforms
//! report no value, and callers display "n/a".

#[cfg(target_os = "macos")]
const MAXRSS_UNIT: u64 = 1; // bytes
#[cfg(all(unix, not(target_os = "macos")))]
const MAXRSS_UNIT: u64 = 1024; // kilobytes

/// Peak resident set size of the current process in bytes
#[cfg(unix)]
pub fn peak_memory_bytes() -> Option<u64> {
    unsafe {
        let mut usage: libc::rusage = std::mem::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, &mut usage) != 0 {
            return None;
        }
        u64::try_from(usage.ru_maxrss)
            .ok()
            .map(|rss| rss * MAXRSS_UNIT)
    }
}

#[cfg(not(unix))]
pub fn peak_memory_bytes() -> Option<u64> {
    None
}

/// Peak resident set size in whole mebibytes
pub fn peak_memory_mb() -> Option<u64> {
    peak_memory_bytes().map(|bytes| bytes / 1024 / 1024)
}
