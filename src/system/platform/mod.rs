/// Whole-machine disk IO counters, cumulative since boot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiskIoCounters {
    pub read_ops: u64,
    pub write_ops: u64,
    pub read_bytes: u64,
    pub write_bytes: u64,
}

/// Per-OS lookups the portable stack cannot provide.
///
/// Every probe returns `None` on any failure: missing file, missing
/// command, missing permission, missing hardware. Callers translate that
/// into the user-facing "unavailable" sentinel.
pub trait PlatformProbe {
    fn disk_io_counters() -> Option<DiskIoCounters>;
    fn load_average() -> Option<(f64, f64, f64)>;
    fn system_vendor() -> Option<String>;
    fn system_model() -> Option<String>;
    fn motherboard() -> Option<String>;
    fn ram_modules() -> Option<String>;
    fn gpu_names() -> Option<String>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn disk_io_counters() -> Option<DiskIoCounters> {
    platform_impl::Platform::disk_io_counters()
}

pub fn load_average() -> Option<(f64, f64, f64)> {
    platform_impl::Platform::load_average()
}

pub fn system_vendor() -> Option<String> {
    platform_impl::Platform::system_vendor()
}

pub fn system_model() -> Option<String> {
    platform_impl::Platform::system_model()
}

pub fn motherboard() -> Option<String> {
    platform_impl::Platform::motherboard()
}

pub fn ram_modules() -> Option<String> {
    platform_impl::Platform::ram_modules()
}

pub fn gpu_names() -> Option<String> {
    platform_impl::Platform::gpu_names()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probes_do_not_panic() {
        let _ = disk_io_counters();
        let _ = load_average();
        let _ = system_vendor();
        let _ = system_model();
        let _ = motherboard();
        let _ = ram_modules();
        let _ = gpu_names();
    }

    #[test]
    fn disk_io_counters_are_plausible_when_present() {
        if let Some(io) = disk_io_counters() {
            // A machine that has completed reads has read bytes to show for it.
            if io.read_bytes > 0 {
                assert!(io.read_ops > 0);
            }
        }
    }
}
