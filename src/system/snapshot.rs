use super::platform::DiskIoCounters;

/// One immutable, point-in-time bundle of metric values.
///
/// A snapshot is built fresh on every sampling cycle and supersedes the
/// previous one; nothing is merged between cycles. Fields whose backing
/// sensor or counter does not exist on this platform are `None`.
#[derive(Clone, Debug)]
pub struct MetricSnapshot {
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub disks: Vec<PartitionUsage>,
    pub disk_io: Option<DiskIoCounters>,
    pub networks: Vec<InterfaceStats>,
    pub battery: Option<BatteryStatus>,
}

#[derive(Clone, Debug)]
pub struct CpuMetrics {
    /// Aggregate utilization across all cores, 0..=100.
    pub global_percent: f32,
    /// One value per logical core, in OS enumeration order.
    pub per_core_percent: Vec<f32>,
    /// First CPU-ish temperature sensor, °C.
    pub temperature_celsius: Option<f32>,
    /// 1/5/15 minute load averages; POSIX only.
    pub load_average: Option<(f64, f64, f64)>,
    pub brand: String,
    pub physical_cores: Option<usize>,
    pub frequency_mhz: u64,
}

#[derive(Clone, Debug)]
pub struct MemoryMetrics {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f32,
    pub swap_total_bytes: u64,
    pub swap_used_bytes: u64,
    pub swap_free_bytes: u64,
    pub swap_used_percent: f32,
}

/// Usage of one mounted filesystem.
#[derive(Clone, Debug)]
pub struct PartitionUsage {
    pub mount_point: String,
    pub fs_type: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f32,
}

/// Cumulative traffic counters for one interface, since boot.
///
/// Counters are totals, not rates; a consumer wanting rates must diff two
/// snapshots itself.
#[derive(Clone, Debug)]
pub struct InterfaceStats {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct BatteryStatus {
    pub percent: f32,
    pub charging: bool,
}

/// Static host facts, read once at startup.
#[derive(Clone, Debug)]
pub struct HostInfo {
    pub os_name: String,
    pub os_version: String,
    pub kernel_version: String,
    pub arch: String,
    pub hostname: String,
    pub boot_time_epoch: u64,
}
