use sysinfo::{Components, CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use super::platform;
use super::snapshot::{
    BatteryStatus, CpuMetrics, InterfaceStats, MemoryMetrics, MetricSnapshot, PartitionUsage,
};

/// Samples OS counters into [`MetricSnapshot`] values.
///
/// The sysinfo handles live for the sampler's lifetime so that CPU figures
/// are deltas between consecutive refreshes. Only the first `sample()`
/// blocks (for `MINIMUM_CPU_UPDATE_INTERVAL`) to establish a baseline;
/// afterwards the caller's refresh cadence is the measurement window.
pub struct MetricSampler {
    sys: System,
    components: Components,
    disks: Disks,
    networks: Networks,
    battery_manager: Option<battery::Manager>,
    primed: bool,
}

impl Default for MetricSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSampler {
    pub fn new() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );
        MetricSampler {
            sys,
            components: Components::new_with_refreshed_list(),
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            battery_manager: battery::Manager::new().ok(),
            primed: false,
        }
    }

    pub fn sample(&mut self) -> MetricSnapshot {
        if !self.primed {
            // CPU utilization is a delta between two counter readings; the
            // very first reading has nothing to diff against.
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
            self.primed = true;
        }
        self.sys.refresh_cpu_all();
        self.sys.refresh_memory();
        self.disks.refresh(true);
        self.networks.refresh(true);
        self.components.refresh(true);

        MetricSnapshot {
            cpu: self.sample_cpu(),
            memory: self.sample_memory(),
            disks: self.sample_disks(),
            disk_io: platform::disk_io_counters(),
            networks: self.sample_networks(),
            battery: self.sample_battery(),
        }
    }

    fn sample_cpu(&self) -> CpuMetrics {
        let cpus = self.sys.cpus();
        CpuMetrics {
            // Rounding in sysinfo can push a saturated core a hair past 100.
            global_percent: self.sys.global_cpu_usage().clamp(0.0, 100.0),
            per_core_percent: cpus
                .iter()
                .map(|cpu| cpu.cpu_usage().clamp(0.0, 100.0))
                .collect(),
            temperature_celsius: self.cpu_temperature(),
            load_average: platform::load_average(),
            brand: cpus
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_default(),
            physical_cores: System::physical_core_count(),
            frequency_mhz: cpus.first().map(|cpu| cpu.frequency()).unwrap_or(0),
        }
    }

    fn cpu_temperature(&self) -> Option<f32> {
        self.components
            .iter()
            .find(|comp| {
                let label = comp.label().to_lowercase();
                ["coretemp", "cpu", "tctl", "package"]
                    .iter()
                    .any(|tag| label.contains(tag))
            })
            .and_then(|comp| comp.temperature())
    }

    fn sample_memory(&self) -> MemoryMetrics {
        let total = self.sys.total_memory();
        let used = self.sys.used_memory();
        let swap_total = self.sys.total_swap();
        let swap_used = self.sys.used_swap();
        MemoryMetrics {
            total_bytes: total,
            available_bytes: self.sys.available_memory(),
            used_bytes: used,
            used_percent: percent_of(used, total),
            swap_total_bytes: swap_total,
            swap_used_bytes: swap_used,
            swap_free_bytes: self.sys.free_swap(),
            swap_used_percent: percent_of(swap_used, swap_total),
        }
    }

    fn sample_disks(&self) -> Vec<PartitionUsage> {
        self.disks
            .iter()
            .map(|disk| {
                let total = disk.total_space();
                let free = disk.available_space();
                let used = total.saturating_sub(free);
                PartitionUsage {
                    mount_point: disk.mount_point().to_string_lossy().to_string(),
                    fs_type: disk.file_system().to_string_lossy().to_string(),
                    total_bytes: total,
                    used_bytes: used,
                    free_bytes: free,
                    used_percent: percent_of(used, total),
                }
            })
            .collect()
    }

    fn sample_networks(&self) -> Vec<InterfaceStats> {
        let mut interfaces: Vec<InterfaceStats> = self
            .networks
            .iter()
            .map(|(name, data)| InterfaceStats {
                name: name.clone(),
                bytes_sent: data.total_transmitted(),
                bytes_received: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_received: data.total_packets_received(),
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        interfaces
    }

    fn sample_battery(&self) -> Option<BatteryStatus> {
        let manager = self.battery_manager.as_ref()?;
        let bat = manager.batteries().ok()?.next()?.ok()?;
        Some(BatteryStatus {
            percent: bat
                .state_of_charge()
                .get::<battery::units::ratio::percent>()
                .clamp(0.0, 100.0),
            charging: matches!(bat.state(), battery::State::Charging | battery::State::Full),
        })
    }
}

fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        0.0
    } else {
        (part as f32 / whole as f32) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_handles_zero_whole() {
        assert_eq!(percent_of(10, 0), 0.0);
        assert_eq!(percent_of(0, 10), 0.0);
        assert!((percent_of(1, 4) - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn snapshot_percents_are_in_range() {
        let mut sampler = MetricSampler::new();
        let snapshot = sampler.sample();

        assert!((0.0..=100.0).contains(&snapshot.cpu.global_percent));
        for core in &snapshot.cpu.per_core_percent {
            assert!((0.0..=100.0).contains(core));
        }
        assert!((0.0..=100.0).contains(&snapshot.memory.used_percent));
        assert!((0.0..=100.0).contains(&snapshot.memory.swap_used_percent));
        for disk in &snapshot.disks {
            assert!((0.0..=100.0).contains(&disk.used_percent));
        }
    }

    #[test]
    fn per_core_order_is_stable_between_samples() {
        let mut sampler = MetricSampler::new();
        let first = sampler.sample();
        let second = sampler.sample();
        assert_eq!(
            first.cpu.per_core_percent.len(),
            second.cpu.per_core_percent.len()
        );
    }

    #[test]
    fn missing_battery_is_none_not_error() {
        let mut sampler = MetricSampler::new();
        // Either value is legitimate; the call itself must not fail.
        let _ = sampler.sample().battery;
    }
}
