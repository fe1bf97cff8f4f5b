use sysinfo::System;

use super::platform;
use super::snapshot::HostInfo;

/// Shown wherever a one-shot lookup could not produce a value.
pub const UNAVAILABLE: &str = "unavailable";

/// Static hardware identity, fetched once at startup.
///
/// Each field is resolved independently; a failed lookup degrades that one
/// field to [`UNAVAILABLE`] and never aborts startup. Nothing here is
/// refreshed afterwards; this data does not change while the host is up.
#[derive(Clone, Debug)]
pub struct HardwareInventory {
    pub manufacturer: String,
    pub model: String,
    pub motherboard: String,
    pub ram_modules: String,
    pub gpus: String,
    pub battery: String,
}

impl HardwareInventory {
    pub fn detect() -> Self {
        HardwareInventory {
            manufacturer: sentinel(platform::system_vendor()),
            model: sentinel(platform::system_model()),
            motherboard: sentinel(platform::motherboard()),
            ram_modules: sentinel(platform::ram_modules()),
            gpus: sentinel(platform::gpu_names()),
            battery: sentinel(battery_description()),
        }
    }
}

pub fn detect_host() -> HostInfo {
    HostInfo {
        os_name: sentinel(System::name()),
        os_version: sentinel(System::os_version()),
        kernel_version: sentinel(System::kernel_version()),
        arch: System::cpu_arch(),
        hostname: sentinel(System::host_name()),
        boot_time_epoch: System::boot_time(),
    }
}

fn battery_description() -> Option<String> {
    let manager = battery::Manager::new().ok()?;
    let bat = manager.batteries().ok()?.next()?.ok()?;
    match (bat.vendor(), bat.model()) {
        (Some(vendor), Some(model)) => Some(format!("{vendor} {model}")),
        (Some(vendor), None) => Some(vendor.to_string()),
        (None, Some(model)) => Some(model.to_string()),
        (None, None) => Some("present".to_string()),
    }
}

fn sentinel(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_never_panics_and_fills_every_field() {
        let inventory = HardwareInventory::detect();
        for field in [
            &inventory.manufacturer,
            &inventory.model,
            &inventory.motherboard,
            &inventory.ram_modules,
            &inventory.gpus,
            &inventory.battery,
        ] {
            assert!(!field.is_empty());
        }
    }

    #[test]
    fn blank_lookups_collapse_to_sentinel() {
        assert_eq!(sentinel(None), UNAVAILABLE);
        assert_eq!(sentinel(Some("  ".to_string())), UNAVAILABLE);
        assert_eq!(sentinel(Some("ASUS".to_string())), "ASUS");
    }

    #[test]
    fn host_info_has_boot_time() {
        let host = detect_host();
        assert!(host.boot_time_epoch > 0);
        assert!(!host.arch.is_empty());
    }
}
