use std::process::Command;

use super::{DiskIoCounters, PlatformProbe};

pub struct Platform;

impl PlatformProbe for Platform {
    fn disk_io_counters() -> Option<DiskIoCounters> {
        // Whole-machine IO counters would need perfmon counters; reported
        // as unavailable.
        None
    }

    fn load_average() -> Option<(f64, f64, f64)> {
        // Windows has no load average; never synthesize one.
        None
    }

    fn system_vendor() -> Option<String> {
        cim_property("Win32_ComputerSystem", "Manufacturer")
    }

    fn system_model() -> Option<String> {
        cim_property("Win32_ComputerSystem", "Model")
    }

    fn motherboard() -> Option<String> {
        let manufacturer = cim_property("Win32_BaseBoard", "Manufacturer")?;
        let product = cim_property("Win32_BaseBoard", "Product")?;
        Some(format!("{manufacturer} {product}"))
    }

    fn ram_modules() -> Option<String> {
        let capacities = cim_property("Win32_PhysicalMemory", "Capacity")?;
        let modules: Vec<String> = capacities
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, capacity)| format!("module {}: {capacity} bytes", i + 1))
            .collect();
        if modules.is_empty() {
            None
        } else {
            Some(modules.join(", "))
        }
    }

    fn gpu_names() -> Option<String> {
        let names = cim_property("Win32_VideoController", "Name")?;
        let gpus: Vec<&str> = names
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if gpus.is_empty() {
            None
        } else {
            Some(gpus.join(", "))
        }
    }
}

/// One CIM class property per query, one value per line.
fn cim_property(class: &str, property: &str) -> Option<String> {
    let query = format!(
        "(Get-CimInstance -ClassName {class} -ErrorAction SilentlyContinue).{property}"
    );
    let output = Command::new("powershell")
        .args(["-NoProfile", "-NonInteractive", "-Command", &query])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}
