use std::process::Command;

use super::{DiskIoCounters, PlatformProbe};

pub struct Platform;

impl PlatformProbe for Platform {
    fn disk_io_counters() -> Option<DiskIoCounters> {
        // No stable textual source for whole-machine IO counters without
        // IOKit; reported as unavailable.
        None
    }

    fn load_average() -> Option<(f64, f64, f64)> {
        let load = sysinfo::System::load_average();
        Some((load.one, load.five, load.fifteen))
    }

    fn system_vendor() -> Option<String> {
        // Apple hardware only runs macOS; the vendor string lives in the
        // machdep tree.
        command_stdout("sysctl", &["-n", "machdep.cpu.brand_string"])
            .map(|_| "Apple".to_string())
    }

    fn system_model() -> Option<String> {
        command_stdout("sysctl", &["-n", "hw.model"])
    }

    fn motherboard() -> Option<String> {
        // Logic board identity is not separately exposed; the model
        // identifier is the closest public fact.
        command_stdout("sysctl", &["-n", "hw.model"])
    }

    fn ram_modules() -> Option<String> {
        let out = command_stdout("system_profiler", &["SPMemoryDataType"])?;
        let sizes: Vec<String> = out
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix("Size: "))
            .enumerate()
            .map(|(i, size)| format!("module {}: {size}", i + 1))
            .collect();
        if sizes.is_empty() {
            None
        } else {
            Some(sizes.join(", "))
        }
    }

    fn gpu_names() -> Option<String> {
        let out = command_stdout("system_profiler", &["SPDisplaysDataType"])?;
        let gpus: Vec<&str> = out
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix("Chipset Model: "))
            .collect();
        if gpus.is_empty() {
            None
        } else {
            Some(gpus.join(", "))
        }
    }
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}
