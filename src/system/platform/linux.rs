use std::collections::HashSet;
use std::process::Command;

use super::{DiskIoCounters, PlatformProbe};

pub struct Platform;

const SECTOR_SIZE: u64 = 512;

impl PlatformProbe for Platform {
    fn disk_io_counters() -> Option<DiskIoCounters> {
        // /proc/diskstats lists whole devices and their partitions; summing
        // both would double-count, so only devices present in /sys/block
        // (top-level block devices) contribute.
        let devices: HashSet<String> = std::fs::read_dir("/sys/block")
            .ok()?
            .flatten()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| !name.starts_with("loop") && !name.starts_with("ram"))
            .collect();

        let stats = std::fs::read_to_string("/proc/diskstats").ok()?;
        let mut totals = DiskIoCounters::default();
        let mut matched = false;

        for line in stats.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            // major minor name reads_completed reads_merged sectors_read
            // time_reading writes_completed writes_merged sectors_written ...
            if fields.len() < 10 || !devices.contains(fields[2]) {
                continue;
            }
            let read_ops: u64 = fields[3].parse().ok()?;
            let sectors_read: u64 = fields[5].parse().ok()?;
            let write_ops: u64 = fields[7].parse().ok()?;
            let sectors_written: u64 = fields[9].parse().ok()?;

            totals.read_ops += read_ops;
            totals.write_ops += write_ops;
            totals.read_bytes += sectors_read * SECTOR_SIZE;
            totals.write_bytes += sectors_written * SECTOR_SIZE;
            matched = true;
        }

        matched.then_some(totals)
    }

    fn load_average() -> Option<(f64, f64, f64)> {
        let load = sysinfo::System::load_average();
        Some((load.one, load.five, load.fifteen))
    }

    fn system_vendor() -> Option<String> {
        read_dmi("sys_vendor")
    }

    fn system_model() -> Option<String> {
        read_dmi("product_name")
    }

    fn motherboard() -> Option<String> {
        let vendor = read_dmi("board_vendor")?;
        let name = read_dmi("board_name")?;
        Some(format!("{vendor} {name}"))
    }

    fn ram_modules() -> Option<String> {
        // Needs root; a permission failure falls through to None like any
        // other missing source.
        let out = command_stdout("dmidecode", &["--type", "memory"])?;
        let modules: Vec<String> = out
            .lines()
            .filter_map(|line| line.trim().strip_prefix("Size: "))
            .filter(|size| !size.starts_with("No Module"))
            .enumerate()
            .map(|(i, size)| format!("module {}: {size}", i + 1))
            .collect();
        if modules.is_empty() {
            None
        } else {
            Some(modules.join(", "))
        }
    }

    fn gpu_names() -> Option<String> {
        let out = command_stdout("lspci", &["-nn"])?;
        let gpus: Vec<&str> = out
            .lines()
            .filter(|line| line.contains("VGA") || line.contains("3D controller"))
            .filter_map(|line| line.split(": ").last())
            .collect();
        if gpus.is_empty() {
            None
        } else {
            Some(gpus.join(", "))
        }
    }
}

fn read_dmi(entry: &str) -> Option<String> {
    let path = format!("/sys/devices/virtual/dmi/id/{entry}");
    let value = std::fs::read_to_string(path).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
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
