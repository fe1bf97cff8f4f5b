use std::thread;
use std::time::Duration;

use vitals::system::registry::ProcessRegistry;
use vitals::system::sampler::MetricSampler;

#[test]
fn every_percent_field_is_within_bounds() {
    let mut sampler = MetricSampler::new();
    let snapshot = sampler.sample();

    assert!((0.0..=100.0).contains(&snapshot.cpu.global_percent));
    for core in &snapshot.cpu.per_core_percent {
        assert!((0.0..=100.0).contains(core), "core usage {core} out of range");
    }
    assert!((0.0..=100.0).contains(&snapshot.memory.used_percent));
    assert!((0.0..=100.0).contains(&snapshot.memory.swap_used_percent));
    for disk in &snapshot.disks {
        assert!(
            (0.0..=100.0).contains(&disk.used_percent),
            "partition {} usage out of range",
            disk.mount_point
        );
    }
    if let Some(battery) = &snapshot.battery {
        assert!((0.0..=100.0).contains(&battery.percent));
    }
}

#[test]
fn cumulative_counters_never_decrease() {
    let mut sampler = MetricSampler::new();
    let first = sampler.sample();
    thread::sleep(Duration::from_millis(300));
    let second = sampler.sample();

    for (a, b) in first.networks.iter().zip(second.networks.iter()) {
        if a.name != b.name {
            // Interface set changed mid-test; nothing to compare.
            continue;
        }
        assert!(b.bytes_sent >= a.bytes_sent, "{}: sent went backwards", a.name);
        assert!(
            b.bytes_received >= a.bytes_received,
            "{}: received went backwards",
            a.name
        );
        assert!(b.packets_sent >= a.packets_sent);
        assert!(b.packets_received >= a.packets_received);
    }

    if let (Some(io_a), Some(io_b)) = (&first.disk_io, &second.disk_io) {
        assert!(io_b.read_ops >= io_a.read_ops);
        assert!(io_b.write_ops >= io_a.write_ops);
        assert!(io_b.read_bytes >= io_a.read_bytes);
        assert!(io_b.write_bytes >= io_a.write_bytes);
    }
}

#[test]
fn two_samples_a_second_apart_are_independent_and_sane() {
    let mut sampler = MetricSampler::new();
    let first = sampler.sample();
    thread::sleep(Duration::from_secs(1));
    let second = sampler.sample();

    // Both readings are valid on their own; equality is not required and
    // not asserted either way.
    assert!((0.0..=100.0).contains(&first.cpu.global_percent));
    assert!((0.0..=100.0).contains(&second.cpu.global_percent));
    assert_eq!(
        first.cpu.per_core_percent.len(),
        second.cpu.per_core_percent.len()
    );
}

#[test]
fn missing_sensors_do_not_fail_the_cycle() {
    let mut sampler = MetricSampler::new();
    let snapshot = sampler.sample();

    // Temperature, load average, battery, and disk IO are all allowed to be
    // absent; sampling must still have produced a full snapshot around them.
    let _ = snapshot.cpu.temperature_celsius;
    let _ = snapshot.cpu.load_average;
    let _ = snapshot.battery;
    let _ = snapshot.disk_io;
    assert!(snapshot.memory.total_bytes > 0);
    assert!(!snapshot.cpu.per_core_percent.is_empty());
}

#[test]
fn back_to_back_listings_agree_on_stable_pids() {
    let mut registry = ProcessRegistry::new();
    let first = registry.list();
    let second = registry.list();

    // This process does not restart between the calls, so it must be in
    // both listings with the same identity.
    let me = std::process::id();
    assert!(first.iter().any(|r| r.pid == me));
    assert!(second.iter().any(|r| r.pid == me));

    // On a quiet system the two sets are near-identical; at minimum every
    // long-lived pid from the first listing that is still alive appears in
    // the second. pid 1 (or the session leader) is the safest witness.
    let long_lived: Vec<u32> = first
        .iter()
        .map(|r| r.pid)
        .filter(|pid| *pid == 1 || *pid == me)
        .collect();
    for pid in long_lived {
        assert!(second.iter().any(|r| r.pid == pid));
    }
}

#[test]
fn listing_owners_are_optional_not_errors() {
    let mut registry = ProcessRegistry::new();
    let records = registry.list();
    assert!(!records.is_empty());
    // Some records may have no visible owner; that must not have aborted
    // the enumeration.
    for record in &records {
        assert!(record.pid > 0);
        assert!(record.memory_percent >= 0.0);
    }
}
