use std::cmp::Ordering;
use std::fmt;

/// One row of a process listing.
///
/// Records are coherent within a single enumeration pass and stale as soon
/// as the process table changes; the next listing is a fresh, independent
/// set. Pids may be recycled by the OS after process death.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub state: ProcessState,
    /// sysinfo's per-process figure; can exceed 100 on multi-core hosts.
    pub cpu_percent: f32,
    pub memory_percent: f32,
    /// `None` when the owner is not visible to the current user.
    pub owner: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    Sleeping,
    Idle,
    Stopped,
    Zombie,
    Dead,
    Unknown,
}

impl From<sysinfo::ProcessStatus> for ProcessState {
    fn from(status: sysinfo::ProcessStatus) -> Self {
        use sysinfo::ProcessStatus;
        match status {
            ProcessStatus::Run => ProcessState::Running,
            ProcessStatus::Sleep | ProcessStatus::UninterruptibleDiskSleep => {
                ProcessState::Sleeping
            }
            ProcessStatus::Idle => ProcessState::Idle,
            ProcessStatus::Stop | ProcessStatus::Tracing => ProcessState::Stopped,
            ProcessStatus::Zombie => ProcessState::Zombie,
            ProcessStatus::Dead => ProcessState::Dead,
            _ => ProcessState::Unknown,
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProcessState::Running => "running",
            ProcessState::Sleeping => "sleeping",
            ProcessState::Idle => "idle",
            ProcessState::Stopped => "stopped",
            ProcessState::Zombie => "zombie",
            ProcessState::Dead => "dead",
            ProcessState::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Cpu,
    Memory,
    Name,
    Pid,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            SortOrder::Cpu => SortOrder::Memory,
            SortOrder::Memory => SortOrder::Name,
            SortOrder::Name => SortOrder::Pid,
            SortOrder::Pid => SortOrder::Cpu,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Cpu => "cpu",
            SortOrder::Memory => "mem",
            SortOrder::Name => "name",
            SortOrder::Pid => "pid",
        }
    }
}

/// Stable presentation order for a listing; pid breaks all ties so the
/// table does not shuffle between refreshes.
pub fn sort_records(records: &mut [ProcessRecord], order: SortOrder) {
    records.sort_by(|a, b| {
        let primary = match order {
            SortOrder::Cpu => b
                .cpu_percent
                .partial_cmp(&a.cpu_percent)
                .unwrap_or(Ordering::Equal),
            SortOrder::Memory => b
                .memory_percent
                .partial_cmp(&a.memory_percent)
                .unwrap_or(Ordering::Equal),
            SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOrder::Pid => a.pid.cmp(&b.pid),
        };
        primary.then(a.pid.cmp(&b.pid))
    });
}

/// Best-effort selection carry-over: a selected pid survives a new listing
/// only if that pid is present in it; otherwise the selection empties.
pub fn reconcile_selection(selected: Option<u32>, records: &[ProcessRecord]) -> Option<u32> {
    selected.filter(|pid| records.iter().any(|r| r.pid == *pid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: u32, name: &str, cpu: f32, memory: f32) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            state: ProcessState::Running,
            cpu_percent: cpu,
            memory_percent: memory,
            owner: None,
        }
    }

    #[test]
    fn cpu_sort_is_descending_with_pid_tiebreak() {
        let mut records = vec![
            record(30, "idle_b", 0.0, 1.0),
            record(10, "busy", 75.0, 2.0),
            record(20, "idle_a", 0.0, 3.0),
        ];
        sort_records(&mut records, SortOrder::Cpu);
        let pids: Vec<u32> = records.iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![10, 20, 30]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let mut records = vec![
            record(1, "Zsh", 0.0, 0.0),
            record(2, "bash", 0.0, 0.0),
            record(3, "Fish", 0.0, 0.0),
        ];
        sort_records(&mut records, SortOrder::Name);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["bash", "Fish", "Zsh"]);
    }

    #[test]
    fn sort_order_cycles_through_all_variants() {
        let order = SortOrder::Cpu;
        assert_eq!(order.next(), SortOrder::Memory);
        assert_eq!(order.next().next(), SortOrder::Name);
        assert_eq!(order.next().next().next(), SortOrder::Pid);
        assert_eq!(order.next().next().next().next(), SortOrder::Cpu);
    }

    #[test]
    fn state_mapping_covers_common_statuses() {
        assert_eq!(
            ProcessState::from(sysinfo::ProcessStatus::Run),
            ProcessState::Running
        );
        assert_eq!(
            ProcessState::from(sysinfo::ProcessStatus::Zombie),
            ProcessState::Zombie
        );
        assert_eq!(ProcessState::Running.to_string(), "running");
    }
}
