use sysinfo::{
    Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System, UpdateKind, Users,
};
use thiserror::Error;

use super::process::ProcessRecord;

#[derive(Debug, Error)]
pub enum ProcessActionError {
    #[error("process {0} not found")]
    NotFound(u32),
    #[error("permission denied sending {signal} to process {pid}")]
    PermissionDenied { pid: u32, signal: &'static str },
    #[error("could not signal process {pid}")]
    Other { pid: u32 },
}

/// Enumerates live processes and terminates them by pid.
///
/// The registry owns its own `System` so process refreshes run on the slow
/// cycle without disturbing the metric sampler's CPU baseline. It knows
/// nothing about selection; callers hand it a pid.
pub struct ProcessRegistry {
    sys: System,
    users: Users,
    total_memory: u64,
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRegistry {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::everything(),
        );
        let total_memory = sys.total_memory();
        ProcessRegistry {
            sys,
            users: Users::new_with_refreshed_list(),
            total_memory,
        }
    }

    /// One coherent pass over the process table.
    ///
    /// Processes that exit mid-enumeration or that the current user may not
    /// inspect simply do not appear; partial visibility is normal.
    pub fn list(&mut self) -> Vec<ProcessRecord> {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing()
                .with_cpu()
                .with_memory()
                .with_user(UpdateKind::OnlyIfNotSet),
        );

        self.sys
            .processes()
            .values()
            .map(|process| ProcessRecord {
                pid: process.pid().as_u32(),
                name: process.name().to_string_lossy().to_string(),
                state: process.status().into(),
                cpu_percent: process.cpu_usage(),
                memory_percent: if self.total_memory > 0 {
                    (process.memory() as f32 / self.total_memory as f32) * 100.0
                } else {
                    0.0
                },
                owner: process
                    .user_id()
                    .and_then(|uid| self.users.get_user_by_id(uid))
                    .map(|user| user.name().to_string()),
            })
            .collect()
    }

    /// Requests termination and returns without waiting for the target to
    /// exit; callers observe the outcome on the next listing.
    pub fn terminate(&mut self, pid: u32, forceful: bool) -> Result<(), ProcessActionError> {
        let target = Pid::from_u32(pid);
        // Re-check liveness so a stale table cannot misreport success.
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[target]),
            true,
            ProcessRefreshKind::nothing(),
        );
        let process = self
            .sys
            .process(target)
            .ok_or(ProcessActionError::NotFound(pid))?;

        let (signal, signal_name) = if forceful {
            (Signal::Kill, "SIGKILL")
        } else {
            (Signal::Term, "SIGTERM")
        };

        match process.kill_with(signal) {
            Some(true) => {
                log::debug!("sent {signal_name} to pid {pid}");
                Ok(())
            }
            // The process exists but the OS refused the signal; for a live
            // target that is a rights problem.
            Some(false) => Err(ProcessActionError::PermissionDenied {
                pid,
                signal: signal_name,
            }),
            // Platform without per-signal support: unconditional kill is the
            // only primitive available.
            None => {
                if process.kill() {
                    log::debug!("killed pid {pid} (no signal support)");
                    Ok(())
                } else {
                    Err(ProcessActionError::Other { pid })
                }
            }
        }
    }
}
