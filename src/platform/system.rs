use std::path::Path;

use sysinfo::{Disks, MINIMUM_CPU_UPDATE_INTERVAL, Pid, Signal, System};

use super::{ProcessInfo, ProcessTable, SystemMetrics};
use crate::error::ServiceError;

pub(crate) struct HostProcesses {
    sys: System,
}

impl HostProcesses {
    pub(crate) fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl ProcessTable for HostProcesses {
    fn list_processes(&mut self) -> Vec<ProcessInfo> {
        self.sys.refresh_processes();
        self.sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessInfo {
                name: process.name().to_string(),
                pid: pid.as_u32(),
            })
            .collect()
    }

    fn terminate(&mut self, pid: u32) -> Result<(), ServiceError> {
        let process = self
            .sys
            .process(Pid::from_u32(pid))
            .ok_or(ServiceError::Terminate { pid })?;
        // SIGTERM where supported, a hard kill elsewhere
        let sent = process
            .kill_with(Signal::Term)
            .unwrap_or_else(|| process.kill());
        if sent {
            Ok(())
        } else {
            Err(ServiceError::Terminate { pid })
        }
    }
}

pub(crate) struct HostMetrics {
    sys: System,
}

impl HostMetrics {
    pub(crate) fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl SystemMetrics for HostMetrics {
    /// Blocks for one sampling interval, like any two-point CPU reading
    fn cpu_percent(&mut self) -> Result<f32, ServiceError> {
        self.sys.refresh_cpu();
        std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        self.sys.refresh_cpu();
        if self.sys.cpus().is_empty() {
            return Err(ServiceError::Metrics("no CPU information"));
        }
        Ok(self.sys.global_cpu_info().cpu_usage())
    }

    fn memory_percent(&mut self) -> Result<f32, ServiceError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(ServiceError::Metrics("no memory information"));
        }
        Ok((self.sys.used_memory() as f64 / total as f64 * 100.0) as f32)
    }

    /// Usage of the root filesystem, or of the first disk when there is none
    fn disk_percent(&mut self) -> Result<f32, ServiceError> {
        let disks = Disks::new_with_refreshed_list();
        let disk = disks
            .list()
            .iter()
            .find(|d| d.mount_point() == Path::new("/"))
            .or_else(|| disks.list().first())
            .ok_or(ServiceError::Metrics("no disks found"))?;
        let total = disk.total_space();
        if total == 0 {
            return Err(ServiceError::Metrics("disk reports zero capacity"));
        }
        let used = total.saturating_sub(disk.available_space());
        Ok((used as f64 / total as f64 * 100.0) as f32)
    }
}
