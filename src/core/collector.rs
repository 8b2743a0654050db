use sysinfo::{
    CpuRefreshKind, MemoryRefreshKind, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate,
    RefreshKind, System,
};

use super::process::{ProcessEntry, ProcessRecord, SkipReason};
use crate::error::{MonitorError, Result};

/// Source of system-wide and per-process metrics.
///
/// Each call is a fresh synchronous read. Failures that are specific to one
/// process are reported inside the returned entries; an `Err` means the
/// collector itself could not answer.
pub trait Collector {
    /// System-wide CPU utilisation, 0-100.
    fn cpu_percent(&mut self) -> Result<f32>;

    /// System-wide memory utilisation, 0-100.
    fn mem_percent(&mut self) -> Result<f32>;

    /// Every live process, in enumeration order.
    fn processes(&mut self) -> Result<Vec<ProcessEntry>>;
}

pub struct SysinfoCollector {
    system: System,
}

impl SysinfoCollector {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram())
            .with_processes(Self::process_refresh_kind());

        Self {
            system: System::new_with_specifics(refresh_kind),
        }
    }

    fn process_refresh_kind() -> ProcessRefreshKind {
        ProcessRefreshKind::nothing().with_cpu().with_memory()
    }

    fn total_memory(&mut self) -> Result<u64> {
        if self.system.total_memory() == 0 {
            self.system.refresh_memory();
        }
        match self.system.total_memory() {
            0 => Err(MonitorError::Collector("total memory reported as zero".into())),
            total => Ok(total),
        }
    }
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for SysinfoCollector {
    fn cpu_percent(&mut self) -> Result<f32> {
        self.system.refresh_cpu_usage();
        Ok(self.system.global_cpu_usage())
    }

    fn mem_percent(&mut self) -> Result<f32> {
        self.system.refresh_memory();
        let total = self.total_memory()?;
        let used = total.saturating_sub(self.system.available_memory());
        Ok(percent_of(used, total))
    }

    fn processes(&mut self) -> Result<Vec<ProcessEntry>> {
        let total = self.total_memory()?;

        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            Self::process_refresh_kind(),
        );

        let entries = self
            .system
            .processes()
            .iter()
            .map(|(pid, process)| {
                let pid = pid.as_u32();
                match process.status() {
                    ProcessStatus::Dead | ProcessStatus::Zombie => ProcessEntry::Skipped {
                        pid,
                        reason: SkipReason::Gone,
                    },
                    _ => ProcessEntry::Read(ProcessRecord::new(
                        pid,
                        process.name().to_string_lossy(),
                        process.cpu_usage(),
                        percent_of(process.memory(), total),
                    )),
                }
            })
            .collect();

        Ok(entries)
    }
}

fn percent_of(part: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_handles_zero_total() {
        assert_eq!(percent_of(10, 0), 0.0);
    }

    #[test]
    fn percent_of_scales_to_hundred() {
        assert_eq!(percent_of(1, 4), 25.0);
        assert_eq!(percent_of(4, 4), 100.0);
    }

    #[test]
    fn live_collector_reports_bounded_memory() {
        let mut collector = SysinfoCollector::new();
        let mem = collector.mem_percent().unwrap();
        assert!((0.0..=100.0).contains(&mem));
    }

    #[test]
    fn live_collector_sees_this_process() {
        let mut collector = SysinfoCollector::new();
        let me = std::process::id();
        let entries = collector.processes().unwrap();
        assert!(entries.iter().any(|e| matches!(e, ProcessEntry::Read(r) if r.pid == me)));
    }
}
