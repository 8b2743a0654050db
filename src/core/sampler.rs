use std::time::Instant;

use tracing::{debug, info, trace};

use super::collector::Collector;
use super::history::RollingHistory;
use super::process::{ProcessEntry, ProcessRecord};
use crate::config::MonitorConfig;
use crate::error::Result;

/// Borrowed view of the sampler's state after a tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub cpu_history: &'a RollingHistory,
    pub mem_history: &'a RollingHistory,
    pub ranked: &'a [ProcessRecord],
}

/// Owns the rolling histories and the ranked process list, and refreshes
/// them from a [`Collector`] once per tick.
pub struct Sampler<C> {
    collector: C,
    cpu_history: RollingHistory,
    mem_history: RollingHistory,
    ranked: Vec<ProcessRecord>,
    top_n: usize,
    skipped_last_tick: usize,
    ticks: u64,
}

impl<C: Collector> Sampler<C> {
    pub fn new(collector: C, config: &MonitorConfig) -> Self {
        Self {
            collector,
            cpu_history: RollingHistory::new(config.history_capacity),
            mem_history: RollingHistory::new(config.history_capacity),
            ranked: Vec::new(),
            top_n: config.top_n,
            skipped_last_tick: 0,
            ticks: 0,
        }
    }

    /// Sample the system once: extend both histories and rebuild the ranked
    /// process list (top `top_n` by memory share, descending).
    ///
    /// Processes the collector could not read are left out. An error from a
    /// system-wide query aborts the tick before any state changes.
    pub fn tick(&mut self) -> Result<Snapshot<'_>> {
        let started = Instant::now();

        let cpu = self.collector.cpu_percent()?;
        let mem = self.collector.mem_percent()?;
        let entries = self.collector.processes()?;

        self.cpu_history.push(cpu);
        self.mem_history.push(mem);

        let total = entries.len();
        let mut records: Vec<ProcessRecord> = entries
            .into_iter()
            .filter_map(|entry| match entry {
                ProcessEntry::Read(record) => Some(record),
                ProcessEntry::Skipped { pid, reason } => {
                    trace!(pid, %reason, "skipping process");
                    None
                }
            })
            .collect();
        self.skipped_last_tick = total - records.len();

        // Stable, so equal shares keep enumeration order.
        records.sort_by(|a, b| b.mem_percent.total_cmp(&a.mem_percent));
        records.truncate(self.top_n);
        self.ranked = records;
        self.ticks += 1;

        debug!(
            tick = self.ticks,
            cpu,
            mem,
            processes = total,
            skipped = self.skipped_last_tick,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tick complete"
        );

        Ok(self.snapshot())
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            cpu_history: &self.cpu_history,
            mem_history: &self.mem_history,
            ranked: &self.ranked,
        }
    }

    /// Forget all histories and the ranked list.
    pub fn reset(&mut self) {
        self.cpu_history.clear();
        self.mem_history.clear();
        self.ranked.clear();
        self.skipped_last_tick = 0;
        info!(after_ticks = self.ticks, "sampler reset");
    }

    pub fn skipped_last_tick(&self) -> usize {
        self.skipped_last_tick
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
