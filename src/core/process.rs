use std::fmt;

/// One process as read on a single tick. Rebuilt from scratch every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub mem_percent: f32,
}

impl ProcessRecord {
    pub fn new(pid: u32, name: impl Into<String>, cpu_percent: f32, mem_percent: f32) -> Self {
        Self {
            pid,
            name: name.into(),
            cpu_percent,
            mem_percent,
        }
    }

    /// The name cut to at most `width` characters.
    pub fn display_name(&self, width: usize) -> &str {
        match self.name.char_indices().nth(width) {
            Some((idx, _)) => &self.name[..idx],
            None => &self.name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The process exited between enumeration and the detail read.
    Gone,
    /// The OS refused to expose the process's metrics.
    AccessDenied,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Gone => f.write_str("no such process"),
            SkipReason::AccessDenied => f.write_str("access denied"),
        }
    }
}

/// Outcome of reading one process at the collector boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEntry {
    Read(ProcessRecord),
    Skipped { pid: u32, reason: SkipReason },
}
