pub mod collector;
pub mod history;
pub mod process;
pub mod sampler;

pub use collector::{Collector, SysinfoCollector};
pub use history::RollingHistory;
pub use process::{ProcessEntry, ProcessRecord, SkipReason};
pub use sampler::{Sampler, Snapshot};
