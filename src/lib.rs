//! procwatch: a terminal monitor showing the processes using the most memory
//! alongside rolling CPU and memory charts.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod widgets;

pub use error::{MonitorError, Result};
