use std::path::PathBuf;
use std::time::Duration;

use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgMatches, Command};

use crate::config::{MonitorConfig, MAX_HISTORY_CAPACITY, MAX_TOP_N, MIN_TICK_INTERVAL};

fn command() -> Command {
    Command::new("procwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Real-time process and resource monitor")
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .help("Milliseconds between samples")
                .value_name("MS")
                .num_args(1)
                .value_parser(value_parser!(u64).range(MIN_TICK_INTERVAL.as_millis().max(1) as u64..))
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .help("Number of processes to show, ranked by memory")
                .value_name("N")
                .num_args(1)
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..=MAX_TOP_N as u64))
        )
        .arg(
            Arg::new("history")
                .long("history")
                .help("Samples kept in the CPU and memory charts")
                .value_name("N")
                .num_args(1)
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..=MAX_HISTORY_CAPACITY as u64))
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write diagnostic logs to this file (filtered by RUST_LOG)")
                .value_name("PATH")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
        )
}

pub fn parse_args() -> MonitorConfig {
    config_from_matches(&command().get_matches())
}

fn config_from_matches(matches: &ArgMatches) -> MonitorConfig {
    let mut config = MonitorConfig::default();

    if let Some(ms) = matches.get_one::<u64>("interval") {
        config.tick_interval = Duration::from_millis(*ms);
    }

    if let Some(top) = matches.get_one::<usize>("top") {
        config.top_n = *top;
    }

    if let Some(history) = matches.get_one::<usize>("history") {
        config.history_capacity = *history;
    }

    if let Some(path) = matches.get_one::<PathBuf>("log-file") {
        config.log_file = Some(path.clone());
    }

    config
}
