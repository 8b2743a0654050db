pub mod process_table;
pub mod summary_block;
pub mod usage_chart;

pub use self::process_table::ProcessTableWidget;
pub use self::summary_block::SummaryWidget;
pub use self::usage_chart::UsageChartWidget;
