pub mod benchmark;
pub mod errors;
pub mod menu;

pub use benchmark::{BenchmarkReport, PassTiming, ReportFormat, run_benchmark, write_report};
pub use errors::HarnessErrors;
pub use menu::Menu;
