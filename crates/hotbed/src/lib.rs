//! Hotbed - bugs versus aphids in a warming world
//!
//! Command-line front end over `hotbed-core`: layered configuration, the
//! per-round text report, and chart/summary output.

pub mod config;
pub mod history;
pub mod report;
pub mod runner;

pub use config::{HotbedConfig, OutputConfig};
pub use history::PopulationHistory;
pub use report::{ReportGenerator, RunSummary};
pub use runner::{run, simulate};
