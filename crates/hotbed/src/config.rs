//! Run configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `hotbed.ron` file (if exists)
//! 3. Environment variables prefixed with `HOTBED_`
//!
//! Example environment variable: `HOTBED_SIMULATION__PREY_CAPACITY=500`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use hotbed_core::SimConfig;

/// Default config file name, without extension
pub const DEFAULT_CONFIG_NAME: &str = "hotbed";

/// Main run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HotbedConfig {
    #[serde(default)]
    pub simulation: SimConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how results are reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for the chart and summary
    pub dir: String,
    /// Print the per-round population lines
    pub print_rounds: bool,
    /// Render the population chart
    pub write_chart: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "hotbed_output".to_string(),
            print_rounds: true,
            write_chart: true,
        }
    }
}

impl HotbedConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. The RON file at `path` (if exists)
    /// 3. Environment variables prefixed with `HOTBED_` (highest priority)
    pub fn load_from(path: &str) -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("simulation.initial_predators", 100_i64)?
            .set_default("simulation.initial_prey", 500_i64)?
            .set_default("simulation.initial_heat", 9_i64)?
            .set_default("simulation.prey_capacity", 2000_i64)?
            .set_default("simulation.ticks", 100_i64)?
            .set_default("output.dir", "hotbed_output")?
            .set_default("output.print_rounds", true)?
            .set_default("output.write_chart", true)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(path)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (HOTBED_SIMULATION__TICKS, etc.)
            .add_source(
                Environment::with_prefix("HOTBED")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build().context("Failed to build configuration")?;

        let config: HotbedConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config
            .simulation
            .validate()
            .context("Invalid simulation configuration")?;

        Ok(config)
    }

    /// Render the configuration as pretty RON
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize configuration")
    }
}
