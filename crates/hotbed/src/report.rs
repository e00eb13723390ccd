//! Run reporting
//!
//! Prints the per-round population lines and writes a population chart plus a
//! JSON summary into the output directory.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hotbed_core::creature::Species;
use hotbed_core::{Census, DeathTally, SimConfig};

use crate::history::{Peaks, PopulationHistory};

pub const CHART_FILE: &str = "population.svg";
pub const SUMMARY_FILE: &str = "summary.json";

const CHART_TITLE: &str = "Population of bugs vs. aphids";
const PREDATOR_COLOR: &str = "crimson";
const PREY_COLOR: &str = "seagreen";

/// Text block printed for one round, followed by two blank lines
pub fn format_round(round: u64, census: &Census) -> String {
    format!(
        "Round {}\nThere are {} {}\nThere are {} {}\n\n\n",
        round,
        census.predators,
        Species::Predator.common_name(),
        census.prey,
        Species::Prey.common_name()
    )
}

/// Everything worth keeping about a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// RFC 3339 time the run finished
    pub timestamp: String,
    pub config: SimConfig,
    pub seed: u64,
    pub ticks: u64,
    pub final_census: Census,
    pub peaks: Peaks,
    pub predator_births: usize,
    pub prey_births: usize,
    pub predator_deaths: DeathTally,
    pub prey_deaths: DeathTally,
    pub predators: Vec<usize>,
    pub prey: Vec<usize>,
}

impl RunSummary {
    pub fn new(
        config: &SimConfig,
        seed: u64,
        history: &PopulationHistory,
        final_census: Census,
    ) -> Self {
        Self {
            timestamp: chrono::Local::now().to_rfc3339(),
            config: config.clone(),
            seed,
            ticks: history.len() as u64,
            final_census,
            peaks: history.peaks(),
            predator_births: history.predator_births,
            prey_births: history.prey_births,
            predator_deaths: history.predator_deaths,
            prey_deaths: history.prey_deaths,
            predators: history.predator_series(),
            prey: history.prey_series(),
        }
    }
}

/// Writes run artifacts into a single directory
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write `summary.json` and, when `chart` is set, `population.svg`
    pub fn write(
        &self,
        summary: &RunSummary,
        history: &PopulationHistory,
        chart: bool,
    ) -> Result<()> {
        fs::create_dir_all(&self.output_dir).context("Failed to create output directory")?;

        if chart {
            let svg = generate_population_svg(history);
            let path = self.output_dir.join(CHART_FILE);
            fs::write(&path, svg).context("Failed to write population chart")?;
            log::info!("Chart written: {}", path.display());
        }

        let json =
            serde_json::to_string_pretty(summary).context("Failed to serialize run summary")?;
        let path = self.output_dir.join(SUMMARY_FILE);
        fs::write(&path, json).context("Failed to write run summary")?;
        log::info!("Summary written: {}", path.display());

        Ok(())
    }
}

/// Line chart of both populations over the recorded rounds
pub fn generate_population_svg(history: &PopulationHistory) -> String {
    let width = 800;
    let height = 400;
    let padding = 60;
    let plot_w = (width - 2 * padding) as f32;
    let plot_h = (height - 2 * padding) as f32;

    let max_pop = history.max_population().max(1) as f32;
    let rounds = history.len().saturating_sub(1).max(1) as f32;

    let point = |i: usize, value: usize| {
        let x = padding as f32 + (i as f32 / rounds) * plot_w;
        let y = (height - padding) as f32 - (value as f32 / max_pop) * plot_h;
        (x, y)
    };

    let mut predator_path = String::new();
    let mut prey_path = String::new();
    for (i, sample) in history.samples().iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        let (x, y) = point(i, sample.predators);
        let _ = write!(predator_path, "{}{:.1},{:.1}", cmd, x, y);
        let (x, y) = point(i, sample.prey);
        let _ = write!(prey_path, "{}{:.1},{:.1}", cmd, x, y);
    }

    // Horizontal grid at quarters of the y range
    let mut grid = String::new();
    for step in 1..=4 {
        let y = (height - padding) as f32 - plot_h * step as f32 / 4.0;
        let value = max_pop * step as f32 / 4.0;
        let _ = writeln!(
            grid,
            r#"    <line x1="{padding}" y1="{y:.1}" x2="{x_right}" y2="{y:.1}" stroke="lightgray" stroke-width="1"/>
    <text x="{label_x}" y="{label_y:.1}" fill="gray" font-size="12" text-anchor="end">{value:.0}</text>"#,
            padding = padding,
            y = y,
            x_right = width - padding,
            label_x = padding - 5,
            label_y = y + 4.0,
            value = value,
        );
    }

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
    <text x="{mid_x}" y="25" fill="black" font-size="16" text-anchor="middle">{title}</text>

    <!-- Grid -->
{grid}    <line x1="{padding}" y1="{padding}" x2="{padding}" y2="{y_bottom}" stroke="gray" stroke-width="1"/>
    <line x1="{padding}" y1="{y_bottom}" x2="{x_right}" y2="{y_bottom}" stroke="gray" stroke-width="1"/>

    <!-- Populations -->
    <path d="{prey_path}" fill="none" stroke="{prey_color}" stroke-width="2"/>
    <path d="{predator_path}" fill="none" stroke="{predator_color}" stroke-width="2"/>

    <!-- Labels -->
    <text x="{padding}" y="{label_y}" fill="gray" font-size="12">0</text>
    <text x="{x_right}" y="{label_y}" fill="gray" font-size="12" text-anchor="end">{last_round}</text>
    <text x="{mid_x}" y="{xlabel_y}" fill="gray" font-size="12" text-anchor="middle">Rounds</text>
    <text x="15" y="{mid_y}" fill="gray" font-size="12" text-anchor="middle" transform="rotate(-90 15 {mid_y})">Population</text>

    <!-- Legend -->
    <line x1="{legend_x}" y1="45" x2="{legend_x2}" y2="45" stroke="{predator_color}" stroke-width="2"/>
    <text x="{legend_text}" y="49" fill="gray" font-size="12">Bugs</text>
    <line x1="{legend_x}" y1="60" x2="{legend_x2}" y2="60" stroke="{prey_color}" stroke-width="2"/>
    <text x="{legend_text}" y="64" fill="gray" font-size="12">Aphids</text>
</svg>
"#,
        width = width,
        height = height,
        padding = padding,
        title = CHART_TITLE,
        grid = grid,
        y_bottom = height - padding,
        x_right = width - padding,
        prey_path = prey_path,
        predator_path = predator_path,
        prey_color = PREY_COLOR,
        predator_color = PREDATOR_COLOR,
        label_y = height - padding + 15,
        last_round = history.len().saturating_sub(1),
        mid_x = width / 2,
        mid_y = height / 2,
        xlabel_y = height - 20,
        legend_x = width - 140,
        legend_x2 = width - 120,
        legend_text = width - 115,
    )
}
