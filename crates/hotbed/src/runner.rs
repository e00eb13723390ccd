//! Drives a full run from configuration to report

use std::io::Write;

use anyhow::{Context, Result};

use hotbed_core::Simulation;

use crate::config::HotbedConfig;
use crate::history::PopulationHistory;
use crate::report::{ReportGenerator, RunSummary, format_round};

/// Run the simulation and return its summary without writing any files
///
/// Round text goes to `out` when `output.print_rounds` is set.
pub fn simulate<W: Write>(
    config: &HotbedConfig,
    out: &mut W,
) -> Result<(RunSummary, PopulationHistory)> {
    let sim_config = &config.simulation;
    let mut sim = Simulation::from_config(sim_config).context("Failed to seed simulation")?;
    let seed = sim.seed().unwrap_or_default();

    let mut history = PopulationHistory::new();
    for _ in 0..sim_config.ticks {
        let round = sim.tick();
        let census = sim.census();
        history.record(round, census);

        if config.output.print_rounds {
            out.write_all(format_round(round, &census).as_bytes())
                .context("Failed to write round report")?;
        }

        let summary = sim.step();
        history.accumulate(&summary);

        if summary.end.predators == 0 && summary.start.predators > 0 {
            log::info!("Round {}: bugs died out", round);
        }
        if summary.end.prey == 0 && summary.start.prey > 0 {
            log::info!("Round {}: aphids died out", round);
        }
    }

    let final_census = sim.census();
    log::info!(
        "Finished {} rounds: {} bugs, {} aphids, heat {}",
        history.len(),
        final_census.predators,
        final_census.prey,
        final_census.heat
    );

    let summary = RunSummary::new(sim_config, seed, &history, final_census);
    Ok((summary, history))
}

/// Run the simulation, print rounds to stdout and write the report
pub fn run(config: &HotbedConfig) -> Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let (summary, history) = simulate(config, &mut out)?;

    ReportGenerator::new(&config.output.dir).write(
        &summary,
        &history,
        config.output.write_chart,
    )?;

    Ok(summary)
}
