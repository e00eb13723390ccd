use clap::Parser;
use hotbed::HotbedConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to load (RON, extension optional)
    #[arg(long, default_value = hotbed::config::DEFAULT_CONFIG_NAME)]
    config: String,

    /// Number of rounds to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Initial number of bugs
    #[arg(long)]
    predators: Option<usize>,

    /// Initial number of aphids
    #[arg(long)]
    prey: Option<usize>,

    /// Initial heat level
    #[arg(long)]
    heat: Option<i32>,

    /// Aphid carrying capacity
    #[arg(long)]
    capacity: Option<u32>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for the chart and summary
    #[arg(long)]
    output: Option<String>,

    /// Don't print the per-round populations
    #[arg(long)]
    quiet: bool,

    /// Skip the population chart
    #[arg(long)]
    no_chart: bool,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply(&self, config: &mut HotbedConfig) {
        let sim = &mut config.simulation;
        if let Some(ticks) = self.ticks {
            sim.ticks = ticks;
        }
        if let Some(predators) = self.predators {
            sim.initial_predators = predators;
        }
        if let Some(prey) = self.prey {
            sim.initial_prey = prey;
        }
        if let Some(heat) = self.heat {
            sim.initial_heat = heat;
        }
        if let Some(capacity) = self.capacity {
            sim.prey_capacity = capacity;
        }
        if self.seed.is_some() {
            sim.seed = self.seed;
        }
        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }
        if self.quiet {
            config.output.print_rounds = false;
        }
        if self.no_chart {
            config.output.write_chart = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = HotbedConfig::load_from(&args.config)?;
    args.apply(&mut config);
    config.simulation.validate()?;

    if args.print_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    log::info!("Starting Hotbed");

    let summary = hotbed::run(&config)?;
    log::info!(
        "Run used seed {}; report in {}",
        summary.seed,
        config.output.dir
    );

    Ok(())
}
