use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use rand::prelude::*;

use vatracegen::config::Config;
use vatracegen::logging;
use vatracegen::sampler::{DistributionSpec, DEFAULT_SKEW};
use vatracegen::trace::Trace;

/// Generates a virtual address trace on stdout.
#[derive(Debug, Parser)]
struct Args {
    /// Page distribution: uniform or zipfian
    #[clap(short, long)]
    dist: String,
    /// Zipfian skew, must be > 0
    #[clap(short = 's', long = "s", default_value_t = DEFAULT_SKEW, allow_hyphen_values = true)]
    s: f64,
    /// Seed for a reproducible trace
    #[clap(long)]
    seed: Option<u64>,
    #[clap(short, long = "config")]
    config_path: Option<String>,
    #[clap(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let args = Args::parse();
    logging::init(args.verbose);

    let spec = DistributionSpec::from_name(&args.dist, args.s).context("Invalid arguments")?;

    // Parse config
    let config = match &args.config_path {
        Some(path) => Config::from_file(path).with_context(|| format!("Error reading config {}", path))?,
        None => Config::default(),
    };
    info!("{}", config);

    // Initialize rng
    let mut rng = match args.seed {
        Some(seed) => {
            debug!("seeding rng with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // Build the full trace before touching stdout
    let trace = Trace::generate(spec, &config, &mut rng).context("Error generating trace")?;

    let stdout = io::stdout();
    trace.write_to(BufWriter::new(stdout.lock())).context("Error writing trace")?;

    Ok(())
}
