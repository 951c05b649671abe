use clap::Parser;
use langtons_ant::logging;
use langtons_ant::prelude::*;
use tracing::info;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbosity);

    let config = SimulationConfig::try_from(&args)?;
    info!("Grid size: {}", config.initial_size);
    info!(
        "running {} iterations, boundary policy {}",
        config.max_iterations, config.boundary_policy
    );

    let mut sim = Simulation::new(config);
    info!("ant starting at {}", sim.ant());

    let summary = sim.run()?;
    info!(
        iterations = summary.iterations,
        terminated = summary.terminated,
        rows = summary.height,
        cols = summary.width,
        black = summary.black_cells,
        "ant finished at {}",
        summary.ant
    );

    let grid = sim.into_grid();
    let rendered = if args.color {
        grid.render_colored()
    } else {
        grid.render()
    };
    print!("End grid:\n{}", rendered);

    Ok(())
}
