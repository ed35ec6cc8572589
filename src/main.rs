use std::time::{Duration, Instant};

use anyhow::Context;

use knapsack_mip::cli::Args;
use knapsack_mip::io::{read_input, write_output};
use knapsack_mip::models::Output;
use knapsack_mip::{solve, solver_for_provider};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let started = Instant::now();
    let args = Args::parse_from_env();
    log::debug!("{:?}", args);

    // Read input data, solve the problem and write the solution.
    let problem = read_input(args.input.as_deref()).with_context(|| match &args.input {
        Some(path) => format!("failed to read input from {}", path.display()),
        None => "failed to read input from stdin".to_string(),
    })?;

    let solver = solver_for_provider(args.provider.as_deref())
        .context("failed to create solver backend")?;

    let solution = solve(&problem, solver.as_ref(), Duration::from_secs(args.duration))
        .context("failed to solve knapsack instance")?;

    let output = Output::new(solution, started.elapsed());
    write_output(args.output.as_deref(), &output).with_context(|| match &args.output {
        Some(path) => format!("failed to write output to {}", path.display()),
        None => "failed to write output to stdout".to_string(),
    })?;

    Ok(())
}
