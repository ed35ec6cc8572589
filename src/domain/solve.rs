use std::time::{Duration, Instant};

use crate::domain::formulation::Formulation;
use crate::domain::solver::Solver;
use crate::domain::validate::validate_item_ids;
use crate::error::{KnapsackError, Result};
use crate::models::{CustomStatistics, Item, KnapsackSolution, Problem, ResultStatistics};

/// A variable counts as chosen strictly above this value; absorbs solver tolerance.
pub const CHOSEN_THRESHOLD: f64 = 0.9;

/// Solve `problem` with `solver` under `time_limit`.
///
/// Backend outcomes such as infeasible or time-limited are reported through
/// the status in the statistics; only input and backend failures are errors.
pub fn solve(
    problem: &Problem,
    solver: &dyn Solver,
    time_limit: Duration,
) -> Result<KnapsackSolution> {
    validate_item_ids(&problem.items).map_err(|e| KnapsackError::InvalidInput(e.details))?;

    let formulation = Formulation::knapsack(problem);
    log::info!(
        "solving with {}: {} variables, {} constraints, capacity {}",
        solver.name(),
        formulation.num_variables(),
        formulation.num_constraints(),
        problem.weight_capacity,
    );

    let started = Instant::now();
    let outcome = solver.solve(&formulation, time_limit)?;
    let elapsed = started.elapsed();

    log::info!(
        "{} finished in {:.3}s with status {}, objective {}",
        solver.name(),
        elapsed.as_secs_f64(),
        outcome.status,
        outcome.objective,
    );

    let items = chosen_items(&problem.items, &outcome.values);

    // JSON has no infinity; a backend without an incumbent may report one
    let value = if outcome.objective.is_finite() {
        outcome.objective
    } else {
        log::warn!(
            "{} reported objective {}; writing 0",
            solver.name(),
            outcome.objective
        );
        0.0
    };

    Ok(KnapsackSolution {
        items,
        statistics: ResultStatistics {
            custom: CustomStatistics {
                constraints: formulation.num_constraints(),
                provider: solver.name().to_string(),
                status: outcome.status,
                variables: formulation.num_variables(),
            },
            duration: elapsed.as_secs_f64(),
            value,
        },
    })
}

/// Items whose variable value exceeds `CHOSEN_THRESHOLD`, in input order.
/// Missing values count as not chosen.
pub fn chosen_items(items: &[Item], values: &[f64]) -> Vec<Item> {
    items
        .iter()
        .zip(values.iter().copied().chain(std::iter::repeat(0.0)))
        .filter(|(item, value)| {
            log::debug!("{} = {}", item.item_id, value);
            *value > CHOSEN_THRESHOLD
        })
        .map(|(item, _)| item.clone())
        .collect()
}
