use std::time::Duration;

use crate::convert::{to_borrowed_objective, to_glpk_polyhedron, GlpkStatusCode};
use crate::domain::formulation::Formulation;
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::validate::{validate_formulation, SolveInputError};

use glpk_rust::{solve_ilps as glpk_solve_ilps, Solution};

const NO_TERMINAL_OUTPUT: bool = false;
const MAXIMIZE: bool = true;

/// GLPK solver implementation
pub struct GlpkSolver;

impl GlpkSolver {
    pub fn new() -> Self {
        GlpkSolver
    }
}

impl Default for GlpkSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for GlpkSolver {
    fn solve(
        &self,
        formulation: &Formulation,
        time_limit: Duration,
    ) -> Result<SolverOutcome, SolveInputError> {
        validate_formulation(formulation)?;

        log::warn!(
            "glpk-rust exposes no time limit; ignoring the {}s budget",
            time_limit.as_secs()
        );

        // Solver expects &mut
        let mut polyhedron = to_glpk_polyhedron(formulation)?;
        let objective = to_borrowed_objective(formulation);

        let mut lib_solutions: Vec<Solution> = glpk_solve_ilps(
            &mut polyhedron,
            vec![objective],
            MAXIMIZE,
            NO_TERMINAL_OUTPUT,
        );

        // One objective in, one solution out
        let solution = lib_solutions.pop().ok_or_else(|| {
            SolveInputError::new("GLPK returned no solution for the objective")
        })?;

        if let Some(error) = &solution.error {
            log::warn!("GLPK reported: {}", error);
        }

        let values: Vec<f64> = formulation
            .variables()
            .iter()
            .map(|var| {
                solution
                    .solution
                    .get(var.name.as_str())
                    .map(|&x| x as f64)
                    .unwrap_or(0.0)
            })
            .collect();

        Ok(SolverOutcome {
            status: GlpkStatusCode::from(solution.status) as i32,
            objective: solution.objective as f64,
            values,
        })
    }

    fn name(&self) -> &str {
        "GLPK"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_best_single_item() {
        let mut formulation = Formulation::new();
        let a = formulation.add_binary("a", 10.0);
        let b = formulation.add_binary("b", 8.0);
        formulation.add_le_constraint(vec![(a, 5.0), (b, 6.0)], 10.0);

        let outcome = GlpkSolver::new()
            .solve(&formulation, Duration::from_secs(10))
            .unwrap();

        assert_eq!(outcome.status, GlpkStatusCode::Optimal as i32);
        assert_eq!(outcome.objective, 10.0);
        assert_eq!(outcome.values, vec![1.0, 0.0]);
    }
}
