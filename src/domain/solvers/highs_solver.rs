use std::time::Duration;

use crate::domain::formulation::Formulation;
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::validate::{validate_formulation, SolveInputError};

use ::highs::{Col, RowProblem, Sense};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for HighsSolver {
    fn solve(
        &self,
        formulation: &Formulation,
        time_limit: Duration,
    ) -> Result<SolverOutcome, SolveInputError> {
        validate_formulation(formulation)?;

        let mut problem = RowProblem::new();

        // Columns first, rows reference them
        let cols: Vec<Col> = formulation
            .variables()
            .iter()
            .map(|var| problem.add_integer_column(var.objective, 0..=1))
            .collect();

        for row in formulation.constraints() {
            let factors: Vec<(Col, f64)> = row
                .terms
                .iter()
                .map(|&(col, coef)| (cols[col], coef))
                .collect();
            problem.add_row(..=row.upper_bound, factors);
        }

        let mut model = problem.optimise(Sense::Maximise);
        model.set_option("output_flag", false);
        model.set_option("time_limit", time_limit.as_secs_f64());
        let solved = model.solve();

        let model_status = solved.status();
        log::debug!("HiGHS finished with {:?}", model_status);

        let solution = solved.get_solution();
        let mut values = solution.columns().to_vec();
        // No incumbent: HiGHS may hand back an empty vector
        values.resize(cols.len(), 0.0);

        Ok(SolverOutcome {
            status: model_status as i32,
            objective: solved.objective_value(),
            values,
        })
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::highs::HighsModelStatus;

    #[test]
    fn test_picks_best_single_item() {
        let mut formulation = Formulation::new();
        let a = formulation.add_binary("a", 10.0);
        let b = formulation.add_binary("b", 8.0);
        formulation.add_le_constraint(vec![(a, 5.0), (b, 6.0)], 10.0);

        let outcome = HighsSolver::new()
            .solve(&formulation, Duration::from_secs(10))
            .unwrap();

        assert_eq!(outcome.status, HighsModelStatus::Optimal as i32);
        assert!((outcome.objective - 10.0).abs() < 1e-6);
        assert!(outcome.values[0] > 0.9);
        assert!(outcome.values[1] < 0.1);
    }

    #[test]
    fn test_name() {
        assert_eq!(HighsSolver::new().name(), "HiGHS");
    }
}
