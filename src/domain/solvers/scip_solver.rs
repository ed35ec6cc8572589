use std::time::Duration;

use crate::domain::formulation::Formulation;
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::validate::{validate_formulation, SolveInputError};

use russcip::prelude::*;
use russcip::{ffi, ObjSense, Variable};

/// SCIP solver implementation (bundled via russcip)
pub struct ScipSolver;

impl ScipSolver {
    pub fn new() -> Self {
        ScipSolver
    }
}

impl Default for ScipSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for ScipSolver {
    fn solve(
        &self,
        formulation: &Formulation,
        time_limit: Duration,
    ) -> Result<SolverOutcome, SolveInputError> {
        validate_formulation(formulation)?;

        // Keep stdout free for the JSON output
        let mut model = Model::default()
            .hide_output()
            .set_real_param("limits/time", time_limit.as_secs_f64())
            .map_err(|e| SolveInputError {
                details: format!("Failed to set SCIP time limit: {:?}", e),
            })?
            .set_obj_sense(ObjSense::Maximize);

        let vars: Vec<Variable> = formulation
            .variables()
            .iter()
            .map(|v| model.add(var().binary().obj(v.objective).name(&v.name)))
            .collect();

        for (row_idx, row) in formulation.constraints().iter().enumerate() {
            let name = format!("c{}", row_idx);
            let constraint = row
                .terms
                .iter()
                .fold(cons().name(&name).le(row.upper_bound), |acc, &(col, coef)| {
                    acc.coef(&vars[col], coef)
                });
            model.add(constraint);
        }

        let solved = model.solve();

        // SCIP_STATUS as reported by the C library, not russcip's enum
        let status = unsafe { ffi::SCIPgetStatus(solved.scip_ptr()) } as i32;
        log::debug!("SCIP finished with {:?} ({})", solved.status(), status);

        let (objective, values) = match solved.best_sol() {
            Some(sol) => (
                sol.obj_val(),
                vars.iter().map(|x| sol.val(x)).collect(),
            ),
            None => (0.0, vec![0.0; vars.len()]),
        };

        Ok(SolverOutcome {
            status,
            objective,
            values,
        })
    }

    fn name(&self) -> &str {
        "SCIP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: Duration = Duration::from_secs(10);

    #[test]
    fn test_picks_best_single_item() {
        let mut formulation = Formulation::new();
        let a = formulation.add_binary("a", 10.0);
        let b = formulation.add_binary("b", 8.0);
        formulation.add_le_constraint(vec![(a, 5.0), (b, 6.0)], 10.0);

        let outcome = ScipSolver::new().solve(&formulation, BUDGET).unwrap();

        assert_eq!(outcome.status, ffi::SCIP_Status_SCIP_STATUS_OPTIMAL as i32);
        assert!((outcome.objective - 10.0).abs() < 1e-6);
        assert!(outcome.values[0] > 0.9);
        assert!(outcome.values[1] < 0.1);
    }

    #[test]
    fn test_negative_capacity_is_infeasible() {
        let mut formulation = Formulation::new();
        let a = formulation.add_binary("a", 1.0);
        formulation.add_le_constraint(vec![(a, 1.0)], -1.0);

        let outcome = ScipSolver::new().solve(&formulation, BUDGET).unwrap();

        assert_eq!(
            outcome.status,
            ffi::SCIP_Status_SCIP_STATUS_INFEASIBLE as i32
        );
        assert_eq!(outcome.objective, 0.0);
        assert_eq!(outcome.values, vec![0.0]);
    }

    #[test]
    fn test_name() {
        assert_eq!(ScipSolver::new().name(), "SCIP");
    }
}
