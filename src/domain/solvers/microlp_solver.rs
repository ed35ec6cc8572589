use std::time::Duration;

use crate::domain::formulation::Formulation;
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::validate::{validate_formulation, SolveInputError};

use microlp::{ComparisonOp, OptimizationDirection, Problem};

// microlp has no numeric status of its own; outcomes reuse the OR-Tools
// MPSolver ResultStatus numbering (OPTIMAL=0, INFEASIBLE=2, UNBOUNDED=3, ABNORMAL=4).
pub const STATUS_OPTIMAL: i32 = 0;
pub const STATUS_INFEASIBLE: i32 = 2;
pub const STATUS_UNBOUNDED: i32 = 3;
pub const STATUS_ABNORMAL: i32 = 4;

/// Pure-Rust branch and bound via microlp.
///
/// microlp cannot be interrupted, so the time budget is not honoured; a hard
/// instance runs until branch and bound finishes.
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        MicrolpSolver
    }

    /// Outcome of a model without variables: only the row bounds decide.
    fn solve_empty(formulation: &Formulation) -> SolverOutcome {
        let feasible = formulation
            .constraints()
            .iter()
            .all(|row| row.upper_bound >= 0.0);

        SolverOutcome {
            status: if feasible { STATUS_OPTIMAL } else { STATUS_INFEASIBLE },
            objective: 0.0,
            values: Vec::new(),
        }
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MicrolpSolver {
    fn solve(
        &self,
        formulation: &Formulation,
        time_limit: Duration,
    ) -> Result<SolverOutcome, SolveInputError> {
        validate_formulation(formulation)?;

        log::warn!(
            "microlp has no time limit; ignoring the {}s budget",
            time_limit.as_secs()
        );

        if formulation.num_variables() == 0 {
            return Ok(Self::solve_empty(formulation));
        }

        let mut problem = Problem::new(OptimizationDirection::Maximize);

        let vars: Vec<microlp::Variable> = formulation
            .variables()
            .iter()
            .map(|var| problem.add_binary_var(var.objective))
            .collect();

        for row in formulation.constraints() {
            problem.add_constraint(
                row.terms.iter().map(|&(col, coef)| (vars[col], coef)),
                ComparisonOp::Le,
                row.upper_bound,
            );
        }

        let outcome = match problem.solve() {
            Ok(solution) => SolverOutcome {
                status: STATUS_OPTIMAL,
                objective: solution.objective(),
                values: solution.iter().map(|(_, &value)| value).collect(),
            },
            Err(microlp::Error::Infeasible) => SolverOutcome {
                status: STATUS_INFEASIBLE,
                objective: 0.0,
                values: vec![0.0; vars.len()],
            },
            Err(microlp::Error::Unbounded) => SolverOutcome {
                status: STATUS_UNBOUNDED,
                objective: 0.0,
                values: vec![0.0; vars.len()],
            },
            #[allow(unreachable_patterns)]
            Err(e) => {
                log::error!("microlp failed: {}", e);
                SolverOutcome {
                    status: STATUS_ABNORMAL,
                    objective: 0.0,
                    values: vec![0.0; vars.len()],
                }
            }
        };

        Ok(outcome)
    }

    fn name(&self) -> &str {
        "microlp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: Duration = Duration::from_secs(5);

    #[test]
    fn test_picks_best_single_item() {
        let mut formulation = Formulation::new();
        let a = formulation.add_binary("a", 10.0);
        let b = formulation.add_binary("b", 8.0);
        formulation.add_le_constraint(vec![(a, 5.0), (b, 6.0)], 10.0);

        let outcome = MicrolpSolver::new().solve(&formulation, BUDGET).unwrap();

        assert_eq!(outcome.status, STATUS_OPTIMAL);
        assert!((outcome.objective - 10.0).abs() < 1e-6);
        assert!(outcome.values[0] > 0.9);
        assert!(outcome.values[1] < 0.1);
    }

    #[test]
    fn test_empty_model_is_optimal_with_zero_objective() {
        let mut formulation = Formulation::new();
        formulation.add_le_constraint(vec![], 4.0);

        let outcome = MicrolpSolver::new().solve(&formulation, BUDGET).unwrap();

        assert_eq!(outcome.status, STATUS_OPTIMAL);
        assert_eq!(outcome.objective, 0.0);
        assert!(outcome.values.is_empty());
    }

    #[test]
    fn test_negative_capacity_is_infeasible() {
        let mut formulation = Formulation::new();
        let a = formulation.add_binary("a", 1.0);
        formulation.add_le_constraint(vec![(a, 1.0)], -1.0);

        let outcome = MicrolpSolver::new().solve(&formulation, BUDGET).unwrap();

        assert_eq!(outcome.status, STATUS_INFEASIBLE);
        assert!(outcome.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_name() {
        assert_eq!(MicrolpSolver::new().name(), "microlp");
    }
}
