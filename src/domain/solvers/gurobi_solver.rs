use std::time::Duration;

use crate::domain::formulation::Formulation;
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::validate::{validate_formulation, SolveInputError};

use grb::prelude::*;

/// Gurobi solver implementation
pub struct GurobiSolver {
    env: Env,
}

impl GurobiSolver {
    /// Fails when no Gurobi licence is available.
    pub fn new() -> Result<Self, SolveInputError> {
        let mut env = Env::new("").map_err(|e| SolveInputError {
            details: format!("Failed to create Gurobi environment: {}", e),
        })?;

        // Keep stdout free for the JSON output
        env.set(param::OutputFlag, 0).map_err(|e| SolveInputError {
            details: format!("Failed to set Gurobi output flag: {}", e),
        })?;

        // Single-threaded run
        env.set(param::Threads, 1).map_err(|e| SolveInputError {
            details: format!("Failed to set Gurobi thread count: {}", e),
        })?;

        Ok(GurobiSolver { env })
    }
}

impl Solver for GurobiSolver {
    fn solve(
        &self,
        formulation: &Formulation,
        time_limit: Duration,
    ) -> Result<SolverOutcome, SolveInputError> {
        validate_formulation(formulation)?;

        let mut model = Model::with_env("knapsack", &self.env).map_err(|e| SolveInputError {
            details: format!("Failed to create Gurobi model: {}", e),
        })?;

        model
            .set_param(param::TimeLimit, time_limit.as_secs_f64())
            .map_err(|e| SolveInputError {
                details: format!("Failed to set Gurobi time limit: {}", e),
            })?;

        let mut vars: Vec<Var> = Vec::with_capacity(formulation.num_variables());
        for var in formulation.variables() {
            let gurobi_var = add_binvar!(model, name: &var.name).map_err(|e| SolveInputError {
                details: format!("Failed to add binary variable: {}", e),
            })?;
            vars.push(gurobi_var);
        }

        for (row_idx, row) in formulation.constraints().iter().enumerate() {
            let expr = row.terms.iter().fold(
                Expr::Constant(0.0),
                |acc, &(col, coeff)| acc + coeff * vars[col],
            );

            let constraint_name = format!("c{}", row_idx);
            model
                .add_constr(&constraint_name, c!(expr <= row.upper_bound))
                .map_err(|e| SolveInputError {
                    details: format!("Failed to add constraint: {}", e),
                })?;
        }

        let obj_expr = formulation.variables().iter().zip(&vars).fold(
            Expr::Constant(0.0),
            |acc, (var, &gurobi_var)| {
                if var.objective != 0.0 {
                    acc + var.objective * gurobi_var
                } else {
                    acc
                }
            },
        );

        model
            .set_objective(obj_expr, ModelSense::Maximize)
            .map_err(|e| SolveInputError {
                details: format!("Failed to set objective: {}", e),
            })?;

        model.optimize().map_err(|e| SolveInputError {
            details: format!("Failed to optimize: {}", e),
        })?;

        let model_status = model.status().map_err(|e| SolveInputError {
            details: format!("Failed to get model status: {}", e),
        })?;

        // Both attributes are unavailable when no incumbent exists
        let values: Vec<f64> = vars
            .iter()
            .map(|var| model.get_obj_attr(attr::X, var).unwrap_or(0.0))
            .collect();
        let objective = model.get_attr(attr::ObjVal).unwrap_or(0.0);

        Ok(SolverOutcome {
            status: model_status as i32,
            objective,
            values,
        })
    }

    fn name(&self) -> &str {
        "Gurobi"
    }
}
