use std::time::Duration;

use crate::domain::formulation::Formulation;
use crate::domain::validate::SolveInputError;

/// Raw result of one backend run, before items are mapped back.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome {
    /// Status code in the backend's own taxonomy.
    pub status: i32,
    /// Objective value as reported by the backend.
    pub objective: f64,
    /// One value per variable, in formulation order.
    pub values: Vec<f64>,
}

/// Common interface for MIP backends
pub trait Solver {
    /// Build the backend model from `formulation` and solve it once.
    ///
    /// # Arguments
    /// * `formulation` - Binary variables, `<=` rows and objective sense
    /// * `time_limit` - Wall-clock budget; backends without a limit log and ignore it
    ///
    /// # Returns
    /// The backend status, objective and variable values. Infeasible or
    /// time-limited runs are outcomes, not errors.
    fn solve(
        &self,
        formulation: &Formulation,
        time_limit: Duration,
    ) -> Result<SolverOutcome, SolveInputError>;

    /// Provider name reported in the statistics
    fn name(&self) -> &str;
}
