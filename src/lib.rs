//! Solve 0/1 knapsack instances read as JSON with a mixed-integer programming
//! backend and report the chosen items with run statistics.

pub mod cli;
#[cfg(feature = "glpk-solver")]
pub mod convert;
pub mod domain;
pub mod error;
pub mod io;
pub mod models;

pub use domain::solve::{solve, CHOSEN_THRESHOLD};
pub use domain::solver::{Solver, SolverOutcome};
pub use domain::solver_factory::{create_solver, solver_for_provider, SolverType};
pub use error::{KnapsackError, Result};
pub use models::{Item, Output, Problem};
