#[cfg(feature = "scip-solver")]
pub mod scip_solver;

#[cfg(feature = "microlp-solver")]
pub mod microlp_solver;

#[cfg(feature = "highs-solver")]
pub mod highs_solver;

#[cfg(feature = "gurobi-solver")]
pub mod gurobi_solver;

#[cfg(feature = "glpk-solver")]
pub mod glpk_solver;

#[cfg(feature = "scip-solver")]
pub use scip_solver::ScipSolver;

#[cfg(feature = "microlp-solver")]
pub use microlp_solver::MicrolpSolver;

#[cfg(feature = "highs-solver")]
pub use highs_solver::HighsSolver;

#[cfg(feature = "gurobi-solver")]
pub use gurobi_solver::GurobiSolver;

#[cfg(feature = "glpk-solver")]
pub use glpk_solver::GlpkSolver;
