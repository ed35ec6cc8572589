use crate::domain::solver::Solver;
use crate::error::{KnapsackError, Result};

#[cfg(feature = "scip-solver")]
use crate::domain::solvers::ScipSolver;

#[cfg(feature = "microlp-solver")]
use crate::domain::solvers::MicrolpSolver;

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

#[cfg(feature = "gurobi-solver")]
use crate::domain::solvers::GurobiSolver;

#[cfg(feature = "glpk-solver")]
use crate::domain::solvers::GlpkSolver;

/// Backends compiled into this build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    #[cfg(feature = "scip-solver")]
    Scip,
    #[cfg(feature = "microlp-solver")]
    Microlp,
    #[cfg(feature = "highs-solver")]
    Highs,
    #[cfg(feature = "gurobi-solver")]
    Gurobi,
    #[cfg(feature = "glpk-solver")]
    Glpk,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            #[cfg(feature = "scip-solver")]
            "scip" => Some(SolverType::Scip),
            #[cfg(feature = "microlp-solver")]
            "microlp" => Some(SolverType::Microlp),
            #[cfg(feature = "highs-solver")]
            "highs" => Some(SolverType::Highs),
            #[cfg(feature = "gurobi-solver")]
            "gurobi" => Some(SolverType::Gurobi),
            #[cfg(feature = "glpk-solver")]
            "glpk" => Some(SolverType::Glpk),
            _ => None,
        }
    }

    /// SCIP, then HiGHS; both honour the time limit. microlp is the last
    /// resort since it runs unbounded.
    pub fn default_type() -> Option<Self> {
        #[cfg(feature = "scip-solver")]
        let default = Some(SolverType::Scip);
        #[cfg(all(feature = "highs-solver", not(feature = "scip-solver")))]
        let default = Some(SolverType::Highs);
        #[cfg(all(
            feature = "microlp-solver",
            not(any(feature = "scip-solver", feature = "highs-solver"))
        ))]
        let default = Some(SolverType::Microlp);
        #[cfg(not(any(
            feature = "scip-solver",
            feature = "highs-solver",
            feature = "microlp-solver"
        )))]
        let default = None;
        default
    }

    pub fn available() -> Vec<&'static str> {
        #[allow(unused_mut)]
        let mut names = Vec::new();
        #[cfg(feature = "scip-solver")]
        names.push("scip");
        #[cfg(feature = "microlp-solver")]
        names.push("microlp");
        #[cfg(feature = "highs-solver")]
        names.push("highs");
        #[cfg(feature = "gurobi-solver")]
        names.push("gurobi");
        #[cfg(feature = "glpk-solver")]
        names.push("glpk");
        names
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Result<Box<dyn Solver>> {
    match solver_type {
        #[cfg(feature = "scip-solver")]
        SolverType::Scip => Ok(Box::new(ScipSolver::new())),
        #[cfg(feature = "microlp-solver")]
        SolverType::Microlp => Ok(Box::new(MicrolpSolver::new())),
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Ok(Box::new(HighsSolver::new())),
        #[cfg(feature = "gurobi-solver")]
        SolverType::Gurobi => Ok(Box::new(GurobiSolver::new()?)),
        #[cfg(feature = "glpk-solver")]
        SolverType::Glpk => Ok(Box::new(GlpkSolver::new())),
    }
}

/// Resolve a `-provider` value. Unknown or missing backends are an error;
/// there is no fallback to another backend.
pub fn solver_for_provider(provider: Option<&str>) -> Result<Box<dyn Solver>> {
    let solver_type = match provider {
        Some(name) => SolverType::from_str(name),
        None => SolverType::default_type(),
    };

    let solver_type = solver_type.ok_or_else(|| {
        KnapsackError::UnsupportedProvider(
            provider.unwrap_or("<default>").to_string(),
            SolverType::available().join(", "),
        )
    })?;

    log::debug!("resolved provider {:?}", solver_type);
    create_solver(solver_type)
}
