use std::collections::HashMap;

use crate::domain::formulation::Formulation;
use crate::domain::validate::SolveInputError;

use glpk_rust::{
    Bound, IntegerSparseMatrix as GlpkMatrix, SparseLEIntegerPolyhedron as GlpkPoly,
    Status as GlpkStatus, Variable as GlpkVar,
};

/// GLPK status codes as exposed by glpk-rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlpkStatusCode {
    Undefined = 1,
    Feasible = 2,
    Infeasible = 3,
    NoFeasible = 4,
    Optimal = 5,
    Unbounded = 6,
    SimplexFailed = 7,
    MIPFailed = 8,
    EmptySpace = 9,
}

impl From<GlpkStatus> for GlpkStatusCode {
    fn from(s: GlpkStatus) -> Self {
        match s {
            GlpkStatus::Undefined => GlpkStatusCode::Undefined,
            GlpkStatus::Feasible => GlpkStatusCode::Feasible,
            GlpkStatus::Infeasible => GlpkStatusCode::Infeasible,
            GlpkStatus::NoFeasible => GlpkStatusCode::NoFeasible,
            GlpkStatus::Optimal => GlpkStatusCode::Optimal,
            GlpkStatus::Unbounded => GlpkStatusCode::Unbounded,
            GlpkStatus::SimplexFailed => GlpkStatusCode::SimplexFailed,
            GlpkStatus::MIPFailed => GlpkStatusCode::MIPFailed,
            GlpkStatus::EmptySpace => GlpkStatusCode::EmptySpace,
        }
    }
}

/// GLPK's polyhedron is integer-only; fractional or out-of-range data is refused.
fn to_integer(value: f64, what: &str) -> Result<i32, SolveInputError> {
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(SolveInputError::new(format!(
            "GLPK requires integral {} within i32 range, got {}",
            what, value,
        )));
    }
    Ok(value as i32)
}

/// Convert a formulation to a GLPK LE polyhedron, borrowing variable names.
pub fn to_glpk_polyhedron(formulation: &Formulation) -> Result<GlpkPoly<'_>, SolveInputError> {
    let mut a = GlpkMatrix {
        rows: Vec::new(),
        cols: Vec::new(),
        vals: Vec::new(),
    };
    let mut b: Vec<Bound> = Vec::with_capacity(formulation.num_constraints());

    for (row_idx, row) in formulation.constraints().iter().enumerate() {
        for &(col, coef) in &row.terms {
            a.rows.push(row_idx as i32);
            a.cols.push(col as i32);
            a.vals.push(to_integer(coef, "weights")?);
        }
        b.push((0, to_integer(row.upper_bound, "capacity")?));
    }

    let variables: Vec<GlpkVar<'_>> = formulation
        .variables()
        .iter()
        .map(|v| GlpkVar {
            id: v.name.as_str(),
            bound: (0, 1),
        })
        .collect();

    Ok(GlpkPoly {
        a,
        b,
        variables,
        double_bound: false,
    })
}

pub fn to_borrowed_objective(formulation: &Formulation) -> HashMap<&str, f64> {
    formulation
        .variables()
        .iter()
        .map(|v| (v.name.as_str(), v.objective))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_glpk_polyhedron_given_integral_data() {
        let mut formulation = Formulation::new();
        let a = formulation.add_binary("a", 1.5);
        let b = formulation.add_binary("b", 2.0);
        formulation.add_le_constraint(vec![(a, 3.0), (b, 4.0)], 5.0);

        let poly = to_glpk_polyhedron(&formulation).unwrap();
        assert_eq!(poly.a.rows, vec![0, 0]);
        assert_eq!(poly.a.cols, vec![0, 1]);
        assert_eq!(poly.a.vals, vec![3, 4]);
        assert_eq!(poly.b, vec![(0, 5)]);
        assert_eq!(poly.variables.len(), 2);

        let objective = to_borrowed_objective(&formulation);
        assert_eq!(objective.get("a"), Some(&1.5));
    }

    #[test]
    fn test_to_glpk_polyhedron_given_fractional_weight_should_fail() {
        let mut formulation = Formulation::new();
        let a = formulation.add_binary("a", 1.0);
        formulation.add_le_constraint(vec![(a, 2.5)], 5.0);

        assert!(to_glpk_polyhedron(&formulation).is_err());
    }
}
