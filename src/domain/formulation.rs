//! The integer program handed to a backend.
//!
//! A `Formulation` accumulates named binary variables and `<=` rows as plain
//! data; backends translate it in a single build-and-solve call, so nothing
//! here holds solver state. The objective is always maximized.

use crate::models::Problem;

/// Index of a variable inside its `Formulation`.
pub type VarIndex = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryVariable {
    pub name: String,
    /// Coefficient in the objective.
    pub objective: f64,
}

/// `sum(coef * x[col]) <= upper_bound`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub terms: Vec<(VarIndex, f64)>,
    pub upper_bound: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Formulation {
    variables: Vec<BinaryVariable>,
    constraints: Vec<LinearConstraint>,
}

impl Default for Formulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Formulation {
    pub fn new() -> Self {
        Formulation {
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// One binary per item, one capacity row, maximize total value.
    pub fn knapsack(problem: &Problem) -> Self {
        let mut formulation = Formulation::new();
        let mut weights = Vec::with_capacity(problem.items.len());

        for item in &problem.items {
            let x = formulation.add_binary(item.item_id.clone(), item.value());
            weights.push((x, item.weight()));
        }

        formulation.add_le_constraint(weights, problem.weight_capacity);
        formulation
    }

    pub fn add_binary(&mut self, name: impl Into<String>, objective: f64) -> VarIndex {
        self.variables.push(BinaryVariable {
            name: name.into(),
            objective,
        });
        self.variables.len() - 1
    }

    pub fn add_le_constraint(&mut self, terms: Vec<(VarIndex, f64)>, upper_bound: f64) {
        self.constraints.push(LinearConstraint { terms, upper_bound });
    }

    pub fn variables(&self) -> &[BinaryVariable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    #[test]
    fn test_knapsack_formulation_shape() {
        let problem = Problem {
            weight_capacity: 10.0,
            items: vec![Item::new("a", 5.0, 10.0), Item::new("b", 6.0, 8.0)],
        };
        let formulation = Formulation::knapsack(&problem);

        assert_eq!(formulation.num_variables(), 2);
        assert_eq!(formulation.num_constraints(), 1);
        assert_eq!(formulation.variables()[0].name, "a");
        assert_eq!(formulation.variables()[1].objective, 8.0);

        let capacity = &formulation.constraints()[0];
        assert_eq!(capacity.terms, vec![(0, 5.0), (1, 6.0)]);
        assert_eq!(capacity.upper_bound, 10.0);
    }

    #[test]
    fn test_empty_problem_still_has_capacity_row() {
        let problem = Problem {
            weight_capacity: 3.0,
            items: vec![],
        };
        let formulation = Formulation::knapsack(&problem);

        assert_eq!(formulation.num_variables(), 0);
        assert_eq!(formulation.num_constraints(), 1);
        assert!(formulation.constraints()[0].terms.is_empty());
    }
}
