use std::collections::HashSet;
use std::fmt;

use crate::domain::formulation::Formulation;
use crate::models::Item;

#[derive(Debug, Clone, PartialEq)]
pub struct SolveInputError {
    pub details: String,
}

impl SolveInputError {
    pub fn new(details: impl Into<String>) -> Self {
        SolveInputError {
            details: details.into(),
        }
    }
}

impl fmt::Display for SolveInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details)
    }
}

impl std::error::Error for SolveInputError {}

/// Item ids become solver variable names, so they must be non-empty and unique.
pub fn validate_item_ids(items: &[Item]) -> Result<(), SolveInputError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());

    for (position, item) in items.iter().enumerate() {
        if item.item_id.is_empty() {
            return Err(SolveInputError::new(format!(
                "Item at position {} has an empty item_id",
                position,
            )));
        }
        if !seen.insert(item.item_id.as_str()) {
            return Err(SolveInputError::new(format!(
                "Duplicate item_id {}",
                item.item_id,
            )));
        }
    }

    Ok(())
}

/// Every constraint term must reference a declared variable.
pub fn validate_formulation(formulation: &Formulation) -> Result<(), SolveInputError> {
    let n_vars = formulation.num_variables();

    for (row, constraint) in formulation.constraints().iter().enumerate() {
        for &(col, _) in &constraint.terms {
            if col >= n_vars {
                return Err(SolveInputError::new(format!(
                    "Constraint {} references missing variable {}",
                    row, col,
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_ids_given_unique_ids_should_return_ok() {
        let items = vec![Item::new("a", 1.0, 1.0), Item::new("b", 1.0, 1.0)];
        assert!(validate_item_ids(&items).is_ok());
    }

    #[test]
    fn test_validate_item_ids_given_duplicate_should_return_error() {
        let items = vec![
            Item::new("a", 1.0, 1.0),
            Item::new("b", 1.0, 1.0),
            Item::new("a", 2.0, 3.0),
        ];
        let err = validate_item_ids(&items).unwrap_err();
        assert!(err.details.contains("Duplicate item_id a"));
    }

    #[test]
    fn test_validate_item_ids_given_empty_id_should_return_error() {
        let items = vec![Item::new("a", 1.0, 1.0), Item::new("", 1.0, 1.0)];
        let err = validate_item_ids(&items).unwrap_err();
        assert!(err.details.contains("position 1"));
    }

    #[test]
    fn test_validate_formulation_given_dangling_term_should_return_error() {
        let mut formulation = Formulation::new();
        let x = formulation.add_binary("x", 1.0);
        formulation.add_le_constraint(vec![(x, 1.0), (x + 1, 1.0)], 1.0);
        assert!(validate_formulation(&formulation).is_err());
    }
}
