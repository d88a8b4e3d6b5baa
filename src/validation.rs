use num_traits::Float;

use crate::error::{KMeansError, Result};

/// Checks that `table` is non-empty, rectangular and free of missing (`NaN`) cells.
///
/// Returns the number of attributes per observation.
pub fn validate<F: Float>(table: &[Vec<F>]) -> Result<usize> {
    let dimensions = match table.first() {
        Some(first) => first.len(),
        None => return Err(KMeansError::InvalidInput { reason: "table has no rows" }),
    };
    if dimensions == 0 {
        return Err(KMeansError::InvalidInput { reason: "table has no columns" });
    }

    for (row, observation) in table.iter().enumerate() {
        if observation.len() != dimensions {
            return Err(KMeansError::DimensionMismatch {
                expected: dimensions,
                found: observation.len(),
            });
        }
        if let Some(column) = observation.iter().position(|value| value.is_nan()) {
            return Err(KMeansError::MissingValue { row, column });
        }
    }

    Ok(dimensions)
}

pub fn is_valid<F: Float>(table: &[Vec<F>]) -> bool {
    validate(table).is_ok()
}

/// Keeps only the observations without a missing cell, in their original order.
pub fn drop_missing<F: Float>(table: &[Vec<F>]) -> Vec<Vec<F>> {
    table
        .iter()
        .filter(|observation| !observation.iter().any(|value| value.is_nan()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_is_invalid() {
        let table: Vec<Vec<f64>> = vec![];
        assert!(!is_valid(&table));
        assert!(matches!(validate(&table), Err(KMeansError::InvalidInput { .. })));
    }

    #[test]
    fn test_zero_columns_is_invalid() {
        let table: Vec<Vec<f64>> = vec![vec![], vec![]];
        assert!(!is_valid(&table));
    }

    #[test]
    fn test_missing_value_is_invalid_until_dropped() {
        let table = vec![
            vec![0.0, 1.0, 2.0],
            vec![f64::NAN, 2.0, 3.0],
            vec![3.0, 4.0, 5.0],
        ];
        assert!(!is_valid(&table));
        assert_eq!(validate(&table), Err(KMeansError::MissingValue { row: 1, column: 0 }));

        let cleaned = drop_missing(&table);
        assert_eq!(cleaned, vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        assert!(is_valid(&cleaned));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let table = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            validate(&table),
            Err(KMeansError::DimensionMismatch { expected: 2, found: 1 })
        );
    }

    #[test]
    fn test_validate_returns_dimensionality() {
        let table = vec![vec![1.0f32, 2.0, 3.0]];
        assert_eq!(validate(&table), Ok(3));
    }
}
