use crate::core::Matrix;
use crate::utils::error::{KataError, Result};
use crate::utils::validation::validate_positive_number;

/// Builds an `n`×`n` grid of empty cells. Every row is its own allocation.
pub fn generate_matrix<T>(n: usize) -> Result<Matrix<T>> {
    validate_positive_number("n", n, 1)
        .map_err(|_| KataError::invalid_argument("generate_matrix", "n must be a positive integer"))?;

    // 每一列各自建立，避免共用同一個 Vec
    Ok((0..n)
        .map(|_| (0..n).map(|_| None).collect::<Vec<_>>())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_generate_matrix_shape() {
        let matrix: Matrix<String> = generate_matrix(3).unwrap();

        assert_eq!(matrix.len(), 3);
        assert!(matrix.iter().all(|row| row.len() == 3));
        assert!(matrix.iter().flatten().all(Option::is_none));
    }

    #[test]
    fn test_generate_matrix_single_cell() {
        let matrix: Matrix<i32> = generate_matrix(1).unwrap();
        assert_eq!(matrix, vec![vec![None]]);
    }

    #[test]
    fn test_generate_matrix_rows_are_independent() {
        let mut matrix: Matrix<&str> = generate_matrix(3).unwrap();
        matrix[0][0] = Some("X");

        assert_eq!(matrix[0][0], Some("X"));
        assert_eq!(matrix[1][0], None);
        assert_eq!(matrix[2][0], None);
    }

    #[test]
    fn test_generate_matrix_rejects_zero() {
        let err = generate_matrix::<u8>(0).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    }
}
