use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};
use crate::math::source::UniformSource;

/// Dense row-major `f64` matrix. Every row has length `cols`; indices are
/// zero-based and bounds-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(NnError::InvalidShape { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        })
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        if rows == 0 || cols == 0 {
            return Err(NnError::InvalidShape { rows, cols });
        }
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(NnError::DimensionMismatch {
                expected: format!("{cols} columns in every row"),
                actual: format!("{} columns", bad.len()),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Filled row-major with `symmetric` draws in `[-1, 1)`; the fill order
    /// (row outer, column inner) is part of the generation contract.
    pub fn random(rows: usize, cols: usize, source: &mut UniformSource) -> Result<Matrix> {
        let mut res = Matrix::zeros(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = source.symmetric();
            }
        }
        Ok(res)
    }

    /// Filled row-major with raw `unit` draws in `[0, 1)`.
    pub fn sample(rows: usize, cols: usize, source: &mut UniformSource) -> Result<Matrix> {
        let mut res = Matrix::zeros(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = source.unit();
            }
        }
        Ok(res)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_bounds(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Dense product; requires `self.cols == other.rows`. Accumulation runs
    /// left-to-right over the shared index so independent implementations see
    /// the same rounding sequence.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(NnError::DimensionMismatch {
                expected: format!("{} rows on the right operand", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }
        let mut res = Matrix::zeros(self.rows, other.cols)?;
        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i][k] * other.data[k][j];
                }
                res.data[i][j] = sum;
            }
        }
        Ok(res)
    }

    /// Adds a `(1, cols)` row vector to every row.
    pub fn add_row(&self, bias: &Matrix) -> Result<Matrix> {
        if bias.rows != 1 || bias.cols != self.cols {
            return Err(NnError::DimensionMismatch {
                expected: format!("1x{} bias row", self.cols),
                actual: format!("{}x{}", bias.rows, bias.cols),
            });
        }
        let mut res = self.clone();
        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] += bias.data[0][j];
            }
        }
        Ok(res)
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(NnError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_rejects_empty_dimensions() {
        assert!(matches!(
            Matrix::zeros(0, 3),
            Err(NnError::InvalidShape { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            Matrix::zeros(3, 0),
            Err(NnError::InvalidShape { rows: 3, cols: 0 })
        ));
    }

    #[test]
    fn zeros_is_zeroed() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m.get(i, j).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn from_data_rejects_ragged_rows() {
        let err = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, NnError::DimensionMismatch { .. }));
    }

    #[test]
    fn get_set_bounds_checked() {
        let mut m = Matrix::zeros(2, 2).unwrap();
        m.set(1, 1, 42.0).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 42.0);
        assert!(matches!(
            m.set(2, 0, 1.0),
            Err(NnError::IndexOutOfRange { row: 2, .. })
        ));
        assert!(matches!(
            m.get(0, 2),
            Err(NnError::IndexOutOfRange { col: 2, .. })
        ));
    }

    #[test]
    fn multiply_matches_hand_computation() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_data(vec![
            vec![7.0, 8.0],
            vec![9.0, 10.0],
            vec![11.0, 12.0],
        ])
        .unwrap();
        let res = a.multiply(&b).unwrap();
        assert_eq!(res.data, vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
    }

    #[test]
    fn multiply_rejects_mismatched_shapes() {
        let a = Matrix::zeros(1, 3).unwrap();
        let b = Matrix::zeros(2, 4).unwrap();
        assert!(matches!(
            a.multiply(&b),
            Err(NnError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn add_row_broadcasts_over_rows() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let bias = Matrix::from_data(vec![vec![10.0, 20.0]]).unwrap();
        let res = m.add_row(&bias).unwrap();
        assert_eq!(res.data, vec![vec![11.0, 22.0], vec![13.0, 24.0]]);
    }

    #[test]
    fn add_row_rejects_wrong_width() {
        let m = Matrix::zeros(2, 3).unwrap();
        let bias = Matrix::zeros(1, 2).unwrap();
        assert!(matches!(
            m.add_row(&bias),
            Err(NnError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn map_applies_elementwise() {
        let m = Matrix::from_data(vec![vec![-1.0, 2.0]]).unwrap();
        let res = m.map(|x| x * x);
        assert_eq!(res.data, vec![vec![1.0, 4.0]]);
    }

    #[test]
    fn random_fill_is_deterministic_and_in_range() {
        let mut a = UniformSource::new(3);
        let mut b = UniformSource::new(3);
        let m1 = Matrix::random(4, 5, &mut a).unwrap();
        let m2 = Matrix::random(4, 5, &mut b).unwrap();
        assert_eq!(m1, m2);
        for row in &m1.data {
            for &x in row {
                assert!((-1.0..1.0).contains(&x));
            }
        }
    }
}
