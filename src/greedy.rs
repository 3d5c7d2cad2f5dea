//! Greedy approximate assignment.
//!
//! Takes cells in descending weight order and keeps every one whose row and
//! column are still free. Fast and simple, but not optimal: the first pick can
//! block a better combination further down the list.

use nalgebra::{Dim, Matrix, RawStorage, Scalar};
use num_traits::Float;

use crate::hungarian::Allocations;

/// Greedy maximum-weight assignment. Ties go to the lower row, then column.
pub fn greedy<T, R, C, S>(weights: &Matrix<T, R, C, S>, assignments: &mut Allocations)
where
    T: Float + Scalar,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let (h, w) = weights.shape();
    assignments.clear();

    let mut cells: Vec<(usize, usize)> = (0..h)
        .flat_map(|row| (0..w).map(move |col| (row, col)))
        .collect();
    // stable, so equal weights keep row-major order
    cells.sort_by(|&a, &b| {
        weights[b]
            .partial_cmp(&weights[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut row_taken = vec![false; h];
    let mut col_taken = vec![false; w];
    let limit = h.min(w);
    for (row, col) in cells {
        if assignments.len() == limit {
            break;
        }
        if row_taken[row] || col_taken[col] {
            continue;
        }
        row_taken[row] = true;
        col_taken[col] = true;
        assignments.push(row, col);
    }
    assignments.sort_by_row();

    tracing::debug!(pairs = assignments.len(), "greedy assignment complete");
}
