//! Kuhn-Munkres assignment over dense nalgebra matrices.
//!
//! Rectangular inputs are squared off with zero-weight virtual rows or columns
//! before solving; allocations touching a virtual index are dropped, so the
//! result always holds `min(rows, cols)` pairs.

use std::fmt::Debug;
use std::ops::{AddAssign, SubAssign};

use nalgebra::{DMatrix, Dim, Matrix, RawStorage, Scalar};
use num_traits::{Float, NumCast};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    row: usize,
    col: usize,
}

impl Allocation {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn assignment(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// Output buffer of a solve, ordered by ascending row.
///
/// The buffer is cleared at the start of every solve, so one instance can be
/// reused across many independent matrices.
#[derive(Debug, Clone, Default)]
pub struct Allocations {
    pairs: Vec<Allocation>,
}

impl Allocations {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    pub fn assignment(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().map(Allocation::assignment)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.pairs.clear();
    }

    pub(crate) fn push(&mut self, row: usize, col: usize) {
        self.pairs.push(Allocation { row, col });
    }

    pub(crate) fn sort_by_row(&mut self) {
        self.pairs.sort_unstable_by_key(|a| a.row);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Minimize,
    Maximize,
}

/// Finds the assignment with the smallest total cost.
pub fn hungarian<T, R, C, S>(costs: &Matrix<T, R, C, S>, assignments: &mut Allocations)
where
    T: Float + Scalar + AddAssign + SubAssign + Debug,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    solve(costs, Objective::Minimize, assignments);
}

/// Finds the assignment with the largest total weight.
pub fn hungarian_max<T, R, C, S>(weights: &Matrix<T, R, C, S>, assignments: &mut Allocations)
where
    T: Float + Scalar + AddAssign + SubAssign + Debug,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    solve(weights, Objective::Maximize, assignments);
}

fn solve<T, R, C, S>(
    matrix: &Matrix<T, R, C, S>,
    objective: Objective,
    assignments: &mut Allocations,
) where
    T: Float + Scalar + AddAssign + SubAssign + Debug,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let (h, w) = matrix.shape();
    assignments.clear();
    if h == 0 || w == 0 {
        return;
    }

    let n = h.max(w);
    let _span = tracing::debug_span!("hungarian", rows = h, cols = w, size = n).entered();

    // square cost matrix; virtual cells stay at zero
    let mut costs = DMatrix::<T>::zeros(n, n);
    let mut scale = T::zero();
    for row in 0..h {
        for col in 0..w {
            let value = matrix[(row, col)];
            debug_assert!(value.is_finite(), "non-finite entry at ({row}, {col})");
            costs[(row, col)] = match objective {
                Objective::Minimize => value,
                Objective::Maximize => -value,
            };
            scale = scale.max(value.abs());
        }
    }

    // slacks at or below this are treated as tight edges
    let size = <T as NumCast>::from(n).unwrap_or_else(T::one);
    let tolerance = T::epsilon() * scale.max(T::one()) * size;
    let infinity = T::infinity();

    // 1-based rows and columns; column 0 is the root of each alternating tree
    let mut u = vec![T::zero(); n + 1];
    let mut v = vec![T::zero(); n + 1];
    let mut owner = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];
    let mut slack = vec![infinity; n + 1];
    let mut visited = vec![false; n + 1];

    for row in 1..=n {
        owner[0] = row;
        let mut col0 = 0;
        slack.fill(infinity);
        visited.fill(false);

        loop {
            visited[col0] = true;
            let row0 = owner[col0];
            let mut delta = infinity;
            let mut col1 = 0;

            for col in 1..=n {
                if visited[col] {
                    continue;
                }

                let reduced = costs[(row0 - 1, col - 1)] - u[row0] - v[col];
                if reduced < slack[col] {
                    slack[col] = reduced;
                    way[col] = col0;
                }

                if col1 == 0 || slack[col] < delta {
                    delta = slack[col];
                    col1 = col;
                }
            }

            // negative deltas are real under negated weights; only snap noise
            if delta.abs() <= tolerance {
                delta = T::zero();
            }

            for col in 0..=n {
                if visited[col] {
                    u[owner[col]] += delta;
                    v[col] -= delta;
                } else {
                    slack[col] -= delta;
                }
            }

            col0 = col1;
            if owner[col0] == 0 {
                break;
            }
        }

        // flip the alternating path back to the root
        loop {
            let prev = way[col0];
            owner[col0] = owner[prev];
            col0 = prev;
            if col0 == 0 {
                break;
            }
        }

        tracing::trace!(row = row - 1, "augmented");
    }

    for (col, &row) in owner.iter().enumerate().skip(1) {
        if row == 0 || row > h || col > w {
            continue;
        }
        assignments.push(row - 1, col - 1);
    }
    assignments.sort_by_row();

    tracing::debug!(pairs = assignments.len(), "assignment complete");
}

#[cfg(test)]
mod test {
    use nalgebra::{DMatrix, Dim, Matrix, Matrix2, Matrix4, Matrix5, RawStorage};

    use super::*;

    fn assert_costs<R, C, S>(
        costs: &Matrix<f64, R, C, S>,
        assignments: &Allocations,
        cost_expected: f64,
        epsilon: f64,
    ) -> bool
    where
        R: Dim,
        C: Dim,
        S: RawStorage<f64, R, C>,
    {
        (assignments
            .assignment()
            .map(|a| costs.get(a).expect("within cost bounds"))
            .sum::<f64>()
            - cost_expected)
            .abs()
            < epsilon
    }

    fn assert_distinct(assignments: &Allocations) {
        let mut rows: Vec<usize> = assignments.iter().map(Allocation::row).collect();
        let mut cols: Vec<usize> = assignments.iter().map(Allocation::col).collect();
        rows.dedup();
        cols.sort_unstable();
        cols.dedup();
        assert_eq!(rows.len(), assignments.len());
        assert_eq!(cols.len(), assignments.len());
    }

    #[test]
    fn basic_two() {
        #[rustfmt::skip]
        let costs = Matrix2::from_row_slice(
            &[
                1., 2.,
                2., 1.,
            ]
        );
        let mut assignments = Allocations::with_capacity(costs.shape().1);
        hungarian(&costs, &mut assignments);
        let expected_cost = 2.;
        assert!(assert_costs(
            &costs,
            &assignments,
            expected_cost,
            f64::EPSILON
        ));
    }

    #[test]
    fn basic_two_rev() {
        #[rustfmt::skip]
        let costs = Matrix2::from_row_slice(
            &[
                1., 2.,
                2., 100.
            ]
        );
        let mut assignments = Allocations::with_capacity(costs.shape().1);
        hungarian(&costs, &mut assignments);
        let expected_cost = 4.;
        assert!(assert_costs(
            &costs,
            &assignments,
            expected_cost,
            f64::EPSILON
        ));
    }

    #[test]
    fn basic_four() {
        #[rustfmt::skip]
        let costs = Matrix4::from_row_slice(
            &[
                82., 83., 69., 92.,
                77., 37., 49., 92.,
                11., 69.,  5., 86.,
                 8.,  9., 98., 23.,
            ]
        );
        let mut assignments = Allocations::with_capacity(costs.shape().1);
        hungarian(&costs, &mut assignments);
        let expected_cost = 140.;
        assert!(assert_costs(
            &costs,
            &assignments,
            expected_cost,
            f64::EPSILON
        ));
    }

    #[test]
    fn basic_five() {
        #[rustfmt::skip]
        let costs = Matrix5::from_row_slice(
            &[
                10., 5.,13.,15.,16.,
                 3., 9.,18.,13., 6.,
                10., 7., 2., 2., 2.,
                 7.,11., 9., 7.,12.,
                 7., 9.,10., 4.,12.,
            ]
        );
        let mut assignments = Allocations::with_capacity(costs.shape().1);
        hungarian(&costs, &mut assignments);
        let expected_cost = 23.;
        assert!(assert_costs(
            &costs,
            &assignments,
            expected_cost,
            f64::EPSILON
        ));
    }

    #[test]
    fn basic_five_2() {
        #[rustfmt::skip]
        let costs = Matrix5::from_row_slice(
            &[
                20., 15., 18., 20., 25.,
                18., 20., 12., 14., 15.,
                21., 23., 25., 27., 25.,
                17., 18., 21., 23., 20.,
                18., 18., 16., 19., 20.,
            ]
        );
        let mut assignments = Allocations::with_capacity(costs.shape().1);
        hungarian(&costs, &mut assignments);
        let expected_cost = 86.;
        assert!(assert_costs(
            &costs,
            &assignments,
            expected_cost,
            f64::EPSILON
        ));
    }

    #[test]
    fn maximize_four() {
        #[rustfmt::skip]
        let weights = Matrix4::from_row_slice(
            &[
                82., 83., 69., 92.,
                77., 37., 49., 92.,
                11., 69.,  5., 86.,
                 8.,  9., 98., 23.,
            ]
        );
        let mut assignments = Allocations::default();
        hungarian_max(&weights, &mut assignments);
        // 83 + 77 + 86 + 98
        assert!(assert_costs(&weights, &assignments, 344., f64::EPSILON));
        assert_distinct(&assignments);
    }

    #[test]
    fn more_rows_than_cols() {
        #[rustfmt::skip]
        let weights = DMatrix::from_row_slice(3, 2,
            &[
                9.0, 0.0,
                4.5, 2.0,
                2.25, 3.0,
            ]
        );
        let mut assignments = Allocations::default();
        hungarian_max(&weights, &mut assignments);
        assert_eq!(assignments.assignment().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
        assert!(assert_costs(&weights, &assignments, 12., f64::EPSILON));
    }

    #[test]
    fn more_cols_than_rows() {
        #[rustfmt::skip]
        let costs = DMatrix::from_row_slice(2, 4,
            &[
                7., 3., 9., 1.,
                2., 8., 4., 6.,
            ]
        );
        let mut assignments = Allocations::default();
        hungarian(&costs, &mut assignments);
        assert_eq!(assignments.assignment().collect::<Vec<_>>(), vec![(0, 3), (1, 0)]);
        assert!(assert_costs(&costs, &assignments, 3., f64::EPSILON));
    }

    #[test]
    fn single_cell() {
        let weights = DMatrix::from_element(1, 1, 2.5);
        let mut assignments = Allocations::default();
        hungarian_max(&weights, &mut assignments);
        assert_eq!(assignments.assignment().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn empty_matrix_yields_nothing() {
        let weights = DMatrix::<f64>::zeros(0, 3);
        let mut assignments = Allocations::default();
        assignments.push(7, 7);
        hungarian_max(&weights, &mut assignments);
        assert!(assignments.is_empty());
    }

    #[test]
    fn all_ties_still_perfect() {
        let weights = DMatrix::from_element(5, 5, 1.5);
        let mut assignments = Allocations::default();
        hungarian_max(&weights, &mut assignments);
        assert_eq!(assignments.len(), 5);
        assert_distinct(&assignments);
        assert!(assert_costs(&weights, &assignments, 7.5, 1e-12));
    }

    #[test]
    fn maximize_moves_potentials_on_first_frontier() {
        // each new row starts with a negative slack under negated weights
        #[rustfmt::skip]
        let weights = DMatrix::from_row_slice(3, 3,
            &[
                9.0, 0.0, 1.0,
                8.0, 1.0, 0.0,
                7.0, 0.0, 6.0,
            ]
        );
        let mut assignments = Allocations::default();
        hungarian_max(&weights, &mut assignments);
        assert_eq!(assignments.assignment().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);
        assert!(assert_costs(&weights, &assignments, 16., f64::EPSILON));
    }

    #[test]
    fn near_ties_keep_the_optimum() {
        #[rustfmt::skip]
        let weights = DMatrix::from_row_slice(3, 3,
            &[
                0.1 + 0.2, 0.301,     0.3,
                0.3,       0.1 + 0.2, 0.301,
                0.301,     0.3,       0.1 + 0.2,
            ]
        );
        let mut assignments = Allocations::default();
        hungarian_max(&weights, &mut assignments);
        assert_eq!(assignments.assignment().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0)]);
        assert!(assert_costs(&weights, &assignments, 0.903, 1e-12));
    }

    #[test]
    fn rounding_noise_is_tolerated() {
        #[rustfmt::skip]
        let weights = DMatrix::from_row_slice(3, 3,
            &[
                0.1 + 0.2, 0.3, 0.3,
                0.3, 0.1 + 0.2, 0.3,
                0.3, 0.3, 0.1 + 0.2,
            ]
        );
        let mut assignments = Allocations::default();
        hungarian_max(&weights, &mut assignments);
        assert_eq!(assignments.len(), 3);
        assert_distinct(&assignments);
        assert!(assert_costs(&weights, &assignments, 0.9, 1e-9));
    }

    #[test]
    fn buffer_is_reused() {
        let mut assignments = Allocations::default();
        hungarian_max(&DMatrix::from_element(4, 4, 1.0), &mut assignments);
        assert_eq!(assignments.len(), 4);
        hungarian_max(&DMatrix::from_element(2, 3, 1.0), &mut assignments);
        assert_eq!(assignments.len(), 2);
    }

    #[test]
    fn works_with_f32() {
        #[rustfmt::skip]
        let weights = Matrix2::<f32>::from_row_slice(
            &[
                1., 5.,
                4., 1.,
            ]
        );
        let mut assignments = Allocations::default();
        hungarian_max(&weights, &mut assignments);
        assert_eq!(assignments.assignment().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
    }
}
