//! Maps solver allocations back to entity names.

use serde::Serialize;

use crate::hungarian::Allocations;
use crate::matrix::ScoreMatrix;

/// A matched driver and destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub driver: String,
    pub destination: String,
}

impl Pairing {
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.driver, &self.destination)
    }
}

/// Outcome of an arrangement.
///
/// `matching` is ordered by ascending driver index in the input, so the same
/// input always renders the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub total_score: f64,
    pub matching: Vec<Pairing>,
}

impl MatchResult {
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.matching.iter().map(Pairing::as_tuple)
    }
}

/// Builds the result for `assignments` over `matrix`.
///
/// Allocations outside the matrix are a programmer error and panic.
pub fn assemble<D, T>(
    assignments: &Allocations,
    matrix: &ScoreMatrix,
    drivers: &[D],
    destinations: &[T],
) -> MatchResult
where
    D: AsRef<str>,
    T: AsRef<str>,
{
    let mut ordered: Vec<(usize, usize)> = assignments.assignment().collect();
    ordered.sort_unstable_by_key(|&(row, _)| row);

    let total_score = ordered
        .iter()
        .map(|&(row, col)| matrix.as_matrix()[(row, col)])
        .sum();
    let matching = ordered
        .iter()
        .map(|&(row, col)| Pairing {
            driver: drivers[row].as_ref().to_owned(),
            destination: destinations[col].as_ref().to_owned(),
        })
        .collect();

    MatchResult {
        total_score,
        matching,
    }
}
