//! Dense driver × destination score matrix.

use nalgebra::DMatrix;

use crate::error::{Collection, MatchError, Result};
use crate::score::score;

/// Scores of every driver (rows) against every destination (columns).
///
/// Built once per solve and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    scores: DMatrix<f64>,
}

impl ScoreMatrix {
    /// Validates both collections, then scores every pair.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyCollection`] if either side is empty. No
    /// score is computed in that case.
    pub fn build<D, T>(drivers: &[D], destinations: &[T]) -> Result<Self>
    where
        D: AsRef<str>,
        T: AsRef<str>,
    {
        ensure_not_empty(drivers, Collection::Drivers)?;
        ensure_not_empty(destinations, Collection::Destinations)?;

        let scores = DMatrix::from_fn(drivers.len(), destinations.len(), |row, col| {
            score(drivers[row].as_ref(), destinations[col].as_ref())
        });
        tracing::debug!(
            drivers = drivers.len(),
            destinations = destinations.len(),
            "built score matrix"
        );

        Ok(Self { scores })
    }

    pub fn rows(&self) -> usize {
        self.scores.nrows()
    }

    pub fn cols(&self) -> usize {
        self.scores.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.scores.get((row, col)).copied()
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.scores
    }
}

fn ensure_not_empty<E>(entities: &[E], collection: Collection) -> Result<()> {
    if entities.is_empty() {
        return Err(MatchError::EmptyCollection { collection });
    }
    Ok(())
}
