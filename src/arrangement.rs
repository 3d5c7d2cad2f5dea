//! Drivers, destinations and the strategy used to pair them.

use crate::assemble::{assemble, MatchResult};
use crate::error::Result;
use crate::greedy::greedy;
use crate::hungarian::{hungarian_max, Allocations};
use crate::matrix::ScoreMatrix;

/// How pairs are chosen from the score matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Globally optimal assignment (Kuhn-Munkres).
    #[default]
    Exact,
    /// Highest scores first; approximate, never better than `Exact`.
    Greedy,
}

/// Owns one set of drivers and destinations.
///
/// Every instance starts with its own empty collections; nothing is shared
/// between instances.
#[derive(Debug, Clone, Default)]
pub struct Arrangement {
    drivers: Vec<String>,
    destinations: Vec<String>,
    strategy: Strategy,
}

impl Arrangement {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn set_drivers<I, S>(&mut self, drivers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drivers = drivers.into_iter().map(Into::into).collect();
    }

    pub fn set_destinations<I, S>(&mut self, destinations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.destinations = destinations.into_iter().map(Into::into).collect();
    }

    pub fn drivers(&self) -> &[String] {
        &self.drivers
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Pairs drivers with destinations using the configured strategy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatchError::EmptyCollection`] if either side is empty.
    pub fn optimized_result(&self) -> Result<MatchResult> {
        solve(&self.drivers, &self.destinations, self.strategy)
    }
}

/// Optimal arrangement of `drivers` onto `destinations`.
///
/// # Errors
///
/// Returns [`crate::MatchError::EmptyCollection`] if either side is empty.
pub fn arrange<D, T>(drivers: &[D], destinations: &[T]) -> Result<MatchResult>
where
    D: AsRef<str>,
    T: AsRef<str>,
{
    solve(drivers, destinations, Strategy::Exact)
}

/// Arrangement of `drivers` onto `destinations` with an explicit strategy.
///
/// # Errors
///
/// Returns [`crate::MatchError::EmptyCollection`] if either side is empty.
pub fn solve<D, T>(drivers: &[D], destinations: &[T], strategy: Strategy) -> Result<MatchResult>
where
    D: AsRef<str>,
    T: AsRef<str>,
{
    let _span = tracing::info_span!("arrange", ?strategy).entered();
    let matrix = ScoreMatrix::build(drivers, destinations)?;

    let mut assignments = Allocations::with_capacity(matrix.rows().min(matrix.cols()));
    match strategy {
        Strategy::Exact => hungarian_max(matrix.as_matrix(), &mut assignments),
        Strategy::Greedy => greedy(matrix.as_matrix(), &mut assignments),
    }

    let result = assemble(&assignments, &matrix, drivers, destinations);
    tracing::info!(
        total_score = result.total_score,
        pairs = result.matching.len(),
        "arrangement complete"
    );
    Ok(result)
}
