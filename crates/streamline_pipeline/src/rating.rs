//! Normalized scores and pluggable scoring strategies.
//!
//! A data source hands a [`Population`] (its entities plus a weight function)
//! to whichever [`ScoreStrategy`] the caller selected. [`WeightShare`] scores
//! an entity by its share of the population's total weight; [`FixedScores`]
//! looks the score up externally and only validates it.

use streamline_foundation::{Error, Result, Score};
use tracing::{debug, trace};

/// Scores `entity` by its share of the total weight of `population`.
///
/// Computes `round(weight(entity) / Σ weight(population) * 100)`.
///
/// # Errors
/// Returns `DivisionByZero` when the total weight is zero, including an
/// empty population. Returns `Validation` when the rounded value is outside
/// `0..=100`, which happens when `entity` outweighs the population it is
/// measured against.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn normalized_rating<E, F>(entity: &E, population: &[E], weight: F) -> Result<Score>
where
    F: Fn(&E) -> u64,
{
    let total: u128 = population.iter().map(|e| u128::from(weight(e))).sum();
    if total == 0 {
        debug!(population = population.len(), "no weight to normalize against");
        return Err(Error::division_by_zero());
    }
    let share = weight(entity) as f64 / total as f64 * 100.0;
    let rounded = share.round() as i64;
    trace!(share, rounded, "normalized_rating");
    Score::new(rounded)
}

/// The entities of a data source together with their weights.
pub struct Population<'a, E> {
    members: &'a [E],
    weight: &'a dyn Fn(&E) -> u64,
}

impl<'a, E> Population<'a, E> {
    /// Creates a population view.
    #[must_use]
    pub fn new(members: &'a [E], weight: &'a dyn Fn(&E) -> u64) -> Self {
        Self { members, weight }
    }

    /// Returns every member.
    #[must_use]
    pub fn members(&self) -> &'a [E] {
        self.members
    }

    /// Returns the weight of one entity.
    #[must_use]
    pub fn weight_of(&self, entity: &E) -> u64 {
        (self.weight)(entity)
    }

    /// Returns the summed weight of every member.
    #[must_use]
    pub fn total_weight(&self) -> u128 {
        self.members
            .iter()
            .map(|e| u128::from(self.weight_of(e)))
            .sum()
    }
}

/// A way of scoring one entity of a population.
pub trait ScoreStrategy<E> {
    /// Scores `entity`.
    ///
    /// # Errors
    /// Returns an error if no valid score can be produced.
    fn score(&self, entity: &E, population: &Population<'_, E>) -> Result<Score>;
}

/// Scores an entity by its share of the population's total weight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightShare;

impl<E> ScoreStrategy<E> for WeightShare {
    fn score(&self, entity: &E, population: &Population<'_, E>) -> Result<Score> {
        normalized_rating(entity, population.members(), |e| population.weight_of(e))
    }
}

/// Scores an entity through an external lookup, ignoring the population.
///
/// The looked-up value is still validated into `0..=100`.
#[derive(Clone)]
pub struct FixedScores<F> {
    lookup: F,
}

impl<F> FixedScores<F> {
    /// Wraps a lookup function.
    #[must_use]
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<E, F> ScoreStrategy<E> for FixedScores<F>
where
    F: Fn(&E) -> i64,
{
    fn score(&self, entity: &E, _population: &Population<'_, E>) -> Result<Score> {
        Score::new((self.lookup)(entity))
    }
}
