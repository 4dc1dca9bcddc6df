// Copyright (c) 2025 Runeplan Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The immutable problem model and its validating builder.
//!
//! A [`Model`] is a fully validated snapshot of one planning call: the
//! station definitions, the caller's already-built counts resolved to
//! catalog order, and the rune budget. Construction goes through
//! [`ModelBuilder`], which accepts the caller's name-keyed built counts and
//! fails fast on unknown station names; the solver never encounters an
//! invalid state.

use crate::{
    index::StationIndex,
    rune::{BuiltCounts, ResourceVector},
    station::{standard_catalog, StationDef},
};
use runeplan_core::num::PlannerNumeric;

/// An error produced while building a [`Model`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A built count referenced a station that is not in the catalog.
    #[error("unknown station '{name}' in built counts")]
    UnknownStation { name: String },
}

/// The immutable data model describing stations, built counts, and the
/// rune budget.
///
/// This struct holds all pre-validated, queryable data:
/// - `stations[station]`: the station definition, in catalog order.
/// - `built_counts[station]`: units of each station already built.
/// - `budget`: the rune amounts available to spend in this call.
///
/// Construction:
/// - Use [`ModelBuilder`] and call [`ModelBuilder::build`] to obtain a
///   validated `Model`.
#[derive(Clone, Debug)]
pub struct Model<T>
where
    T: PlannerNumeric,
{
    stations: Vec<StationDef<T>>,
    built_counts: Vec<T>, // len = num_stations
    budget: ResourceVector<T>,
}

impl<T> Model<T>
where
    T: PlannerNumeric,
{
    /// Returns the number of stations in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use runeplan_model::model::ModelBuilder;
    ///
    /// let model = ModelBuilder::<u64>::new().build().unwrap();
    /// assert_eq!(model.num_stations(), 7);
    /// ```
    #[inline]
    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    /// Returns a slice of all station definitions in catalog order.
    #[inline]
    pub fn stations(&self) -> &[StationDef<T>] {
        &self.stations
    }

    /// Returns the definition of a specific station.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `station_index` is out of bounds.
    #[inline]
    pub fn station(&self, station_index: StationIndex) -> &StationDef<T> {
        let index = station_index.get();
        debug_assert!(
            index < self.num_stations(),
            "called `Model::station` with station index out of bounds: the len is {} but the index is {}",
            self.num_stations(),
            index
        );
        &self.stations[index]
    }

    /// Returns the already-built unit count for a specific station.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `station_index` is out of bounds.
    #[inline]
    pub fn built_count(&self, station_index: StationIndex) -> T {
        let index = station_index.get();
        debug_assert!(
            index < self.num_stations(),
            "called `Model::built_count` with station index out of bounds: the len is {} but the index is {}",
            self.num_stations(),
            index
        );
        self.built_counts[index]
    }

    /// Returns a slice of all built counts in catalog order.
    #[inline]
    pub fn built_counts(&self) -> &[T] {
        &self.built_counts
    }

    /// Returns the rune budget for this planning call.
    #[inline]
    pub fn budget(&self) -> ResourceVector<T> {
        self.budget
    }
}

/// A mutable builder assembling a validated [`Model`].
///
/// # Examples
///
/// ```rust
/// use runeplan_model::model::ModelBuilder;
/// use runeplan_model::rune::{ResourceVector, Rune};
///
/// let model = ModelBuilder::<u64>::new()
///     .budget(ResourceVector::from_amounts(&[(Rune::Mana, 640)]))
///     .built("Grave", 3)
///     .build()
///     .unwrap();
/// assert_eq!(model.budget().get(Rune::Mana), 640);
/// ```
#[derive(Clone, Debug)]
pub struct ModelBuilder<T>
where
    T: PlannerNumeric,
{
    stations: Vec<StationDef<T>>,
    budget: ResourceVector<T>,
    built: BuiltCounts<T>,
}

impl<T> ModelBuilder<T>
where
    T: PlannerNumeric,
{
    /// Creates a builder over the standard station catalog with a zero
    /// budget and no built units.
    #[inline]
    pub fn new() -> Self {
        Self::with_stations(standard_catalog())
    }

    /// Creates a builder over a custom station list. Useful for small,
    /// exactly verifiable problem instances.
    #[inline]
    pub fn with_stations(stations: Vec<StationDef<T>>) -> Self {
        Self {
            stations,
            budget: ResourceVector::zero(),
            built: BuiltCounts::default(),
        }
    }

    /// Sets the rune budget.
    #[inline]
    pub fn budget(mut self, budget: ResourceVector<T>) -> Self {
        self.budget = budget;
        self
    }

    /// Records the already-built unit count for a station by name.
    /// Recording the same name twice keeps the last count.
    #[inline]
    pub fn built(mut self, name: impl Into<String>, count: T) -> Self {
        self.built.insert(name.into(), count);
        self
    }

    /// Validates the accumulated state and builds the `Model`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownStation`] if a built count references a
    /// name that is not in the station list.
    pub fn build(self) -> Result<Model<T>, ModelError> {
        let mut built_counts = vec![T::zero(); self.stations.len()];
        for (name, count) in self.built {
            match self.stations.iter().position(|s| s.name() == name) {
                Some(index) => built_counts[index] = count,
                None => return Err(ModelError::UnknownStation { name }),
            }
        }

        Ok(Model {
            stations: self.stations,
            built_counts,
            budget: self.budget,
        })
    }
}

impl<T> Default for ModelBuilder<T>
where
    T: PlannerNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}
