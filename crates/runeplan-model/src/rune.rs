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

//! Rune types and the resource vector.
//!
//! Every amount in the planner (budgets, costs, spend, leftovers) is a
//! vector over the five fixed rune types. The component order is a global
//! invariant: component `i` refers to the same rune in every vector in the
//! system, fixed by `Rune::ALL`.

use runeplan_core::num::PlannerNumeric;

/// The number of rune types.
pub const NUM_RUNES: usize = 5;

/// One of the five fixed resource types consumed to build stations.
///
/// The discriminant doubles as the component position in every
/// [`ResourceVector`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(usize)]
pub enum Rune {
    Mana,
    Poison,
    Blood,
    Moon,
    Dark,
}

impl Rune {
    /// All runes in global component order.
    pub const ALL: [Rune; NUM_RUNES] = [
        Rune::Mana,
        Rune::Poison,
        Rune::Blood,
        Rune::Moon,
        Rune::Dark,
    ];

    /// Returns the component position of this rune.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the display name of this rune.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Rune::Mana => "MANA",
            Rune::Poison => "POISON",
            Rune::Blood => "BLOOD",
            Rune::Moon => "MOON",
            Rune::Dark => "DARK",
        }
    }
}

impl std::fmt::Display for Rune {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A fixed-order vector of rune amounts.
///
/// Immutable once constructed; combined via element-wise addition,
/// subtraction, and scalar multiplication. All components are non-negative
/// by construction (`T` is unsigned).
///
/// # Examples
///
/// ```rust
/// use runeplan_model::rune::{ResourceVector, Rune};
///
/// let budget = ResourceVector::<u64>::from_amounts(&[(Rune::Mana, 640)]);
/// assert_eq!(budget.get(Rune::Mana), 640);
/// assert_eq!(budget.get(Rune::Dark), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ResourceVector<T> {
    components: [T; NUM_RUNES],
}

impl<T> ResourceVector<T>
where
    T: PlannerNumeric,
{
    /// Creates a vector from components in global rune order.
    #[inline]
    pub const fn new(components: [T; NUM_RUNES]) -> Self {
        Self { components }
    }

    /// Creates the all-zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            components: [T::zero(); NUM_RUNES],
        }
    }

    /// Creates a vector from sparse `(rune, amount)` pairs; unnamed runes
    /// are zero. A rune listed twice keeps the last amount.
    pub fn from_amounts(amounts: &[(Rune, T)]) -> Self {
        let mut components = [T::zero(); NUM_RUNES];
        for &(rune, amount) in amounts {
            components[rune.index()] = amount;
        }
        Self { components }
    }

    /// Returns the amount for the given rune.
    #[inline(always)]
    pub fn get(&self, rune: Rune) -> T {
        self.components[rune.index()]
    }

    /// Returns the amount at the given component position.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `index >= NUM_RUNES`.
    #[inline(always)]
    pub fn component(&self, index: usize) -> T {
        debug_assert!(
            index < NUM_RUNES,
            "called `ResourceVector::component` with index out of bounds: the len is {} but the index is {}",
            NUM_RUNES,
            index
        );
        self.components[index]
    }

    /// Returns all components in global rune order.
    #[inline]
    pub fn components(&self) -> &[T; NUM_RUNES] {
        &self.components
    }

    /// Returns `true` if every component is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|c| c.is_zero())
    }

    /// Multiplies every component by `factor`.
    #[inline]
    pub fn scaled(&self, factor: T) -> Self {
        let mut components = self.components;
        for component in components.iter_mut() {
            *component = *component * factor;
        }
        Self { components }
    }

    /// Returns `true` if this vector fits component-wise within `budget`.
    #[inline]
    pub fn fits_within(&self, budget: &Self) -> bool {
        self.components
            .iter()
            .zip(budget.components.iter())
            .all(|(needed, available)| needed <= available)
    }

    /// Treating `self` as a per-unit cost, returns the largest quantity
    /// purchasable from `budget`: the component-wise minimum of
    /// `budget[r] / self[r]` over all positive-cost components.
    ///
    /// A vector with no positive component imposes no limit and yields
    /// `T::max_value()`; the station catalog never produces such a cost.
    pub fn max_affordable(&self, budget: &Self) -> T {
        let mut limit = T::max_value();
        for (cost, available) in self.components.iter().zip(budget.components.iter()) {
            if *cost > T::zero() {
                limit = limit.min(*available / *cost);
            }
        }
        limit
    }
}

impl<T> std::ops::Add for ResourceVector<T>
where
    T: PlannerNumeric,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut components = self.components;
        for (component, addend) in components.iter_mut().zip(rhs.components.iter()) {
            *component = *component + *addend;
        }
        Self { components }
    }
}

impl<T> std::ops::Sub for ResourceVector<T>
where
    T: PlannerNumeric,
{
    type Output = Self;

    /// Element-wise subtraction.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if any component of `rhs` exceeds the
    /// corresponding component of `self`.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        debug_assert!(
            rhs.fits_within(&self),
            "called `ResourceVector::sub` with a subtrahend exceeding the minuend"
        );
        let mut components = self.components;
        for (component, subtrahend) in components.iter_mut().zip(rhs.components.iter()) {
            *component = *component - *subtrahend;
        }
        Self { components }
    }
}

impl<T> std::fmt::Display for ResourceVector<T>
where
    T: PlannerNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, rune) in Rune::ALL.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", rune, self.components[position])?;
        }
        Ok(())
    }
}

/// A name-keyed view of how many units of each station are already built.
///
/// Supplied by the caller as a starting state and resolved to a
/// station-indexed array during model building; see
/// [`crate::model::ModelBuilder`].
pub type BuiltCounts<T> = rustc_hash::FxHashMap<String, T>;
