//! The search-space bounds of a problem: one [`Interval`] per dimension.

use std::ops::{Index, IndexMut};

use crate::error::{DEError, Result};
use crate::interval::Interval;

/// An ordered sequence of [`Interval`]s, one per problem dimension.
///
/// The number of intervals defines the dimensionality of the problem. The
/// domain is fixed for the lifetime of a run; it is only mutated while a
/// problem is being (re)configured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionDomain {
    intervals: Vec<Interval>,
}

impl SolutionDomain {
    /// Creates an empty, zero-dimensional domain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a domain of `len` dimensions with maximal default bounds.
    pub fn with_size(len: usize) -> Self {
        Self {
            intervals: vec![Interval::default(); len],
        }
    }

    /// Creates a domain of `len` dimensions sharing the same bounds.
    ///
    /// # Errors
    ///
    /// Returns `DEError::InvalidBounds` if `lower > upper`.
    pub fn with_bounds(len: usize, lower: f64, upper: f64) -> Result<Self> {
        let interval = Interval::new(lower, upper)?;
        Ok(Self {
            intervals: vec![interval; len],
        })
    }

    /// Returns the number of dimensions.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the domain has no dimension.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Checked access to the interval of one dimension.
    ///
    /// # Errors
    ///
    /// Returns `DEError::OutOfRange` if `index` is past the last dimension.
    pub fn at(&self, index: usize) -> Result<&Interval> {
        self.intervals.get(index).ok_or(DEError::OutOfRange {
            index,
            len: self.intervals.len(),
        })
    }

    /// Checked mutable access to the interval of one dimension.
    ///
    /// # Errors
    ///
    /// Returns `DEError::OutOfRange` if `index` is past the last dimension.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Interval> {
        let len = self.intervals.len();
        self.intervals
            .get_mut(index)
            .ok_or(DEError::OutOfRange { index, len })
    }

    /// Iterates over the per-dimension intervals.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    /// Resizes the domain, re-deriving every interval to the maximal
    /// default bounds.
    pub fn resize(&mut self, len: usize) {
        self.intervals.clear();
        self.intervals.resize(len, Interval::default());
    }

    /// Resizes the domain with every interval set to the same bounds.
    ///
    /// # Errors
    ///
    /// Returns `DEError::InvalidBounds` if `lower > upper`; the domain is
    /// left unchanged.
    pub fn resize_with(&mut self, len: usize, lower: f64, upper: f64) -> Result<()> {
        let interval = Interval::new(lower, upper)?;
        self.intervals.clear();
        self.intervals.resize(len, interval);
        Ok(())
    }

    /// Assigns the same bounds to every dimension.
    ///
    /// # Errors
    ///
    /// Returns `DEError::InvalidBounds` if `lower > upper`; the domain is
    /// left unchanged.
    pub fn set(&mut self, lower: f64, upper: f64) -> Result<()> {
        let interval = Interval::new(lower, upper)?;
        for slot in &mut self.intervals {
            *slot = interval;
        }
        Ok(())
    }

    /// Restores the maximal default bounds on every dimension.
    pub fn reset(&mut self) {
        for interval in &mut self.intervals {
            interval.reset();
        }
    }
}

impl Index<usize> for SolutionDomain {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.intervals[index]
    }
}

impl IndexMut<usize> for SolutionDomain {
    fn index_mut(&mut self, index: usize) -> &mut Interval {
        &mut self.intervals[index]
    }
}
