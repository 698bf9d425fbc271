//! The per-generation record of population statistics.

use std::ops::Index;

use crate::statistics::Statistics;

/// The bounding box of a history, for chart consumers.
///
/// `x` spans the generation axis, `y` the observed fitness extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRange {
    /// First generation on record (always 0).
    pub x_min: f64,
    /// Last generation on record.
    pub x_max: f64,
    /// Lowest fitness observed over all snapshots.
    pub y_min: f64,
    /// Highest fitness observed over all snapshots.
    pub y_max: f64,
}

/// An append-only sequence of [`Statistics`] snapshots, one per completed
/// generation (generation 0 included).
///
/// The history is never truncated except by an engine reset.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Statistics>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&Statistics> {
        self.snapshots.get(index)
    }

    /// Returns the most recent snapshot.
    pub fn last(&self) -> Option<&Statistics> {
        self.snapshots.last()
    }

    /// Iterates over the snapshots in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Statistics> {
        self.snapshots.iter()
    }

    /// Returns the bounding box over (generation, fitness), or `None` while
    /// the history is empty.
    pub fn range(&self) -> Option<HistoryRange> {
        if self.snapshots.is_empty() {
            return None;
        }
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for snapshot in &self.snapshots {
            y_min = y_min.min(snapshot.minimum());
            y_max = y_max.max(snapshot.maximum());
        }
        Some(HistoryRange {
            x_min: 0.0,
            x_max: (self.snapshots.len() - 1) as f64,
            y_min,
            y_max,
        })
    }

    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub(crate) fn push(&mut self, snapshot: Statistics) {
        self.snapshots.push(snapshot);
    }
}

impl Index<usize> for History {
    type Output = Statistics;

    fn index(&self, index: usize) -> &Statistics {
        &self.snapshots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolutionDomain;
    use crate::solution::Solution;

    fn snapshot(fitness_low: f64, fitness_high: f64) -> Statistics {
        let domain = SolutionDomain::with_size(1);
        let mut high = Solution::from_domain(&domain);
        high.set_scores(fitness_high, fitness_high);
        let mut low = Solution::from_domain(&domain);
        low.set_scores(fitness_low, fitness_low);
        Statistics::from_sorted(&[high, low])
    }

    #[test]
    fn test_push_and_last() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());

        history.push(snapshot(0.0, 1.0));
        history.push(snapshot(0.5, 2.0));
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().maximum(), 2.0);
        assert_eq!(history[0].maximum(), 1.0);
    }

    #[test]
    fn test_range_covers_all_snapshots() {
        let mut history = History::new();
        assert!(history.range().is_none());

        history.push(snapshot(-1.0, 1.0));
        history.push(snapshot(0.0, 3.0));
        history.push(snapshot(0.5, 2.0));

        let range = history.range().unwrap();
        assert_eq!(range.x_min, 0.0);
        assert_eq!(range.x_max, 2.0);
        assert_eq!(range.y_min, -1.0);
        assert_eq!(range.y_max, 3.0);
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = History::new();
        history.push(snapshot(0.0, 1.0));
        history.clear();
        assert!(history.is_empty());
    }
}
