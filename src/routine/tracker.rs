// Completion tracking for today's routines

use crate::routine::catalog::Catalog;
use crate::routine::product::Period;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Product ids marked done today. The set belongs to a single local date;
/// the rollover clears it when that date ends.
#[derive(Debug, Clone)]
pub struct CompletionTracker {
    done: HashSet<String>,
    day: NaiveDate,
}

impl CompletionTracker {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            done: HashSet::new(),
            day,
        }
    }

    /// Flip the completion state of a catalog product. Ids the catalog does
    /// not know are dropped as inert no-ops, not errors. Returns the
    /// done-state after the call.
    pub fn toggle(&mut self, id: &str, catalog: &Catalog) -> bool {
        if !catalog.contains(id) {
            tracing::debug!(id, "ignoring toggle for unknown product id");
            return false;
        }

        if self.done.remove(id) {
            tracing::debug!(id, "step unchecked");
            false
        } else {
            self.done.insert(id.to_string());
            tracing::debug!(id, "step completed");
            true
        }
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.done.contains(id)
    }

    /// Number of ids marked done, across both routines.
    pub fn done_count(&self) -> usize {
        self.done.len()
    }

    /// Completed steps within one period's checklist.
    pub fn completed_in(&self, catalog: &Catalog, period: Period) -> usize {
        catalog
            .products_for(period)
            .iter()
            .filter(|p| self.done.contains(&p.id))
            .count()
    }

    /// Completion percentage for one period, in [0, 100]. An empty routine
    /// is defined as 0% rather than a division by zero.
    pub fn progress_for(&self, catalog: &Catalog, period: Period) -> f64 {
        let total = catalog.products_for(period).len();
        if total == 0 {
            return 0.0;
        }
        self.completed_in(catalog, period) as f64 / total as f64 * 100.0
    }

    /// Apply the day boundary: clear the set once the local date has moved
    /// past the one it was collected on. Returns true if the day changed.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if today == self.day {
            return false;
        }
        if !self.done.is_empty() {
            tracing::info!(from = %self.day, to = %today, "date changed, resetting today's checklist");
        }
        self.done.clear();
        self.day = today;
        true
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::Catalog;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_toggle_marks_and_unmarks() {
        let catalog = Catalog::embedded();
        let mut tracker = CompletionTracker::new(today());

        assert!(tracker.toggle("vitamin-c-serum", &catalog));
        assert!(tracker.is_done("vitamin-c-serum"));

        assert!(!tracker.toggle("vitamin-c-serum", &catalog));
        assert!(!tracker.is_done("vitamin-c-serum"));
        assert_eq!(tracker.done_count(), 0);
    }

    #[test]
    fn test_unknown_id_is_inert() {
        let catalog = Catalog::embedded();
        let mut tracker = CompletionTracker::new(today());
        tracker.toggle("spf60-sunscreen", &catalog);

        let before = tracker.progress_for(&catalog, Period::Morning);
        assert!(!tracker.toggle("no-such-product", &catalog));
        assert_eq!(tracker.done_count(), 1);
        assert_eq!(tracker.progress_for(&catalog, Period::Morning), before);
    }

    #[test]
    fn test_progress_two_of_four_is_fifty() {
        let catalog = Catalog::embedded();
        let mut tracker = CompletionTracker::new(today());

        tracker.toggle("gentle-cleanser", &catalog);
        tracker.toggle("day-moisturizer", &catalog);

        assert_eq!(tracker.completed_in(&catalog, Period::Morning), 2);
        assert_eq!(tracker.progress_for(&catalog, Period::Morning), 50.0);
    }

    #[test]
    fn test_progress_ignores_other_period() {
        let catalog = Catalog::embedded();
        let mut tracker = CompletionTracker::new(today());

        tracker.toggle("retinol-serum", &catalog);

        assert_eq!(tracker.progress_for(&catalog, Period::Morning), 0.0);
        assert_eq!(tracker.progress_for(&catalog, Period::Evening), 20.0);
    }

    #[test]
    fn test_empty_routine_progress_is_zero() {
        let catalog = Catalog::from_products(Vec::new()).unwrap();
        let tracker = CompletionTracker::new(today());
        assert_eq!(tracker.progress_for(&catalog, Period::Morning), 0.0);
    }

    #[test]
    fn test_roll_over_clears_on_new_day() {
        let catalog = Catalog::embedded();
        let mut tracker = CompletionTracker::new(today());
        tracker.toggle("facial-toner", &catalog);

        assert!(!tracker.roll_over(today()));
        assert_eq!(tracker.done_count(), 1);

        let tomorrow = today().succ_opt().unwrap();
        assert!(tracker.roll_over(tomorrow));
        assert_eq!(tracker.done_count(), 0);
        assert_eq!(tracker.day(), tomorrow);
    }
}
