// Session and profile statistics

use crate::routine::{Catalog, CompletionTracker, Period};

/// Placeholder profile figures matching the original mock data. These are
/// static fixtures until real history tracking exists; keeping them behind
/// one `Default` means a computed implementation replaces a single site.
#[derive(Debug, Clone)]
pub struct ProfileStats {
    pub streak_days: u32,
    pub favorite_products: u32,
    pub routines_completed: u32,
    pub skin_type: &'static str,
    pub concerns: &'static [&'static str],
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            streak_days: 7,
            favorite_products: 4,
            routines_completed: 12,
            skin_type: "Combination",
            concerns: &["Acne", "Oiliness", "Enlarged pores"],
        }
    }
}

/// Live counters computed from the tracker and the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Steps marked done today, across both routines
    pub done_today: usize,

    pub morning_done: usize,
    pub morning_total: usize,

    pub evening_done: usize,
    pub evening_total: usize,
}

impl SessionStats {
    /// Recompute from the source of truth, never cached.
    pub fn collect(catalog: &Catalog, tracker: &CompletionTracker) -> Self {
        Self {
            done_today: tracker.done_count(),
            morning_done: tracker.completed_in(catalog, Period::Morning),
            morning_total: catalog.products_for(Period::Morning).len(),
            evening_done: tracker.completed_in(catalog, Period::Evening),
            evening_total: catalog.products_for(Period::Evening).len(),
        }
    }

    /// Steps shown across today's two checklists.
    pub fn total_steps(&self) -> usize {
        self.morning_total + self.evening_total
    }

    /// Checked steps across today's two checklists.
    pub fn done_steps(&self) -> usize {
        self.morning_done + self.evening_done
    }
}

/// "2/4" style checklist counter.
pub fn format_count(done: usize, total: usize) -> String {
    format!("{}/{}", done, total)
}

/// Whole-number percentage label for gauges.
pub fn format_percent(progress: f64) -> String {
    format!("{}%", progress.round() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_collect_counts_per_period() {
        let catalog = Catalog::embedded();
        let mut tracker =
            CompletionTracker::new(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());

        tracker.toggle("gentle-cleanser", &catalog);
        tracker.toggle("retinol-serum", &catalog);

        let stats = SessionStats::collect(&catalog, &tracker);
        assert_eq!(stats.done_today, 2);
        assert_eq!(stats.morning_done, 1);
        assert_eq!(stats.morning_total, 4);
        assert_eq!(stats.evening_done, 1);
        assert_eq!(stats.evening_total, 5);
        assert_eq!(stats.total_steps(), 9);
        assert_eq!(stats.done_steps(), 2);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0, 4), "0/4");
        assert_eq!(format_count(2, 4), "2/4");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(50.0), "50%");
        assert_eq!(format_percent(66.6667), "67%");
        assert_eq!(format_percent(100.0), "100%");
    }
}
