// Integration tests for completion tracking
//
// These tests cover the toggle semantics, the progress calculation and the
// midnight rollover against both the built-in and hand-built catalogs.

use chrono::NaiveDate;
use skindash::routine::{Catalog, Category, CompletionTracker, Period, Product};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn product(id: &str, period: Period) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        category: Category::Moisturizer,
        period,
    }
}

#[test]
fn test_toggle_then_toggle_restores_state() {
    let catalog = Catalog::embedded();
    let mut tracker = CompletionTracker::new(today());

    for step in catalog.products_for(Period::Evening) {
        tracker.toggle(&step.id, &catalog);
        tracker.toggle(&step.id, &catalog);
        assert!(!tracker.is_done(&step.id));
    }

    assert_eq!(tracker.done_count(), 0);
    assert_eq!(tracker.progress_for(&catalog, Period::Evening), 0.0);
}

#[test]
fn test_unknown_id_leaves_progress_unchanged() {
    let catalog = Catalog::embedded();
    let mut tracker = CompletionTracker::new(today());

    tracker.toggle("gentle-cleanser", &catalog);
    let before = tracker.progress_for(&catalog, Period::Morning);

    tracker.toggle("not-in-the-catalog", &catalog);
    tracker.toggle("", &catalog);

    assert_eq!(tracker.progress_for(&catalog, Period::Morning), before);
    assert_eq!(tracker.done_count(), 1);
}

#[test]
fn test_out_of_period_toggle_leaves_displayed_progress_unchanged() {
    let catalog = Catalog::embedded();
    let mut tracker = CompletionTracker::new(today());

    let morning_before = tracker.progress_for(&catalog, Period::Morning);

    // Every evening step belongs to the other checklist
    for step in catalog.products_for(Period::Evening) {
        tracker.toggle(&step.id, &catalog);
        assert_eq!(
            tracker.progress_for(&catalog, Period::Morning),
            morning_before
        );
    }
}

#[test]
fn test_half_of_four_is_fifty_percent() {
    let catalog = Catalog::embedded();
    let mut tracker = CompletionTracker::new(today());

    let morning = catalog.products_for(Period::Morning);
    assert_eq!(morning.len(), 4);

    let first_two: Vec<String> = morning.iter().take(2).map(|p| p.id.clone()).collect();
    for id in &first_two {
        tracker.toggle(id, &catalog);
    }

    assert_eq!(tracker.progress_for(&catalog, Period::Morning), 50.0);
}

#[test]
fn test_full_routine_is_one_hundred_percent() {
    let catalog = Catalog::embedded();
    let mut tracker = CompletionTracker::new(today());

    let ids: Vec<String> = catalog
        .products_for(Period::Morning)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    for id in &ids {
        tracker.toggle(id, &catalog);
    }

    assert_eq!(tracker.progress_for(&catalog, Period::Morning), 100.0);
}

#[test]
fn test_empty_routine_progress_is_zero_not_nan() {
    // A catalog with evening-only products leaves the morning list empty
    let catalog = Catalog::from_products(vec![
        product("a", Period::Evening),
        product("b", Period::Evening),
    ])
    .unwrap();
    let mut tracker = CompletionTracker::new(today());
    tracker.toggle("a", &catalog);

    let progress = tracker.progress_for(&catalog, Period::Morning);
    assert_eq!(progress, 0.0);
    assert!(!progress.is_nan());
}

#[test]
fn test_both_period_product_counts_everywhere() {
    let catalog = Catalog::from_products(vec![
        product("m", Period::Morning),
        product("shared", Period::Both),
        product("e", Period::Evening),
    ])
    .unwrap();
    let mut tracker = CompletionTracker::new(today());

    tracker.toggle("shared", &catalog);

    assert_eq!(tracker.progress_for(&catalog, Period::Morning), 50.0);
    assert_eq!(tracker.progress_for(&catalog, Period::Evening), 50.0);
}

#[test]
fn test_rollover_resets_only_on_date_change() {
    let catalog = Catalog::embedded();
    let mut tracker = CompletionTracker::new(today());
    tracker.toggle("night-moisturizer", &catalog);

    assert!(!tracker.roll_over(today()));
    assert!(tracker.is_done("night-moisturizer"));

    let tomorrow = today().succ_opt().unwrap();
    assert!(tracker.roll_over(tomorrow));
    assert!(!tracker.is_done("night-moisturizer"));
    assert_eq!(tracker.day(), tomorrow);
}
