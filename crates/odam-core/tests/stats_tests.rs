// Host-side tests for the passive browsing counters.

use chrono::NaiveDate;
use odam_core::{ScrollSample, StatsRecord, StatsTracker, Watched};
use std::time::Duration;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn visit_counts_once_per_day() {
    let mut tracker = StatsTracker::default();
    assert!(tracker.record_visit(day(19)));
    assert!(!tracker.record_visit(day(19)));
    assert_eq!(tracker.record().visits, 1);
    assert_eq!(tracker.record().last_visit.as_deref(), Some("Mon Oct 19 2026"));
    assert!(tracker.record_visit(day(20)));
    assert_eq!(tracker.record().visits, 2);
}

#[test]
fn visit_respects_stored_date() {
    let mut tracker = StatsTracker::new(StatsRecord {
        visits: 7,
        last_visit: Some("Mon Oct 05 2026".to_string()),
        ..StatsRecord::default()
    });
    assert!(!tracker.record_visit(day(5)));
    assert_eq!(tracker.record().visits, 7);
}

#[test]
fn exit_time_is_added_once() {
    let mut tracker = StatsTracker::new(StatsRecord {
        time_spent: 1_000,
        ..StatsRecord::default()
    });
    assert!(tracker.record_time_on_exit(Duration::from_millis(2_500)));
    assert!(!tracker.record_time_on_exit(Duration::from_millis(2_500)));
    assert_eq!(tracker.record().time_spent, 3_500);
}

#[test]
fn scroll_percent_on_short_page_is_zero() {
    let sample = ScrollSample {
        scroll_y: 0.0,
        document_height: 800.0,
        viewport_height: 800.0,
    };
    assert_eq!(sample.percent(), 0);
    let mut tracker = StatsTracker::default();
    assert!(!tracker.record_scroll(sample));
    assert_eq!(tracker.record().scroll_depth, 0);
}

#[test]
fn scroll_percent_rounds_and_clamps() {
    let sample = |y| ScrollSample {
        scroll_y: y,
        document_height: 3000.0,
        viewport_height: 1000.0,
    };
    assert_eq!(sample(1010.0).percent(), 51);
    assert_eq!(sample(2400.0).percent(), 100);
    assert_eq!(sample(-40.0).percent(), 0);
}

#[test]
fn scroll_depth_only_grows() {
    let mut tracker = StatsTracker::new(StatsRecord {
        scroll_depth: 60,
        ..StatsRecord::default()
    });
    let sample = |y| ScrollSample {
        scroll_y: y,
        document_height: 2000.0,
        viewport_height: 1000.0,
    };
    // Below the stored depth: session max moves, record does not
    assert!(!tracker.record_scroll(sample(300.0)));
    assert_eq!(tracker.record().scroll_depth, 60);
    assert!(tracker.record_scroll(sample(800.0)));
    assert_eq!(tracker.record().scroll_depth, 80);
    assert!(!tracker.record_scroll(sample(500.0)));
    assert_eq!(tracker.record().scroll_depth, 80);
}

#[test]
fn clicks_inside_widget_are_ignored() {
    let mut tracker = StatsTracker::default();
    assert!(tracker.record_click(false));
    assert!(!tracker.record_click(true));
    assert!(tracker.record_click(false));
    assert_eq!(tracker.record().clicks, 2);
}

#[test]
fn watched_elements_fire_once_each() {
    let mut tracker = StatsTracker::default();
    assert!(tracker.record_view(Watched::ProjectsSection));
    assert!(!tracker.record_view(Watched::ProjectsSection));
    assert!(tracker.record_view(Watched::ServiceItem(0)));
    assert!(tracker.record_view(Watched::ServiceItem(2)));
    assert!(!tracker.record_view(Watched::ServiceItem(0)));
    assert_eq!(tracker.record().projects_viewed, 1);
    assert_eq!(tracker.record().services_explored, 2);
}

#[test]
fn reset_zeroes_record() {
    let mut tracker = StatsTracker::new(StatsRecord {
        visits: 4,
        clicks: 9,
        scroll_depth: 50,
        ..StatsRecord::default()
    });
    tracker.reset();
    assert_eq!(*tracker.record(), StatsRecord::default());
}
