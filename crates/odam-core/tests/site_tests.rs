// Host-side tests for the page-effect helpers.

use odam_core::site::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn format_time_pads_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(9.9), "0:09");
    assert_eq!(format_time(75.2), "1:15");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
}

#[test]
fn progress_requires_known_duration() {
    assert_eq!(progress_percent(10.0, f64::NAN), None);
    assert_eq!(progress_percent(10.0, 0.0), None);
    assert_eq!(progress_percent(30.0, 120.0), Some(25.0));
}

#[test]
fn header_hides_only_when_scrolling_down_far() {
    assert_eq!(header_state(50.0, 0.0), HeaderState::default());
    let s = header_state(150.0, 100.0);
    assert!(s.scrolled && !s.hidden);
    assert!(header_state(450.0, 300.0).hidden);
    assert!(!header_state(300.0, 450.0).hidden);
}

#[test]
fn anchor_offset_clears_header() {
    assert_eq!(anchor_scroll_top(500.0, 1000.0), 1420.0);
}

#[test]
fn pick_index_never_repeats() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut current = None;
    for _ in 0..200 {
        let next = pick_index(&mut rng, 5, current).unwrap();
        assert!(next < 5);
        assert_ne!(Some(next), current);
        current = Some(next);
    }
    assert_eq!(pick_index(&mut rng, 1, Some(0)), Some(0));
    assert_eq!(pick_index(&mut rng, 0, None), None);
}

#[test]
fn wave_bars_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let bar = WaveBar::sample(&mut rng);
        assert!((8.0..32.0).contains(&bar.height_px));
        assert!((0.6..1.0).contains(&bar.opacity));
    }
}

#[test]
fn loading_bar_fills_with_images() {
    let mut progress = LoadProgress::new(4, 4);
    assert_eq!(progress.percent(), 10.0);
    assert_eq!(progress.image_settled(), 30.0);
    assert_eq!(progress.image_settled(), 50.0);
    assert!(!progress.should_complete());
    progress.image_settled();
    assert_eq!(progress.image_settled(), 90.0);
    assert!(progress.should_complete());
    assert!(!progress.should_complete());
    assert_eq!(progress.complete(), 100.0);
}

#[test]
fn already_loaded_images_count_on_the_next_event() {
    let mut progress = LoadProgress::new(4, 2);
    assert_eq!(progress.percent(), 10.0);
    assert_eq!(progress.image_settled(), 70.0);
}

#[test]
fn loading_floor_forces_completion_once() {
    let mut progress = LoadProgress::new(10, 10);
    progress.image_settled();
    assert_eq!(progress.force_floor(), 90.0);
    assert!(progress.should_complete());
    // Late images never pull the bar back
    assert_eq!(progress.image_settled(), 90.0);
    assert!(!progress.should_complete());
}

#[test]
fn page_without_images_waits_for_the_floor() {
    let mut progress = LoadProgress::new(0, 0);
    assert_eq!(progress.image_settled(), 10.0);
    assert!(!progress.should_complete());
    progress.force_floor();
    assert!(progress.should_complete());
}
