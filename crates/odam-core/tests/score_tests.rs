// Host-side tests for the engagement score.

use odam_core::{engagement_score, ScoreBreakdown, StatsRecord};

#[test]
fn ten_minutes_alone_scores_four() {
    let stats = StatsRecord {
        time_spent: 600_000,
        ..StatsRecord::default()
    };
    let breakdown = ScoreBreakdown::from_stats(&stats);
    assert_eq!(breakdown.time, 20);
    assert_eq!(engagement_score(&stats), 4);
}

#[test]
fn score_is_pure() {
    let stats = StatsRecord {
        visits: 3,
        time_spent: 1_234_567,
        scroll_depth: 73,
        clicks: 11,
        last_visit: None,
        projects_viewed: 2,
        services_explored: 4,
    };
    assert_eq!(engagement_score(&stats), engagement_score(&stats));
}

#[test]
fn components_are_capped() {
    let stats = StatsRecord {
        time_spent: 10 * 3_600_000,
        scroll_depth: 100,
        clicks: 1_000,
        projects_viewed: 50,
        services_explored: 50,
        ..StatsRecord::default()
    };
    let b = ScoreBreakdown::from_stats(&stats);
    assert_eq!((b.scroll, b.time, b.clicks, b.projects, b.services), (100, 100, 100, 100, 100));
    assert_eq!(engagement_score(&stats), 100);
}

#[test]
fn zero_stats_score_zero() {
    assert_eq!(engagement_score(&StatsRecord::default()), 0);
}

#[test]
fn minutes_round_half_up() {
    // 1.5 minutes rounds to 2 -> 4 points
    let stats = StatsRecord {
        time_spent: 90_000,
        ..StatsRecord::default()
    };
    assert_eq!(ScoreBreakdown::from_stats(&stats).time, 4);
    // 1 service (15) + 1 click (3) = 18 / 5 = 3.6 -> 4
    let stats = StatsRecord {
        clicks: 1,
        services_explored: 1,
        ..StatsRecord::default()
    };
    assert_eq!(engagement_score(&stats), 4);
}
