// Host-side tests for the stats widget service (read-modify-persist).

use chrono::{NaiveDate, TimeZone, Utc};
use odam_core::constants::{FEEDBACK_KEY, RATING_KEY, STATS_KEY};
use odam_core::{
    MemoryStore, RatingRecord, Rejection, ScrollSample, StatsRecord, StatsSystem, Vote, Watched,
};
use std::time::Duration;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn loads_defaults_from_empty_or_corrupt_storage() {
    let backend = MemoryStore::new().with_item(RATING_KEY, "[1,2");
    let system = StatsSystem::load(&backend);
    assert_eq!(*system.stats(), StatsRecord::default());
    assert_eq!(*system.rating(), RatingRecord::default());
}

#[test]
fn loads_and_renders_huge_vote_counts() {
    let backend = MemoryStore::new().with_item(
        RATING_KEY,
        r#"{"likes":18446744073709551615,"dislikes":1,"userVote":null,"totalVotes":0}"#,
    );
    let mut system = StatsSystem::load(&backend);
    assert_eq!(system.rating().total_votes, u64::MAX);
    system.cast_vote(Vote::Dislike);
    assert_eq!(system.rating().dislikes, 2);
    assert!(system.rating_view().summary.starts_with("100% "));
}

#[test]
fn mutations_are_written_through() {
    let backend = MemoryStore::new();
    let mut system = StatsSystem::load(&backend);
    system.record_visit(today());
    system.record_click(false);
    system.record_view(Watched::ProjectsSection);

    let reloaded = StatsSystem::load(&backend);
    assert_eq!(reloaded.stats().visits, 1);
    assert_eq!(reloaded.stats().clicks, 1);
    assert_eq!(reloaded.stats().projects_viewed, 1);
}

#[test]
fn visit_twice_same_day_counts_once() {
    let backend = MemoryStore::new();
    let mut system = StatsSystem::load(&backend);
    system.record_visit(today());
    system.record_visit(today());
    assert_eq!(system.stats().visits, 1);
}

#[test]
fn short_page_scroll_is_harmless() {
    let mut system = StatsSystem::load(MemoryStore::new());
    let changed = system.record_scroll(ScrollSample {
        scroll_y: 0.0,
        document_height: 900.0,
        viewport_height: 900.0,
    });
    assert!(!changed);
    assert_eq!(system.stats().scroll_depth, 0);
}

#[test]
fn vote_persists_rating() {
    let backend = MemoryStore::new();
    let mut system = StatsSystem::load(&backend);
    let outcome = system.cast_vote(Vote::Dislike);
    assert!(outcome.prompt_feedback);
    let stored: RatingRecord = serde_json::from_str(&backend.raw(RATING_KEY).unwrap()).unwrap();
    assert_eq!(stored.dislikes, 1);
    assert_eq!(stored.user_vote, Some(Vote::Dislike));
    assert_eq!(stored.total_votes, 1);
}

#[test]
fn accepted_feedback_appends_entry_and_bonus() {
    let backend = MemoryStore::new();
    let mut system = StatsSystem::load(&backend);
    system.cast_vote(Vote::Like);
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();

    let entry = system
        .submit_feedback("  This service was wonderful, thank you!  ", now)
        .unwrap();
    assert_eq!(entry.comment, "This service was wonderful, thank you!");
    assert_eq!(entry.rating, Some(Vote::Like));
    assert_eq!(system.stats().clicks, 5);

    let list: Vec<serde_json::Value> =
        serde_json::from_str(&backend.raw(FEEDBACK_KEY).unwrap()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["type"], "feedback");
    assert_eq!(list[0]["rating"], "like");
    let stats: StatsRecord = serde_json::from_str(&backend.raw(STATS_KEY).unwrap()).unwrap();
    assert_eq!(stats.clicks, 5);
}

#[test]
fn feedback_list_is_append_only() {
    let existing = r#"[{"comment":"older entry here","timestamp":"2026-01-01T00:00:00.000Z","type":"feedback","rating":null}]"#;
    let backend = MemoryStore::new().with_item(FEEDBACK_KEY, existing);
    let mut system = StatsSystem::load(&backend);
    system
        .submit_feedback("Great mixing on the last single", Utc::now())
        .unwrap();
    let list: Vec<serde_json::Value> =
        serde_json::from_str(&backend.raw(FEEDBACK_KEY).unwrap()).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["comment"], "older entry here");
}

#[test]
fn rejected_feedback_persists_nothing() {
    let backend = MemoryStore::new();
    let mut system = StatsSystem::load(&backend);
    assert_eq!(
        system.submit_feedback("ok", Utc::now()),
        Err(Rejection::TooShort)
    );
    assert_eq!(
        system.submit_feedback("      ", Utc::now()),
        Err(Rejection::Blank)
    );
    assert!(backend.raw(FEEDBACK_KEY).is_none());
    assert_eq!(system.stats().clicks, 0);
}

#[test]
fn failed_writes_keep_memory_authoritative() {
    let backend = MemoryStore::new();
    let mut system = StatsSystem::load(&backend);
    backend.set_failing(true);
    system.record_click(false);
    system.cast_vote(Vote::Like);
    assert_eq!(system.stats().clicks, 1);
    assert_eq!(system.rating().likes, 1);
    assert!(backend.raw(STATS_KEY).is_none());
}

#[test]
fn reset_and_export() {
    let backend = MemoryStore::new();
    let mut system = StatsSystem::load(&backend);
    system.record_visit(today());
    system.record_time_on_exit(Duration::from_secs(90));
    system.cast_vote(Vote::Like);
    system.reset_stats();
    assert_eq!(*system.stats(), StatsRecord::default());
    assert_eq!(system.rating().likes, 1);

    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    let snapshot = serde_json::to_value(system.export_data(now)).unwrap();
    assert_eq!(snapshot["stats"]["visits"], 0);
    assert_eq!(snapshot["rating"]["likes"], 1);
    assert!(snapshot["exportDate"].as_str().unwrap().starts_with("2026-10-19T08:30:00"));
}
