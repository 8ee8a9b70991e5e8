// Host-side tests for the single-vote rating tracker.

use odam_core::{like_percentage, rating_summary, RatingRecord, RatingTracker, Vote};

fn assert_total(tracker: &RatingTracker) {
    let r = tracker.record();
    assert_eq!(r.total_votes, r.likes + r.dislikes);
}

#[test]
fn total_votes_tracks_every_sequence() {
    let mut tracker = RatingTracker::default();
    let votes = [
        Vote::Like,
        Vote::Like,
        Vote::Dislike,
        Vote::Like,
        Vote::Dislike,
        Vote::Dislike,
        Vote::Like,
    ];
    for v in votes {
        tracker.cast(v);
        assert_total(&tracker);
        assert!(tracker.record().likes + tracker.record().dislikes <= 1);
    }
}

#[test]
fn same_vote_twice_retracts() {
    let mut tracker = RatingTracker::new(RatingRecord {
        likes: 4,
        dislikes: 2,
        user_vote: None,
        total_votes: 6,
    });
    tracker.cast(Vote::Like);
    assert_eq!(tracker.record().likes, 5);
    let outcome = tracker.cast(Vote::Like);
    assert_eq!(outcome.user_vote, None);
    assert_eq!(tracker.record().likes, 4);
    assert_eq!(tracker.record().dislikes, 2);
    assert_eq!(tracker.record().total_votes, 6);
}

#[test]
fn switching_vote_moves_one_count() {
    let mut tracker = RatingTracker::new(RatingRecord {
        likes: 1,
        dislikes: 1,
        ..RatingRecord::default()
    });
    tracker.cast(Vote::Dislike);
    assert_eq!(tracker.record().dislikes, 2);
    let outcome = tracker.cast(Vote::Like);
    assert_eq!(tracker.record().likes, 2);
    assert_eq!(tracker.record().dislikes, 1);
    assert_eq!(outcome.user_vote, Some(Vote::Like));
    assert!(!outcome.prompt_feedback);
}

#[test]
fn dislike_prompts_feedback_but_retraction_does_not() {
    let mut tracker = RatingTracker::default();
    assert!(tracker.cast(Vote::Dislike).prompt_feedback);
    assert!(!tracker.cast(Vote::Dislike).prompt_feedback);
}

#[test]
fn load_repairs_inconsistent_total() {
    let tracker = RatingTracker::new(RatingRecord {
        likes: 3,
        dislikes: 1,
        user_vote: Some(Vote::Like),
        total_votes: 99,
    });
    assert_eq!(tracker.record().total_votes, 4);
}

#[test]
fn retraction_never_underflows() {
    // A stored vote without a matching count (e.g. edited storage)
    let mut tracker = RatingTracker::new(RatingRecord {
        user_vote: Some(Vote::Like),
        ..RatingRecord::default()
    });
    tracker.cast(Vote::Like);
    assert_eq!(tracker.record().likes, 0);
    assert_total(&tracker);
}

#[test]
fn huge_stored_counts_saturate() {
    let mut tracker = RatingTracker::new(RatingRecord {
        likes: u64::MAX,
        dislikes: 1,
        user_vote: None,
        total_votes: 0,
    });
    assert_eq!(tracker.record().total_votes, u64::MAX);
    tracker.cast(Vote::Like);
    assert_eq!(tracker.record().likes, u64::MAX);
    assert_eq!(tracker.record().total_votes, u64::MAX);
    assert_eq!(like_percentage(tracker.record()), Some(100));
}

#[test]
fn percentage_of_large_counts_is_exact() {
    let rating = RatingRecord {
        likes: 200_000_000_000_000_000,
        dislikes: 200_000_000_000_000_000,
        user_vote: None,
        total_votes: 400_000_000_000_000_000,
    };
    assert_eq!(like_percentage(&rating), Some(50));
    assert!(rating_summary(&rating).starts_with("50% "));
}
