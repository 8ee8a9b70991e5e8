use crate::records::{RatingRecord, Vote};

/// Result of a vote, consumed by the caller to decide on follow-up UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoteOutcome {
    pub user_vote: Option<Vote>,
    /// Set when the vote ends as a dislike: nudge the user towards feedback.
    pub prompt_feedback: bool,
}

#[derive(Debug, Default)]
pub struct RatingTracker {
    record: RatingRecord,
}

impl RatingTracker {
    pub fn new(mut record: RatingRecord) -> Self {
        record.total_votes = record.likes.saturating_add(record.dislikes);
        Self { record }
    }

    pub fn record(&self) -> &RatingRecord {
        &self.record
    }

    /// One vote per user: repeating the current vote retracts it, a different
    /// vote replaces it.
    pub fn cast(&mut self, vote: Vote) -> VoteOutcome {
        if self.record.user_vote == Some(vote) {
            self.decrement(vote);
            self.record.user_vote = None;
        } else {
            if let Some(previous) = self.record.user_vote {
                self.decrement(previous);
            }
            match vote {
                Vote::Like => self.record.likes = self.record.likes.saturating_add(1),
                Vote::Dislike => {
                    self.record.dislikes = self.record.dislikes.saturating_add(1)
                }
            }
            self.record.user_vote = Some(vote);
        }
        self.record.total_votes = self.record.likes.saturating_add(self.record.dislikes);
        log::debug!(
            "[rating] {} -> likes={} dislikes={} vote={:?}",
            vote,
            self.record.likes,
            self.record.dislikes,
            self.record.user_vote
        );
        VoteOutcome {
            user_vote: self.record.user_vote,
            prompt_feedback: self.record.user_vote == Some(Vote::Dislike),
        }
    }

    fn decrement(&mut self, vote: Vote) {
        let counter = match vote {
            Vote::Like => &mut self.record.likes,
            Vote::Dislike => &mut self.record.dislikes,
        };
        *counter = counter.saturating_sub(1);
    }
}

/// Share of likes over all votes, rounded; `None` before the first vote.
pub fn like_percentage(rating: &RatingRecord) -> Option<u64> {
    // Widened so counts near u64::MAX cannot overflow.
    let total = u128::from(rating.likes) + u128::from(rating.dislikes);
    (total > 0).then(|| {
        let percent = (u128::from(rating.likes) * 100 + total / 2) / total;
        percent as u64
    })
}
