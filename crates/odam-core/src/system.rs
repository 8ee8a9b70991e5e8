//! The stats widget service: trackers, moderation and persistence behind one
//! owner.
//!
//! Every mutating method follows read-modify-persist: the in-memory record is
//! updated first and then written through to the store. A failed write is
//! logged by the store and otherwise ignored; the in-memory record stays
//! authoritative for the rest of the session.

use crate::constants::{FEEDBACK_CLICK_BONUS, FEEDBACK_KEY, RATING_KEY, STATS_KEY};
use crate::moderation::{self, Rejection};
use crate::rating::{RatingTracker, VoteOutcome};
use crate::records::{ExportSnapshot, FeedbackEntry, RatingRecord, StatsRecord, Vote};
use crate::stats::{ScrollSample, StatsTracker, Watched};
use crate::store::{KeyValueStore, Store};
use crate::view::{RatingView, StatsView};
use chrono::{DateTime, NaiveDate, Utc};
use instant::Instant;
use std::time::Duration;

pub struct StatsSystem<B> {
    store: Store<B>,
    stats: StatsTracker,
    rating: RatingTracker,
    session_start: Instant,
}

impl<B: KeyValueStore> StatsSystem<B> {
    /// Loads both records, falling back to zeroed ones on absence or corruption.
    pub fn load(backend: B) -> Self {
        let store = Store::new(backend);
        let stats = store.read::<StatsRecord>(STATS_KEY).unwrap_or_default();
        let rating = store.read::<RatingRecord>(RATING_KEY).unwrap_or_default();
        log::info!(
            "[stats] loaded visits={} clicks={} votes={}",
            stats.visits,
            stats.clicks,
            rating.likes.saturating_add(rating.dislikes)
        );
        Self {
            store,
            stats: StatsTracker::new(stats),
            rating: RatingTracker::new(rating),
            session_start: Instant::now(),
        }
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    pub fn stats(&self) -> &StatsRecord {
        self.stats.record()
    }

    pub fn rating(&self) -> &RatingRecord {
        self.rating.record()
    }

    pub fn stats_view(&self) -> StatsView {
        StatsView::new(self.stats())
    }

    pub fn rating_view(&self) -> RatingView {
        RatingView::new(self.rating())
    }

    fn persist_stats(&self) {
        self.store.write(STATS_KEY, self.stats.record());
    }

    fn persist_rating(&self) {
        self.store.write(RATING_KEY, self.rating.record());
    }

    fn persist_if(&self, changed: bool) -> bool {
        if changed {
            self.persist_stats();
        }
        changed
    }

    pub fn record_visit(&mut self, today: NaiveDate) -> bool {
        let changed = self.stats.record_visit(today);
        self.persist_if(changed)
    }

    /// Adds the time since `load` to the cumulative total.
    pub fn record_exit(&mut self) -> bool {
        let elapsed = self.session_start.elapsed();
        self.record_time_on_exit(elapsed)
    }

    pub fn record_time_on_exit(&mut self, session: Duration) -> bool {
        let changed = self.stats.record_time_on_exit(session);
        self.persist_if(changed)
    }

    pub fn record_scroll(&mut self, sample: ScrollSample) -> bool {
        let changed = self.stats.record_scroll(sample);
        self.persist_if(changed)
    }

    pub fn record_click(&mut self, inside_widget: bool) -> bool {
        let changed = self.stats.record_click(inside_widget);
        self.persist_if(changed)
    }

    pub fn record_view(&mut self, watched: Watched) -> bool {
        let changed = self.stats.record_view(watched);
        self.persist_if(changed)
    }

    pub fn cast_vote(&mut self, vote: Vote) -> VoteOutcome {
        let outcome = self.rating.cast(vote);
        self.persist_rating();
        outcome
    }

    /// Validates and stores a comment. The caller shows the rejection inline.
    pub fn submit_feedback(
        &mut self,
        comment: &str,
        now: DateTime<Utc>,
    ) -> Result<FeedbackEntry, Rejection> {
        let comment = comment.trim();
        if let Err(rejection) = moderation::validate(comment) {
            log::debug!("[feedback] rejected: {}", rejection);
            return Err(rejection);
        }
        let entry = FeedbackEntry::new(comment, now, self.rating.record().user_vote);
        let mut entries = self
            .store
            .read::<Vec<serde_json::Value>>(FEEDBACK_KEY)
            .unwrap_or_default();
        match serde_json::to_value(&entry) {
            Ok(value) => entries.push(value),
            Err(e) => log::error!("[feedback] could not encode entry: {}", e),
        }
        self.store.write(FEEDBACK_KEY, &entries);
        self.stats.add_feedback_bonus(FEEDBACK_CLICK_BONUS);
        self.persist_stats();
        log::info!("[feedback] stored entry #{}", entries.len());
        Ok(entry)
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.persist_stats();
        log::info!("[stats] reset");
    }

    pub fn export_data(&self, now: DateTime<Utc>) -> ExportSnapshot {
        ExportSnapshot {
            stats: self.stats().clone(),
            rating: self.rating().clone(),
            export_date: now,
        }
    }
}
