//! Passive browsing counters.
//!
//! Each method maps to one browser signal and returns `true` when the record
//! changed and needs persisting.

use crate::records::{visit_date_string, StatsRecord};
use chrono::NaiveDate;
use fnv::FnvHashSet;
use std::time::Duration;

/// Geometry sampled on a scroll event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Percent of the scrollable range covered, 0..=100. Pages that do not
    /// scroll report 0.
    pub fn percent(&self) -> u8 {
        let range = self.document_height - self.viewport_height;
        if range.is_nan() || range <= 0.0 || !self.scroll_y.is_finite() {
            return 0;
        }
        (self.scroll_y / range * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Element watched for a one-time visibility crossing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Watched {
    ProjectsSection,
    ServiceItem(usize),
}

#[derive(Debug, Default)]
pub struct StatsTracker {
    record: StatsRecord,
    session_max_scroll: u8,
    exit_recorded: bool,
    seen: FnvHashSet<Watched>,
}

impl StatsTracker {
    pub fn new(record: StatsRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    pub fn record(&self) -> &StatsRecord {
        &self.record
    }

    /// Counts at most one visit per calendar day.
    pub fn record_visit(&mut self, today: NaiveDate) -> bool {
        let today = visit_date_string(today);
        if self.record.last_visit.as_deref() == Some(today.as_str()) {
            return false;
        }
        self.record.visits += 1;
        self.record.last_visit = Some(today);
        true
    }

    /// Adds the session length once; later calls in the same session are ignored.
    pub fn record_time_on_exit(&mut self, session: Duration) -> bool {
        if self.exit_recorded {
            return false;
        }
        self.exit_recorded = true;
        let ms = u64::try_from(session.as_millis()).unwrap_or(u64::MAX);
        self.record.time_spent = self.record.time_spent.saturating_add(ms);
        true
    }

    pub fn record_scroll(&mut self, sample: ScrollSample) -> bool {
        let percent = sample.percent();
        if percent <= self.session_max_scroll {
            return false;
        }
        self.session_max_scroll = percent;
        if percent <= self.record.scroll_depth {
            return false;
        }
        self.record.scroll_depth = percent;
        true
    }

    pub fn record_click(&mut self, inside_widget: bool) -> bool {
        if inside_widget {
            return false;
        }
        self.record.clicks += 1;
        true
    }

    /// First visibility crossing of a watched element in this page load.
    pub fn record_view(&mut self, watched: Watched) -> bool {
        let counter = match watched {
            Watched::ProjectsSection => &mut self.record.projects_viewed,
            Watched::ServiceItem(_) => &mut self.record.services_explored,
        };
        if !self.seen.insert(watched) {
            return false;
        }
        *counter += 1;
        true
    }

    pub fn add_feedback_bonus(&mut self, bonus: u64) {
        self.record.clicks = self.record.clicks.saturating_add(bonus);
    }

    /// Zeroes the record. Session bookkeeping (seen elements, exit flag) is kept.
    pub fn reset(&mut self) {
        self.record = StatsRecord::default();
        self.session_max_scroll = 0;
    }
}
