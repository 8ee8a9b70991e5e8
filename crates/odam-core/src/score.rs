use crate::constants::*;
use crate::records::{rounded_div, StatsRecord};

/// Per-component breakdown of the engagement score, each 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub scroll: u64,
    pub time: u64,
    pub clicks: u64,
    pub projects: u64,
    pub services: u64,
}

impl ScoreBreakdown {
    pub fn from_stats(stats: &StatsRecord) -> Self {
        let capped = |v: u64| v.min(SCORE_CAP);
        Self {
            scroll: capped(u64::from(stats.scroll_depth)),
            time: capped(stats.minutes_spent().saturating_mul(TIME_POINTS_PER_MINUTE)),
            clicks: capped(stats.clicks.saturating_mul(CLICK_POINTS)),
            projects: capped(stats.projects_viewed.saturating_mul(PROJECT_POINTS)),
            services: capped(stats.services_explored.saturating_mul(SERVICE_POINTS)),
        }
    }

    pub fn total(&self) -> u8 {
        let sum = self.scroll + self.time + self.clicks + self.projects + self.services;
        rounded_div(sum, SCORE_COMPONENTS) as u8
    }
}

/// Composite 0..=100 engagement score. Pure; never persisted.
#[inline]
pub fn engagement_score(stats: &StatsRecord) -> u8 {
    ScoreBreakdown::from_stats(stats).total()
}
