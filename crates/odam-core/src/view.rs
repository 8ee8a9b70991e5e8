//! Text and class projections of the widget state.
//!
//! The web renderer copies these strings into the DOM verbatim; nothing here
//! touches state.

use crate::rating::like_percentage;
use crate::records::{RatingRecord, StatsRecord, Vote};
use crate::score::engagement_score;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsView {
    pub visits: String,
    pub time: String,
    pub engagement: String,
    pub projects: String,
}

impl StatsView {
    pub fn new(stats: &StatsRecord) -> Self {
        Self {
            visits: stats.visits.to_string(),
            time: format!("{}m", stats.minutes_spent()),
            engagement: format!("{}%", engagement_score(stats)),
            projects: stats.projects_viewed.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingView {
    pub like_class: String,
    pub dislike_class: String,
    pub summary: String,
}

impl RatingView {
    pub fn new(rating: &RatingRecord) -> Self {
        let like_state = if rating.user_vote == Some(Vote::Like) { "liked" } else { "" };
        let dislike_state = if rating.user_vote == Some(Vote::Dislike) {
            "disliked"
        } else {
            ""
        };
        Self {
            like_class: format!("rating-btn like-btn {like_state}").trim_end().to_string(),
            dislike_class: format!("rating-btn dislike-btn {dislike_state}")
                .trim_end()
                .to_string(),
            summary: rating_summary(rating),
        }
    }
}

pub fn rating_summary(rating: &RatingRecord) -> String {
    match like_percentage(rating) {
        None => "Sé el primero en valorar".to_string(),
        Some(percentage) => format!(
            "{percentage}% de las personas les gusta esta página ({} votos)",
            rating.likes.saturating_add(rating.dislikes)
        ),
    }
}

/// Stat tiles that respond to clicks with an informational line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTile {
    Visits,
    Time,
    Engagement,
    Projects,
}

impl StatTile {
    pub const ALL: [StatTile; 4] = [
        StatTile::Visits,
        StatTile::Time,
        StatTile::Engagement,
        StatTile::Projects,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StatTile::Visits => "visits",
            StatTile::Time => "time",
            StatTile::Engagement => "engagement",
            StatTile::Projects => "projects",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn describe(&self, stats: &StatsRecord) -> String {
        match self {
            StatTile::Visits => format!("Has visitado esta página {} veces", stats.visits),
            StatTile::Time => {
                format!("Has pasado {} minutos en esta página", stats.minutes_spent())
            }
            StatTile::Engagement => {
                format!("Tu nivel de compromiso es del {}%", engagement_score(stats))
            }
            StatTile::Projects => format!("Has visto {} proyectos", stats.projects_viewed),
        }
    }
}
