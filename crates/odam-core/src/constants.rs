// Shared tuning constants for the stats widget and the page helpers.

// Storage keys (origin-scoped key-value store)
pub const STATS_KEY: &str = "odam-stats";
pub const RATING_KEY: &str = "odam-rating";
pub const FEEDBACK_KEY: &str = "odam-feedback";

// Visibility thresholds for watched elements
pub const PROJECTS_VIEW_THRESHOLD: f64 = 0.5;
pub const SERVICE_VIEW_THRESHOLD: f64 = 0.7;
pub const FADE_IN_THRESHOLD: f64 = 0.1;

// UI pacing (milliseconds)
pub const DISLIKE_PROMPT_DELAY_MS: i32 = 500;
pub const FEEDBACK_SUCCESS_CLOSE_MS: i32 = 2000;
pub const FEEDBACK_FOCUS_DELAY_MS: i32 = 300;
pub const STAT_PRESS_RESET_MS: i32 = 150;

// Moderation limits in UTF-16 code units, matching the textarea's maxlength
pub const MIN_COMMENT_CHARS: usize = 10;
pub const MAX_COMMENT_CHARS: usize = 500;

// Click bonus granted for an accepted feedback submission
pub const FEEDBACK_CLICK_BONUS: u64 = 5;

// Engagement score weights, each sub-score capped at SCORE_CAP
pub const SCORE_CAP: u64 = 100;
pub const MS_PER_MINUTE: u64 = 60_000;
pub const TIME_POINTS_PER_MINUTE: u64 = 2;
pub const CLICK_POINTS: u64 = 3;
pub const PROJECT_POINTS: u64 = 10;
pub const SERVICE_POINTS: u64 = 15;
pub const SCORE_COMPONENTS: u64 = 5;

// Page effects
pub const HEADER_SCROLLED_AFTER_PX: f64 = 100.0;
pub const HEADER_HIDE_AFTER_PX: f64 = 200.0;
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0;
pub const WAVE_BAR_MIN_HEIGHT_PX: f64 = 8.0;
pub const WAVE_BAR_HEIGHT_SPAN_PX: f64 = 24.0;
pub const WAVE_BAR_MIN_OPACITY: f64 = 0.6;
pub const WAVE_BAR_OPACITY_SPAN: f64 = 0.4;

// Loading bar: starting fill, share driven by images, forced floor, and the
// pauses before filling and before hiding the bar
pub const LOADING_START_PERCENT: f64 = 10.0;
pub const LOADING_IMAGES_SPAN_PERCENT: f64 = 80.0;
pub const LOADING_FLOOR_PERCENT: f64 = 90.0;
pub const LOADING_FLOOR_DELAY_MS: i32 = 1000;
pub const LOADING_COMPLETE_DELAY_MS: i32 = 300;
pub const LOADING_HIDE_DELAY_MS: i32 = 500;
